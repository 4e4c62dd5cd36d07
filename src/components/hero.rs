//! Hero Component
//!
//! Landing banner with the headline and the two CTA anchor links.

use leptos::prelude::*;

use crate::scroll;

/// Hero banner
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="home">
            <div class="hero-content">
                <h1 class="hero-title">"Waste less. Recover more."</h1>
                <p class="hero-subtitle">
                    "GreenLoop collects, sorts and reroutes your household waste so "
                    "materials stay in the loop instead of the landfill."
                </p>
                <div class="hero-actions">
                    <a
                        class="btn btn-primary"
                        href="#contact"
                        on:click=scroll::on_anchor_click("#contact")
                    >
                        "Request a pickup"
                    </a>
                    <a
                        class="btn btn-ghost"
                        href="#waste-guide"
                        on:click=scroll::on_anchor_click("#waste-guide")
                    >
                        "Browse the sorting guide"
                    </a>
                </div>
            </div>
        </section>
    }
}
