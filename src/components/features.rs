//! Features Component
//!
//! Feature cards that fade in as they scroll into view.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::visibility_signal;

use super::REVEAL_THRESHOLD;
use crate::content::{Feature, FEATURES};

/// Feature grid section
#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features" id="features">
            <div class="section-head">
                <h2>"Why neighborhoods switch to GreenLoop"</h2>
                <p>"A collection service built around how households actually sort."</p>
            </div>
            <div class="feature-grid">
                {FEATURES.iter().map(|feature| view! {
                    <FeatureCard feature=feature />
                }).collect_view()}
            </div>
        </section>
    }
}

/// One feature card, revealed once on first viewport entry
#[component]
fn FeatureCard(feature: &'static Feature) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = visibility_signal(node_ref, REVEAL_THRESHOLD);

    view! {
        <div
            node_ref=node_ref
            class=move || if visible.get() { "feature-card fade-in" } else { "feature-card" }
        >
            <span class="feature-icon">{feature.icon}</span>
            <h3>{feature.title}</h3>
            <p>{feature.text}</p>
        </div>
    }
}
