//! Footer Component
//!
//! Brand blurb, quick links and the copyright line. The year comes from
//! the visitor's clock so the page never shows a stale one.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::scroll::{current_year, on_anchor_click};

/// Page footer
#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    view! {
        <footer class="footer">
            <div class="footer-columns">
                <div class="footer-brand">
                    <a class="brand" href="#home" on:click=on_anchor_click("#home")>
                        <span class="brand-mark">"♻"</span>
                        " GreenLoop"
                    </a>
                    <p>"Community recycling for every street inside the ring road."</p>
                </div>

                <div class="footer-links">
                    <h4>"Explore"</h4>
                    <ul>
                        {NAV_LINKS.iter().map(|(href, label)| {
                            let href = *href;
                            view! {
                                <li>
                                    <a href=href on:click=on_anchor_click(href)>{*label}</a>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>

                <div class="footer-meta">
                    <h4>"Right now"</h4>
                    <p>
                        "The " <span class="current-year">{year}</span>
                        " collection calendar is out. Pick one up at any drop-off point."
                    </p>
                </div>
            </div>

            <div class="footer-bottom">
                <p>"© " {year} " GreenLoop. All rights reserved."</p>
            </div>
        </footer>
    }
}
