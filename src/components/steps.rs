//! How It Works Component
//!
//! Numbered pickup steps, revealed as they scroll into view.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::visibility_signal;

use super::REVEAL_THRESHOLD;
use crate::content::{Step, STEPS};

/// How-it-works section
#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="how-it-works" id="how-it-works">
            <div class="section-head">
                <h2>"How pickup works"</h2>
                <p>"From booking to impact report in four steps."</p>
            </div>
            <div class="steps">
                {STEPS.iter().enumerate().map(|(index, step)| view! {
                    <StepCard number=index + 1 step=step />
                }).collect_view()}
            </div>
        </section>
    }
}

/// One numbered step
#[component]
fn StepCard(number: usize, step: &'static Step) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = visibility_signal(node_ref, REVEAL_THRESHOLD);

    view! {
        <div
            node_ref=node_ref
            class=move || if visible.get() { "step fade-in" } else { "step" }
        >
            <span class="step-number">{number}</span>
            <h3>{step.title}</h3>
            <p>{step.text}</p>
        </div>
    }
}
