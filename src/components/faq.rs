//! FAQ Accordion Component
//!
//! Exclusive-open question list: opening one item collapses the rest, so
//! at most one answer is ever expanded.

use leptos::html;
use leptos::prelude::*;
use leptos_reveal::visibility_signal;

use super::REVEAL_THRESHOLD;
use crate::content::{FaqEntry, FAQ_ENTRIES};

/// Next open state after clicking item `clicked`: toggles it, closing
/// whichever other item was open.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

/// FAQ section
#[component]
pub fn FaqSection() -> impl IntoView {
    let (open, set_open) = signal::<Option<usize>>(None);

    view! {
        <section class="faq" id="faq">
            <div class="section-head">
                <h2>"Frequently asked questions"</h2>
            </div>
            <div class="faq-list">
                {FAQ_ENTRIES.iter().enumerate().map(|(index, entry)| view! {
                    <FaqItem index=index entry=entry open=open set_open=set_open />
                }).collect_view()}
            </div>
        </section>
    }
}

/// One collapsible question/answer pair
#[component]
fn FaqItem(
    index: usize,
    entry: &'static FaqEntry,
    open: ReadSignal<Option<usize>>,
    set_open: WriteSignal<Option<usize>>,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = visibility_signal(node_ref, REVEAL_THRESHOLD);

    let is_open = move || open.get() == Some(index);
    let item_class = move || {
        let mut class = String::from("faq-item");
        if is_open() {
            class.push_str(" active");
        }
        if visible.get() {
            class.push_str(" fade-in");
        }
        class
    };

    view! {
        <div node_ref=node_ref class=item_class>
            <button
                class="faq-question"
                aria-expanded=move || if is_open() { "true" } else { "false" }
                on:click=move |_| set_open.update(|open| *open = toggle_open(*open, index))
            >
                {entry.question}
                <span class="faq-chevron">{move || if is_open() { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{entry.answer}</p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clicking_a_closed_item_opens_it() {
        assert_eq!(toggle_open(None, 2), Some(2));
        assert_eq!(toggle_open(Some(0), 2), Some(2));
    }

    #[test]
    fn test_clicking_the_open_item_closes_everything() {
        assert_eq!(toggle_open(Some(2), 2), None);
    }

    #[test]
    fn test_state_tracks_the_last_toggle() {
        let clicks = [0usize, 1, 1, 3, 2, 2, 0, 4, 4, 4];
        let mut open = None;
        for click in clicks {
            open = toggle_open(open, click);
        }
        assert_eq!(open, Some(4));
    }
}
