//! Waste Guide Component
//!
//! Filterable card grid for the four waste streams. Filtering fades cards
//! in and out with inline styles; the delays are ordered so a fade-out
//! finishes before the card leaves layout flow.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_reveal::visibility_signal;

use super::REVEAL_THRESHOLD;
use crate::content::{WasteCategory, WASTE_CATEGORIES, WASTE_FILTERS};

/// Delay before a shown card fades in
const SHOW_DELAY_MS: u32 = 100;
/// Delay before a hidden card leaves layout (must exceed `SHOW_DELAY_MS`)
const HIDE_DELAY_MS: u32 = 300;

/// A filter key admits a card when it is "all" or equals the card's kind
pub fn card_matches(filter: &str, kind: &str) -> bool {
    filter == "all" || filter == kind
}

/// Waste sorting guide section: filter bar plus card grid
#[component]
pub fn WasteGuide() -> impl IntoView {
    let (active_filter, set_active_filter) = signal(String::from("all"));

    view! {
        <section class="waste-guide" id="waste-guide">
            <div class="section-head">
                <h2>"Know your waste"</h2>
                <p>"Four streams cover everything a household throws away. Filter by stream to see what goes where."</p>
            </div>

            <div class="filter-bar">
                {WASTE_FILTERS.iter().map(|(key, label)| {
                    let key = *key;
                    let is_active = move || active_filter.get() == key;
                    view! {
                        <button
                            class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                            data-filter=key
                            on:click=move |_| set_active_filter.set(key.to_string())
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            <div class="waste-grid">
                {WASTE_CATEGORIES.iter().map(|category| view! {
                    <WasteCard category=category active_filter=active_filter />
                }).collect_view()}
            </div>
        </section>
    }
}

/// One card in the guide.
///
/// Show: `display: block` at once, fade in after `SHOW_DELAY_MS`.
/// Hide: fade out at once, `display: none` after `HIDE_DELAY_MS`.
#[component]
fn WasteCard(category: &'static WasteCategory, active_filter: ReadSignal<String>) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = visibility_signal(node_ref, REVEAL_THRESHOLD);

    // Inline style phases; empty until the user actually filters, so the
    // scroll reveal transition keeps control of opacity at page load.
    let (display, set_display) = signal(String::new());
    let (opacity, set_opacity) = signal(String::new());
    let (transform, set_transform) = signal(String::new());

    let kind = category.kind;
    Effect::new(move |prev: Option<()>| {
        let shown = card_matches(&active_filter.get(), kind);
        if prev.is_none() {
            return;
        }
        if shown {
            set_display.set("block".to_string());
            Timeout::new(SHOW_DELAY_MS, move || {
                set_opacity.set("1".to_string());
                set_transform.set("translateY(0)".to_string());
            })
            .forget();
        } else {
            set_opacity.set("0".to_string());
            set_transform.set("translateY(20px)".to_string());
            Timeout::new(HIDE_DELAY_MS, move || set_display.set("none".to_string())).forget();
        }
    });

    view! {
        <div
            node_ref=node_ref
            class=move || if visible.get() { "waste-card fade-in" } else { "waste-card" }
            data-type=category.kind
            style:display=move || display.get()
            style:opacity=move || opacity.get()
            style:transform=move || transform.get()
        >
            <span class="waste-icon">{category.icon}</span>
            <h3>{category.title}</h3>
            <p>{category.blurb}</p>
            <p class="waste-examples">{category.examples}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::WASTE_CATEGORIES;

    #[test]
    fn test_card_matches() {
        assert!(card_matches("all", "organic"));
        assert!(card_matches("organic", "organic"));
        assert!(!card_matches("organic", "recyclable"));
        assert!(!card_matches("recyclable", "organic"));
    }

    #[test]
    fn test_all_shows_every_card() {
        assert!(WASTE_CATEGORIES.iter().all(|c| card_matches("all", c.kind)));
    }

    #[test]
    fn test_each_filter_shows_only_its_kind() {
        for (key, _) in crate::content::WASTE_FILTERS.iter().skip(1) {
            for category in WASTE_CATEGORIES {
                assert_eq!(card_matches(key, category.kind), category.kind == *key);
            }
        }
    }

    #[test]
    fn test_fade_out_completes_before_layout_removal() {
        assert!(SHOW_DELAY_MS < HIDE_DELAY_MS);
    }
}
