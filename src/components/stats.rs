//! Impact Stats Component
//!
//! Counter band: each statistic animates from 0 to its target the first
//! time at least half of it scrolls into view, then never again.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_reveal::visibility_signal;

use crate::content::{Stat, STATS};
use crate::counter;

/// Counters fire once at least half the element is visible
const COUNTER_THRESHOLD: f64 = 0.5;

/// Impact statistics band
#[component]
pub fn StatsBand() -> impl IntoView {
    view! {
        <section class="stats-band">
            <div class="stats-grid">
                {STATS.iter().map(|stat| view! {
                    <StatCounter stat=stat />
                }).collect_view()}
            </div>
        </section>
    }
}

/// One animated statistic
#[component]
fn StatCounter(stat: &'static Stat) -> impl IntoView {
    let node_ref = NodeRef::<html::Span>::new();
    let visible = visibility_signal(node_ref, COUNTER_THRESHOLD);
    let (text, set_text) = signal(String::from("0"));

    // `visible` is one-shot, so the animation starts at most once
    Effect::new(move |_| {
        if visible.get() {
            spawn_local(animate_count(stat.target, set_text));
        }
    });

    view! {
        <div class="stat">
            <span class="stat-number" node_ref=node_ref data-count=stat.target.to_string()>
                {move || text.get()}
            </span>
            <span class="stat-label">{stat.label}</span>
        </div>
    }
}

/// Drive one counter run: ~16 ms ticks for 2 s, clamped at the target.
/// A zero target renders "0" without scheduling any tick.
async fn animate_count(target: u64, set_text: WriteSignal<String>) {
    if target == 0 {
        set_text.set(counter::display_value(0.0));
        return;
    }

    let mut current = 0.0;
    loop {
        TimeoutFuture::new(counter::COUNT_TICK_MS).await;
        let (next, done) = counter::advance(current, target);
        current = next;
        set_text.set(counter::display_value(current));
        if done {
            break;
        }
    }
}
