//! Leptos Reveal Utilities
//!
//! One-shot viewport visibility for Leptos using IntersectionObserver.
//! An element is watched until it first crosses the configured threshold,
//! then unobserved, so each trigger fires at most once.

use leptos::html::ElementType;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Observe `target` and run `on_visible` the first time it intersects the
/// viewport by at least `threshold` (0.0..=1.0). Observation stops before the
/// callback runs, and the callback is consumed on first use, so it fires at
/// most once even when one batch carries several intersecting entries.
pub fn observe_once(target: &web_sys::Element, threshold: f64, on_visible: impl FnOnce() + 'static) {
    let mut on_visible = Some(on_visible);
    let cb = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    observer.unobserve(&entry.target());
                    observer.disconnect();
                    if let Some(on_visible) = on_visible.take() {
                        on_visible();
                    }
                    break;
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    if let Ok(observer) = web_sys::IntersectionObserver::new_with_options(cb.as_ref().unchecked_ref(), &options) {
        observer.observe(target);
    }
    cb.forget();
}

/// Create a one-shot visibility signal for an element bound to `node_ref`.
///
/// The signal starts `false` and flips to `true` the first time the mounted
/// element crosses `threshold`; it never flips back. Observation starts once
/// the node mounts and stops after the first trigger.
pub fn visibility_signal<E>(node_ref: NodeRef<E>, threshold: f64) -> ReadSignal<bool>
where
    E: ElementType,
    E::Output: JsCast + Clone + Into<web_sys::Element> + 'static,
{
    let (visible, set_visible) = signal(false);
    let (attached, set_attached) = signal(false);

    Effect::new(move |_| {
        if attached.get_untracked() {
            return;
        }
        if let Some(el) = node_ref.get() {
            set_attached.set(true);
            observe_once(&el.into(), threshold, move || set_visible.set(true));
        }
    });

    visible
}
