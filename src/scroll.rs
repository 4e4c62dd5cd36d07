//! Scrolling & Document Helpers
//!
//! Smooth in-page anchor scrolling under the fixed header, plus the
//! live copyright year.

use wasm_bindgen::JsCast;

/// Height of the fixed header that scroll targets must clear
pub const HEADER_OFFSET_PX: f64 = 80.0;

/// Element id for a fragment href ("#faq" -> "faq").
/// A bare "#" and non-fragment hrefs yield `None`.
pub fn fragment_id(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// Smooth-scroll so the element addressed by `href` sits just below the
/// fixed header. A bare "#" and an unknown id are silent no-ops.
pub fn scroll_to_fragment(href: &str) {
    let id = match fragment_id(href) {
        Some(id) => id,
        None => return,
    };

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            if let Some(el) = doc.get_element_by_id(id) {
                if let Some(target) = el.dyn_ref::<web_sys::HtmlElement>() {
                    let options = web_sys::ScrollToOptions::new();
                    options.set_top(f64::from(target.offset_top()) - HEADER_OFFSET_PX);
                    options.set_behavior(web_sys::ScrollBehavior::Smooth);
                    win.scroll_to_with_scroll_to_options(&options);
                }
            }
        }
    }
}

/// Build a click handler for an in-page anchor link: prevents the default
/// jump and smooth-scrolls instead.
pub fn on_anchor_click(href: &'static str) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        scroll_to_fragment(href);
    }
}

/// Smooth-scroll an element into view (used for the form feedback message)
pub fn scroll_into_view_smooth(el: &web_sys::Element) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Current calendar year from the host clock
pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#faq"), Some("faq"));
        assert_eq!(fragment_id("#waste-guide"), Some("waste-guide"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("https://example.com/#faq"), None);
        assert_eq!(fragment_id(""), None);
    }
}
