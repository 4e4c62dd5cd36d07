//! Navbar Component
//!
//! Fixed top navigation with brand, anchor links and the mobile menu
//! toggle. The open state mirrors into `aria-expanded` on the toggle.

use leptos::prelude::*;

use crate::content::NAV_LINKS;
use crate::scroll;

/// Top navigation bar
#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="site-header">
            <nav class="navbar">
                <a class="brand" href="#home" on:click=scroll::on_anchor_click("#home")>
                    <span class="brand-mark">"♻"</span>
                    " GreenLoop"
                </a>

                <button
                    class="menu-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    on:click=toggle_menu
                >
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                    <span class="menu-bar"></span>
                </button>

                <ul class=move || if menu_open.get() { "nav-menu active" } else { "nav-menu" }>
                    {NAV_LINKS.iter().map(|(href, label)| {
                        let href = *href;
                        view! {
                            <li>
                                // A link click always closes the mobile menu before scrolling
                                <a
                                    class="nav-link"
                                    href=href
                                    on:click=move |ev: web_sys::MouseEvent| {
                                        ev.prevent_default();
                                        set_menu_open.set(false);
                                        scroll::scroll_to_fragment(href);
                                    }
                                >
                                    {*label}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>
        </header>
    }
}
