#![allow(warnings)]
//! GreenLoop Site Entry Point

mod app;
mod components;
mod content;
mod counter;
mod scroll;
mod submit;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[SITE] mounting page behaviors".into());
    mount_to_body(App);
}
