//! Contact Submission
//!
//! Async boundary for the contact form. There is no backend yet: sending
//! simulates the round-trip latency and logs the payload it would post,
//! so a real HTTP call can replace the body without touching the form.

use gloo_timers::future::TimeoutFuture;

use crate::validate::ContactRequest;

/// Simulated backend round-trip time
pub const SEND_LATENCY_MS: u32 = 2_000;

/// Submit a contact request. Resolves after a fixed simulated delay.
pub async fn send_message(req: &ContactRequest) -> Result<(), String> {
    let payload = serde_wasm_bindgen::to_value(req).map_err(|e| e.to_string())?;
    web_sys::console::log_2(&"[CONTACT] sending".into(), &payload);

    TimeoutFuture::new(SEND_LATENCY_MS).await;

    web_sys::console::log_1(&format!("[CONTACT] delivered message from {}", req.name).into());
    Ok(())
}
