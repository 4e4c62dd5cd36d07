//! Contact Section Component
//!
//! Contact details beside the message form. The form validates on
//! submit, shows a busy state while the (simulated) send is in flight,
//! then resets and surfaces a success banner that hides itself.

use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_reveal::visibility_signal;
use reactive_stores::Store;
use wasm_bindgen::JsCast;

use super::REVEAL_THRESHOLD;
use crate::content::{ContactDetail, CONTACT_DETAILS, SUBJECTS};
use crate::scroll::scroll_into_view_smooth;
use crate::submit::send_message;
use crate::validate::{validate, ContactRequest, Field, FieldErrors};

/// How long the success banner stays visible
const SUCCESS_VISIBLE_MS: u32 = 5_000;

const SUCCESS_TEXT: &str = "Your message has been sent! We will get back to you shortly.";

/// Contact form fields with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Contact section: details column plus the form
#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section class="contact" id="contact">
            <div class="section-head">
                <h2>"Get in touch"</h2>
                <p>"Questions about a route, a stream or a partnership? Write to us."</p>
            </div>
            <div class="contact-layout">
                <div class="contact-details">
                    {CONTACT_DETAILS.iter().map(|detail| view! {
                        <ContactDetailItem detail=detail />
                    }).collect_view()}
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

/// One depot/email/hotline row beside the form
#[component]
fn ContactDetailItem(detail: &'static ContactDetail) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = visibility_signal(node_ref, REVEAL_THRESHOLD);

    view! {
        <div
            node_ref=node_ref
            class=move || if visible.get() { "contact-item fade-in" } else { "contact-item" }
        >
            <span class="contact-icon">{detail.icon}</span>
            <div>
                <h3>{detail.label}</h3>
                <p>{detail.value}</p>
            </div>
        </div>
    }
}

/// The message form itself
#[component]
fn ContactForm() -> impl IntoView {
    let fields = Store::new(ContactFields::default());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (sending, set_sending) = signal(false);
    let (success, set_success) = signal::<Option<&'static str>>(None);
    let message_ref = NodeRef::<html::Div>::new();

    let name_error = Memo::new(move |_| errors.get().name);
    let email_error = Memo::new(move |_| errors.get().email);
    let subject_error = Memo::new(move |_| errors.get().subject);
    let message_error = Memo::new(move |_| errors.get().message);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = ContactRequest {
            name: fields.name().get(),
            email: fields.email().get(),
            subject: fields.subject().get(),
            message: fields.message().get(),
        };
        let checked = validate(&request);
        set_errors.set(checked);
        if !checked.is_valid() {
            return;
        }

        set_sending.set(true);
        spawn_local(async move {
            match send_message(&request).await {
                Ok(()) => {
                    set_success.set(Some(SUCCESS_TEXT));
                    *fields.write() = ContactFields::default();
                    set_sending.set(false);
                    if let Some(banner) = message_ref.get_untracked() {
                        scroll_into_view_smooth(&banner);
                    }
                    TimeoutFuture::new(SUCCESS_VISIBLE_MS).await;
                    set_success.set(None);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[CONTACT] send failed: {err}").into());
                    set_sending.set(false);
                }
            }
        });
    };

    view! {
        <form class="contact-form" id="contactForm" on:submit=on_submit novalidate=true>
            <div class="form-group">
                <label for="name">"Full name"</label>
                <input
                    type="text"
                    id="name"
                    placeholder="Jane Rivera"
                    prop:value=move || fields.name().get()
                    on:input=move |ev| {
                        fields.name().set(event_target_value(&ev));
                        set_errors.update(|errors| errors.clear(Field::Name));
                    }
                />
                <FieldError id="nameError" message=name_error />
            </div>

            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="email"
                    id="email"
                    placeholder="you@example.com"
                    prop:value=move || fields.email().get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        fields.email().set(input.value());
                        set_errors.update(|errors| errors.clear(Field::Email));
                    }
                />
                <FieldError id="emailError" message=email_error />
            </div>

            <div class="form-group">
                <label for="subject">"Subject"</label>
                <select
                    id="subject"
                    prop:value=move || fields.subject().get()
                    on:change=move |ev| {
                        fields.subject().set(event_target_value(&ev));
                        set_errors.update(|errors| errors.clear(Field::Subject));
                    }
                >
                    <option value="">"Choose a subject..."</option>
                    {SUBJECTS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
                <FieldError id="subjectError" message=subject_error />
            </div>

            <div class="form-group">
                <label for="message">"Message"</label>
                <textarea
                    id="message"
                    rows="5"
                    placeholder="Tell us about your street, your waste or your idea..."
                    prop:value=move || fields.message().get()
                    on:input=move |ev| {
                        fields.message().set(event_target_value(&ev));
                        set_errors.update(|errors| errors.clear(Field::Message));
                    }
                ></textarea>
                <FieldError id="messageError" message=message_error />
            </div>

            <button type="submit" class="btn btn-primary" disabled=move || sending.get()>
                {move || if sending.get() {
                    view! { <span class="loading"></span> " Sending..." }.into_any()
                } else {
                    view! { "Send message" }.into_any()
                }}
            </button>

            // Kept in the tree even while empty so the success banner can
            // be scrolled into view the moment it appears.
            <div
                node_ref=message_ref
                id="formMessage"
                class=move || if success.get().is_some() {
                    "form-message success visible"
                } else {
                    "form-message"
                }
            >
                {move || success.get().unwrap_or_default()}
            </div>
        </form>
    }
}

/// Inline validation message under a field
#[component]
fn FieldError(id: &'static str, message: Memo<Option<&'static str>>) -> impl IntoView {
    view! {
        <span
            class="error-message"
            id=id
            style:display=move || if message.get().is_some() { "block" } else { "none" }
        >
            {move || message.get().unwrap_or_default()}
        </span>
    }
}
