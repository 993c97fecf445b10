//! Contact form: controlled inputs, per-field validation messages, and
//! mailto delivery with a transient success notice.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::form::{ContactFormState, Field, MailDraft};
use crate::util::analytics;

const NOTICE_DISMISS_MS: u32 = 4_000;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let form = RwSignal::new(ContactFormState::default());

    let contact = config.contact.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let draft = form
            .try_update(|f| f.try_begin_submit(&contact))
            .flatten();
        let Some(draft) = draft else {
            // invalid input or a submit already in flight
            return;
        };

        analytics::track("contact_submit", &[("method", "mailto")]);
        open_mail_client(&draft);

        gloo_timers::callback::Timeout::new(NOTICE_DISMISS_MS, move || {
            form.update(ContactFormState::reset_submission);
        })
        .forget();
    };

    view! {
        <form class="contact-form" novalidate=true on:submit=on_submit>
            <h2>"Write to us"</h2>

            {move || {
                form.with(|f| f.banner())
                    .map(|banner| view! { <p class="contact-form__banner" role="alert">{banner}</p> })
            }}
            {move || {
                form.with(|f| f.notice.clone())
                    .map(|notice| view! { <p class="contact-form__notice" role="status">{notice}</p> })
            }}

            <label class="contact-form__field">
                "Name"
                <input
                    type="text"
                    name="name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <FieldMessage form field=Field::Name/>
            </label>

            <label class="contact-form__field">
                "Email"
                <input
                    type="email"
                    name="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <FieldMessage form field=Field::Email/>
            </label>

            <label class="contact-form__field">
                "Phone"
                <input
                    type="tel"
                    name="phone"
                    placeholder="+380 67 123 45 67"
                    prop:value=move || form.with(|f| f.phone.clone())
                    on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                />
                <FieldMessage form field=Field::Phone/>
            </label>

            <label class="contact-form__field">
                "Message"
                <textarea
                    name="message"
                    rows="6"
                    prop:value=move || form.with(|f| f.message.clone())
                    on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <FieldMessage form field=Field::Message/>
            </label>

            <button
                type="submit"
                class="btn btn--primary"
                disabled=move || form.with(|f| f.submitting)
            >
                "Send message"
            </button>
        </form>
    }
}

/// Inline validation message slot under one field.
#[component]
fn FieldMessage(form: RwSignal<ContactFormState>, field: Field) -> impl IntoView {
    view! {
        <span class="contact-form__error">
            {move || form.with(|f| f.error_for(field)).unwrap_or_default()}
        </span>
    }
}

/// Hand the draft to the user's mail client via a `mailto:` URI.
fn open_mail_client(draft: &MailDraft) {
    let subject = js_sys::encode_uri_component(&draft.subject);
    let body = js_sys::encode_uri_component(&draft.body);
    let href = format!("mailto:{}?subject={subject}&body={body}", draft.to);

    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&href);
    }
}
