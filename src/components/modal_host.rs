//! Modal overlays, rendered by a single host at the app root.
//!
//! Closed by the explicit control, a click outside the dialog, the Escape
//! key (global listener in `app`), and every route change (page host).

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::ui::{ModalKind, UiState};

#[component]
pub fn ModalHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move |_| ui.update(UiState::close_modal);

    view! {
        <Show when=move || ui.get().modal.is_some()>
            <div class="modal-overlay" on:click=close>
                <div
                    class="modal"
                    role="dialog"
                    aria-modal="true"
                    on:click=move |ev| ev.stop_propagation()
                >
                    <button class="modal__close" aria-label="Close" on:click=close>
                        "\u{00d7}"
                    </button>
                    {move || match ui.get().modal {
                        Some(ModalKind::Appointment) => view! { <AppointmentModal/> }.into_any(),
                        Some(ModalKind::OpeningHours) => view! { <OpeningHoursModal/> }.into_any(),
                        None => ().into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn AppointmentModal() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let on_contact = move |_| ui.update(UiState::close_modal);

    view! {
        <div class="modal__body">
            <h2>"Book a visit"</h2>
            <p>
                "Call us at "
                <strong>{config.contact.phone_display.clone()}</strong>
                " during opening hours, or leave a message through the contact form."
            </p>
            <a href="#/contact" class="btn btn--primary" on:click=on_contact>
                "Open the contact form"
            </a>
        </div>
    }
}

#[component]
fn OpeningHoursModal() -> impl IntoView {
    view! {
        <div class="modal__body">
            <h2>"Opening hours"</h2>
            <ul class="modal__hours">
                <li>"Mon - Fri: 8:00 - 20:00"</li>
                <li>"Saturday: 9:00 - 15:00"</li>
                <li>"Sunday: closed"</li>
            </ul>
            <p>"The emergency line answers around the clock."</p>
        </div>
    }
}
