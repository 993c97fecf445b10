//! Site footer with the opening-hours modal trigger and contact link.

use leptos::prelude::*;

use crate::state::ui::{ModalKind, UiState};

#[component]
pub fn SiteFooter() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_hours = move |_| ui.update(|u| u.open_modal(ModalKind::OpeningHours));

    view! {
        <footer class="site-footer">
            <div class="site-footer__inner">
                <p class="site-footer__copy">"© 2026 Svitanok Medical Center"</p>
                <nav class="site-footer__links" aria-label="Footer">
                    <button class="link-button" on:click=on_hours>
                        "Opening hours"
                    </button>
                    <a href="#/contact">"Contact us"</a>
                    <a href="#/doctors">"Our doctors"</a>
                </nav>
            </div>
        </footer>
    }
}
