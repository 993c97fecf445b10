//! Site header: logo, navigation with active-link highlighting, theme
//! toggle, appointment CTA, and the hamburger-driven mobile menu.

use leptos::prelude::*;

use crate::state::router::RouterState;
use crate::state::ui::{ModalKind, UiState};
use crate::util::theme::{self, Theme};

const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About us"),
    ("services", "Services"),
    ("doctors", "Doctors"),
    ("contact", "Contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let theme_sig = expect_context::<RwSignal<Theme>>();

    let on_toggle_theme = move |_| {
        let next = theme::toggle(theme_sig.get_untracked());
        theme_sig.set(next);
    };
    let on_toggle_menu = move |_| ui.update(UiState::toggle_menu);
    let on_book = move |_| ui.update(|u| u.open_modal(ModalKind::Appointment));

    let header_class = move || {
        if ui.get().menu_open {
            "site-header is-menu-open"
        } else {
            "site-header"
        }
    };

    view! {
        <header class=header_class>
            <div class="site-header__inner">
                <a href="#/home" class="site-header__logo">"Svitanok Medical Center"</a>

                <nav class="site-header__nav" aria-label="Primary">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(route, label)| view! { <NavLink route label/> })
                        .collect::<Vec<_>>()}
                </nav>

                <button class="btn btn--primary site-header__cta" on:click=on_book>
                    "Book a visit"
                </button>

                <button
                    class="site-header__theme"
                    title="Switch theme"
                    on:click=on_toggle_theme
                >
                    {move || theme_sig.get().toggle_glyph()}
                </button>

                <button
                    class="site-header__burger"
                    aria-controls="mobile-menu"
                    aria-expanded=move || ui.get().menu_open.to_string()
                    aria-label=move || {
                        if ui.get().menu_open { "Close menu" } else { "Open menu" }
                    }
                    on:click=on_toggle_menu
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <MobileMenu/>
        </header>
    }
}

/// One navigation link; carries the active class and `aria-current` while
/// its route is the current one.
#[component]
fn NavLink(route: &'static str, label: &'static str) -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();

    let link_class = move || {
        if router.get().route == route {
            "nav-link active"
        } else {
            "nav-link"
        }
    };
    let aria_current = move || {
        if router.get().route == route {
            Some("page")
        } else {
            None
        }
    };

    view! {
        <a href=format!("#/{route}") class=link_class aria-current=aria_current>
            {label}
        </a>
    }
}

/// Collapsible menu shown on small screens; every link click closes it.
#[component]
fn MobileMenu() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_link = move |_| ui.update(UiState::close_menu);

    view! {
        <div id="mobile-menu" class="mobile-menu" hidden=move || !ui.get().menu_open>
            <nav class="mobile-menu__nav" aria-label="Mobile">
                {NAV_LINKS
                    .into_iter()
                    .map(|(route, label)| {
                        view! {
                            <a href=format!("#/{route}") class="mobile-menu__link" on:click=on_link>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </div>
    }
}
