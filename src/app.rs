//! Root application component: configuration, shared state contexts,
//! global browser listeners, document metadata, and the shell layout.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title, provide_meta_context};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::components::loading_bar::LoadingBar;
use crate::components::modal_host::ModalHost;
use crate::components::page_host::PageHost;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::config::{HOME_ROUTE, SiteConfig};
use crate::state::router::{self, RouterState};
use crate::state::ui::UiState;
use crate::util::theme;

/// Root component.
///
/// Builds the site configuration, provides all shared state contexts, wires
/// the two global listeners (hashchange, Escape), and lays out the shell.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::defaults();
    let router = RwSignal::new(RouterState::new());
    let ui = RwSignal::new(UiState::default());
    let theme_sig = RwSignal::new(theme::read_preference());

    provide_context(config.clone());
    provide_context(router);
    provide_context(ui);
    provide_context(theme_sig);

    theme::apply(theme_sig.get_untracked());
    install_location_hooks(router);
    install_escape_hook(ui);

    // document metadata follows the active route
    let route = Memo::new(move |_| router.with(|r| r.route.clone()));
    let meta_config = config;

    view! {
        {move || {
            let meta = meta_config.meta.get(&route.get()).clone();
            view! {
                <Title text=meta.title/>
                <Meta name="description" content=meta.description/>
                <Link rel="canonical" href=meta.canonical/>
            }
        }}

        <SiteHeader/>
        <LoadingBar/>
        <PageHost/>
        <SiteFooter/>
        <ModalHost/>
    }
}

/// Default an empty fragment to the home route, sync the router state to
/// the current fragment, and follow future `hashchange` events (covers the
/// browser back/forward buttons).
fn install_location_hooks(router: RwSignal<RouterState>) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Ok(hash) = window.location().hash() {
        if hash.is_empty() {
            let _ = window.location().set_hash(&format!("#/{HOME_ROUTE}"));
        }
    }
    sync_route(router);

    let closure = Closure::<dyn FnMut()>::new(move || sync_route(router));
    let _ = window
        .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn sync_route(router: RwSignal<RouterState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let hash = window.location().hash().unwrap_or_default();
    let route = router::route_from_fragment(&hash);

    // only notify on a real change; setting the default hash above already
    // fires one hashchange
    if router.with_untracked(|r| r.route != route) {
        router.update(|r| r.route = route);
    }
}

/// Escape closes the mobile menu and any open modal, wherever focus is.
fn install_escape_hook(ui: RwSignal<UiState>) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
        move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                ui.update(UiState::close_overlays);
            }
        },
    );
    let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
