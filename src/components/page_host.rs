//! The content region, driven by the route signal.
//!
//! Owns the navigation pipeline: close overlays, mark loading, fetch the
//! partial, swap the markup in, reset scroll, re-arm the reveal effect, and
//! emit the page-view event. A failed fetch renders an inline error panel
//! naming the partial path; the loading indicator is cleared either way.
//!
//! Overlapping navigations: every fetch carries a sequencer token and a
//! completion only applies while its token is still the latest, so rapid
//! route changes settle on the most recently requested page.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::contact_form::ContactForm;
use crate::config::{CONTACT_ROUTE, SiteConfig};
use crate::net::partials;
use crate::state::router::RouterState;
use crate::state::ui::UiState;
use crate::util::{analytics, reveal};

/// What the content region currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
enum PageContent {
    Pending,
    Html(String),
    Failed { path: String },
}

#[component]
pub fn PageHost() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let router = expect_context::<RwSignal<RouterState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let content = RwSignal::new(PageContent::Pending);
    let host_ref = NodeRef::<leptos::html::Main>::new();

    // re-runs only when the route key itself changes, not on loading flips
    let route = Memo::new(move |_| router.with(|r| r.route.clone()));

    Effect::new(move |_| {
        let route = route.get();

        // safety step: nothing stays open across a navigation
        ui.update(UiState::close_overlays);

        let token = router
            .try_update(RouterState::begin_load)
            .unwrap_or_default();
        let path = config.routes.resolve(&route).to_owned();
        let title = config.meta.get(&route).title.clone();

        log::debug!("navigate: {route} -> {path}");
        analytics::page_view(&route, &title);

        spawn_local(async move {
            let result = partials::fetch_partial(&path).await;

            let still_current = router
                .try_update(|r| r.finish_load(token))
                .unwrap_or(false);
            if !still_current {
                log::debug!("navigate: superseded load of {path}, dropping result");
                return;
            }

            match result {
                Ok(html) => content.set(PageContent::Html(html)),
                Err(err) => {
                    log::warn!("navigate: failed to load {path}: {err}");
                    content.set(PageContent::Failed { path });
                }
            }
        });
    });

    // post-swap hooks need the fresh subtree in the DOM, hence a second
    // effect keyed on the swapped content
    Effect::new(move |_| {
        let swapped = content.with(|c| matches!(c, PageContent::Html(_)));
        if !swapped {
            return;
        }
        scroll_to_top();
        if let Some(element) = host_ref.get_untracked() {
            reveal::arm(&element);
        }
    });

    view! {
        <main class="page-host" node_ref=host_ref>
            {move || match content.get() {
                PageContent::Pending => {
                    view! { <section class="page-host__pending"></section> }.into_any()
                }
                PageContent::Html(html) => {
                    view! { <div class="page-host__partial" inner_html=html></div> }.into_any()
                }
                PageContent::Failed { path } => {
                    view! {
                        <section class="page-host__error">
                            <h2>"Page failed to load"</h2>
                            <p>"Resource: " {path}</p>
                            <p>"Please check your connection and try the link again."</p>
                        </section>
                    }
                        .into_any()
                }
            }}
            <Show when=move || route.get() == CONTACT_ROUTE>
                <ContactForm/>
            </Show>
        </main>
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
