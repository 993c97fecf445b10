//! Thin progress bar under the header, visible while a partial loads.

use leptos::prelude::*;

use crate::state::router::RouterState;

#[component]
pub fn LoadingBar() -> impl IntoView {
    let router = expect_context::<RwSignal<RouterState>>();

    let bar_class = move || {
        if router.get().loading {
            "loading-bar loading-bar--active"
        } else {
            "loading-bar"
        }
    };

    view! { <div class=bar_class role="progressbar" aria-label="Page loading"></div> }
}
