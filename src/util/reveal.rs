//! Reveal-on-scroll for elements tagged `.fade-in`.
//!
//! Each content swap re-arms the effect: prior visibility marks are cleared
//! so the animation replays, then every tagged element is watched with an
//! `IntersectionObserver` and marked visible the first time at least 15% of
//! it scrolls into view. One-shot per element per load. When the user asks
//! for reduced motion, everything is marked visible immediately instead.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, NodeList,
};

const TARGET_SELECTOR: &str = ".fade-in";
const VISIBLE_CLASS: &str = "is-visible";
const THRESHOLD: f64 = 0.15;
const ROOT_MARGIN: &str = "0px 0px -40px 0px";

thread_local! {
    // observer from the previous content load, disconnected on re-arm
    static ACTIVE: RefCell<Option<IntersectionObserver>> = const { RefCell::new(None) };
}

/// Arm the reveal effect for all tagged elements under `root`, replacing
/// any observer left over from the previous load.
pub fn arm(root: &Element) {
    let Ok(items) = root.query_selector_all(TARGET_SELECTOR) else {
        return;
    };
    if items.length() == 0 {
        return;
    }

    if prefers_reduced_motion() {
        for_each(&items, |el| {
            let _ = el.class_list().add_1(VISIBLE_CLASS);
        });
        return;
    }

    // reset so the animation replays after each content swap
    for_each(&items, |el| {
        let _ = el.class_list().remove_1(VISIBLE_CLASS);
    });

    disarm();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1(VISIBLE_CLASS);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);

    let Ok(observer) =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
    else {
        return;
    };
    callback.forget();

    for_each(&items, |el| observer.observe(el));
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(observer));
}

/// Disconnect the observer from the previous load, if any.
pub fn disarm() {
    ACTIVE.with(|slot| {
        if let Some(observer) = slot.borrow_mut().take() {
            observer.disconnect();
        }
    });
}

fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map_or(false, |mq| mq.matches())
}

fn for_each(items: &NodeList, f: impl Fn(&Element)) {
    for index in 0..items.length() {
        if let Some(element) = items.item(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            f(&element);
        }
    }
}
