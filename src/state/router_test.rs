use super::*;

// =============================================================
// route_from_fragment
// =============================================================

#[test]
fn empty_fragment_is_home() {
    assert_eq!(route_from_fragment(""), "home");
    assert_eq!(route_from_fragment("#"), "home");
    assert_eq!(route_from_fragment("#/"), "home");
}

#[test]
fn prefixed_fragment_yields_route_key() {
    assert_eq!(route_from_fragment("#/doctors"), "doctors");
    assert_eq!(route_from_fragment("#/about"), "about");
}

#[test]
fn bare_token_passes_through() {
    assert_eq!(route_from_fragment("services"), "services");
}

#[test]
fn unknown_keys_are_not_rejected_here() {
    // any string is a legal route key; the route table handles fallback
    assert_eq!(route_from_fragment("#/no-such-page"), "no-such-page");
}

// =============================================================
// LoadSequencer
// =============================================================

#[test]
fn sequencer_tokens_increase() {
    let mut seq = LoadSequencer::default();
    let a = seq.begin();
    let b = seq.begin();
    assert!(b > a);
}

#[test]
fn only_latest_token_is_current() {
    let mut seq = LoadSequencer::default();
    let a = seq.begin();
    assert!(seq.is_current(a));

    let b = seq.begin();
    assert!(!seq.is_current(a));
    assert!(seq.is_current(b));
}

// =============================================================
// RouterState
// =============================================================

#[test]
fn router_state_defaults_to_home() {
    let state = RouterState::new();
    assert_eq!(state.route, "home");
    assert!(state.loading);
}

#[test]
fn finish_load_clears_loading_for_current_token() {
    let mut state = RouterState::new();
    let token = state.begin_load();
    assert!(state.loading);
    assert!(state.finish_load(token));
    assert!(!state.loading);
}

#[test]
fn superseded_load_is_discarded_and_keeps_loading() {
    let mut state = RouterState::new();
    let first = state.begin_load();
    let second = state.begin_load();

    // the slow first fetch settles after the second navigation started
    assert!(!state.finish_load(first));
    assert!(state.loading, "superseded load must not clear the indicator");

    assert!(state.finish_load(second));
    assert!(!state.loading);
}
