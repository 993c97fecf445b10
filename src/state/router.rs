//! Navigation state derived from the location fragment.
//!
//! The active route is the fragment with its `#/` prefix stripped, `home`
//! when empty. Unknown keys are legal here; the route table resolves them to
//! the fallback partial later.
//!
//! Superseded fetches: each navigation takes a token from a monotonically
//! increasing generation counter. A completion handler applies its result
//! only while its token is still the latest one, so of two overlapping
//! navigations the most recently requested always wins the content swap.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use crate::config::HOME_ROUTE;

/// Route key encoded in a location fragment.
///
/// Accepts `#/about`, `#about`, and bare `about` alike; empty input means
/// the home route.
pub fn route_from_fragment(fragment: &str) -> String {
    let token = fragment
        .strip_prefix("#/")
        .or_else(|| fragment.strip_prefix('#'))
        .unwrap_or(fragment);

    if token.is_empty() {
        HOME_ROUTE.to_owned()
    } else {
        token.to_owned()
    }
}

/// Monotonic counter stamping navigations so that late fetch completions
/// can be recognized and discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSequencer {
    latest: u64,
}

impl LoadSequencer {
    /// Start a new load and return its token.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `token` still belongs to the most recent load.
    pub fn is_current(self, token: u64) -> bool {
        token == self.latest
    }
}

/// Current route, loading flag for the progress bar, and the sequencer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterState {
    pub route: String,
    pub loading: bool,
    sequencer: LoadSequencer,
}

impl RouterState {
    pub fn new() -> Self {
        Self {
            route: HOME_ROUTE.to_owned(),
            loading: true,
            sequencer: LoadSequencer::default(),
        }
    }

    /// Mark a navigation as started and hand out its token.
    pub fn begin_load(&mut self) -> u64 {
        self.loading = true;
        self.sequencer.begin()
    }

    /// Settle a load. Clears the loading flag and returns `true` only when
    /// `token` is still current; a superseded load leaves the flag to the
    /// navigation that replaced it.
    pub fn finish_load(&mut self, token: u64) -> bool {
        if !self.sequencer.is_current(token) {
            return false;
        }
        self.loading = false;
        true
    }
}

impl Default for RouterState {
    fn default() -> Self {
        Self::new()
    }
}
