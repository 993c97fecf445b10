//! Network layer: fetching HTML partials for the page loader.

pub mod partials;
