//! # clinic-site
//!
//! Leptos + WASM frontend for the Svitanok Medical Center marketing site.
//! Replaces the hand-written JavaScript SPA shell with a Rust-native UI
//! layer: a fragment-routed page loader that swaps HTML partials into the
//! content region, plus theme, navigation, modal, and contact-form behavior.
//!
//! This crate contains the site shell components, the partial fetcher,
//! application state, and small browser utilities. Routing is a static
//! string-keyed table over the location fragment; there is no server side.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod state;
pub mod util;
