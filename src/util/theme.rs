//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies it as the
//! `data-theme` attribute on the `<html>` element, swapping the favicon to
//! match. Toggle writes back to `localStorage` and re-applies. The default
//! is light; unknown stored values also fall back to light rather than the
//! system preference.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use wasm_bindgen::JsCast;

const STORAGE_KEY: &str = "svitanok_theme";

/// Color theme for the whole site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Parse a stored value; anything but `"dark"` is light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Theme::Dark } else { Theme::Light }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph shown on the toggle button: the theme you would switch to.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{1F31E}",
        }
    }

    pub fn favicon(self) -> &'static str {
        match self {
            Theme::Light => "favicon.ico",
            Theme::Dark => "favicon-dark.ico",
        }
    }
}

/// Read the stored theme preference; light when nothing usable is stored.
pub fn read_preference() -> Theme {
    let Some(window) = web_sys::window() else {
        return Theme::default();
    };
    if let Ok(Some(storage)) = window.local_storage() {
        if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
            return Theme::from_stored(&value);
        }
    }
    Theme::default()
}

/// Apply `theme` to the document, persist it, and swap the favicon.
pub fn apply(theme: Theme) {
    let Some(window) = web_sys::window() else {
        return;
    };

    if let Some(document) = window.document() {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
        set_favicon(&document, theme);
    }

    if let Ok(Some(storage)) = window.local_storage() {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

/// Toggle away from `current`, apply, and return the new theme.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    next
}

fn set_favicon(document: &web_sys::Document, theme: Theme) {
    if let Some(element) = document.get_element_by_id("site-favicon") {
        if let Some(link) = element.dyn_ref::<web_sys::HtmlLinkElement>() {
            link.set_href(theme.favicon());
        }
    }
}
