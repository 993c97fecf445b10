//! UI state for the mobile menu and modal overlays.
//!
//! Both are plain open/closed flags reflected into DOM attributes by the
//! owning components. Every close path is idempotent, and a route change
//! closes everything: no modal may remain open across a navigation.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which modal overlay is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    Appointment,
    OpeningHours,
}

/// Mobile-menu and modal visibility flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
    pub modal: Option<ModalKind>,
}

impl UiState {
    pub fn open_modal(&mut self, kind: ModalKind) {
        self.modal = Some(kind);
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Route-change safety step: close the menu and any open modal.
    pub fn close_overlays(&mut self) {
        self.close_menu();
        self.close_modal();
    }
}
