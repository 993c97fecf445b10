use super::*;

#[test]
fn ui_state_defaults_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
    assert!(state.modal.is_none());
}

#[test]
fn menu_toggle_round_trips() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.toggle_menu();
    assert!(!state.menu_open);
}

#[test]
fn close_modal_is_idempotent() {
    let mut state = UiState::default();
    state.open_modal(ModalKind::Appointment);
    state.close_modal();
    assert!(state.modal.is_none());
    state.close_modal();
    assert!(state.modal.is_none());
}

#[test]
fn route_change_closes_everything() {
    let mut state = UiState {
        menu_open: true,
        modal: Some(ModalKind::OpeningHours),
    };
    state.close_overlays();
    assert!(!state.menu_open);
    assert!(state.modal.is_none());
}

#[test]
fn modal_kinds_are_distinct() {
    assert_ne!(ModalKind::Appointment, ModalKind::OpeningHours);
}
