use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_menu_closed() {
    let state = UiState::default();
    assert!(!state.menu_open);
}

// =============================================================
// toggle_menu
// =============================================================

#[test]
fn toggle_menu_flips_the_flag() {
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
}

#[test]
fn toggle_menu_twice_is_an_involution() {
    for start in [false, true] {
        let mut state = UiState { menu_open: start };
        state.toggle_menu();
        state.toggle_menu();
        assert_eq!(state.menu_open, start);
    }
}

// =============================================================
// close_menu
// =============================================================

#[test]
fn close_menu_closes_from_either_state() {
    for start in [false, true] {
        let mut state = UiState { menu_open: start };
        state.close_menu();
        assert!(!state.menu_open);
    }
}

#[test]
fn nav_click_after_toggle_ends_closed() {
    // Narrow-viewport scenario: open via toggle, then a nav click closes.
    let mut state = UiState::default();
    state.toggle_menu();
    assert!(state.menu_open);
    state.close_menu();
    assert!(!state.menu_open);
}
