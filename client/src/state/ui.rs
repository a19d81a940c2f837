//! Local UI chrome state (mobile menu flag).
//!
//! DESIGN
//! ======
//! The page has exactly one piece of mutable state: whether the narrow-viewport
//! navigation dropdown is expanded. It lives here, owned by the root component
//! as an `RwSignal` in context, and is only mutated through the two named
//! operations below. It resets with every full page load and is never
//! persisted.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state for the mobile navigation dropdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub menu_open: bool,
}

impl UiState {
    /// Flip the mobile menu. No other side effect.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Force the mobile menu closed. Idempotent; every anchor navigation
    /// calls this regardless of prior state.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
