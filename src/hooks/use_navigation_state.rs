use dioxus::prelude::*;
use tracing::debug;
use crate::hooks::use_disclosure_state::ToggleState;

/// Visibility of the compact (mobile) navigation menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    menu: ToggleState,
}

impl NavigationState {
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn toggle(&mut self) {
        self.menu.toggle();
    }

    /// Following any link dismisses the compact menu
    pub fn select_link(&mut self) {
        self.menu.close();
    }
}

/// Accessible label for the menu button
pub fn menu_toggle_label(menu_open: bool) -> &'static str {
    if menu_open {
        "Cerrar menú"
    } else {
        "Abrir menú"
    }
}

#[derive(Clone, Copy, PartialEq)]
pub struct NavigationHandle {
    pub state: Signal<NavigationState>,
}

pub fn use_navigation_state() -> NavigationHandle {
    let state = use_signal(NavigationState::default);

    NavigationHandle { state }
}

impl NavigationHandle {
    pub fn menu_open(&self) -> bool {
        self.state.read().menu_open()
    }

    /// Open or close the compact menu
    pub fn toggle(&mut self) {
        let mut state = self.state.write();
        state.toggle();
        debug!(menu_open = state.menu_open(), "navigation menu toggled");
    }

    /// Record a link choice and close the compact menu
    pub fn select_link(&mut self, href: &str) {
        self.state.write().select_link();
        debug!(href, "navigation link selected");
    }
}
