/// Toggle and exclusive-selection state used by the menu, filters and tabs

/// Two-state menu panel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn from_hidden(hidden: bool) -> MenuState {
        if hidden { MenuState::Closed } else { MenuState::Open }
    }

    pub fn toggled(self) -> MenuState {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Value for the toggle's `aria-expanded` attribute
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// (open icon hidden, close icon hidden)
    pub fn icon_visibility(self) -> (bool, bool) {
        match self {
            MenuState::Closed => (false, true),
            MenuState::Open => (true, false),
        }
    }
}

/// Per-item selection flags with exactly one `true`, at `selected`.
/// Out-of-range indexes select nothing so callers can detect the mismatch.
pub fn exclusive_selection(len: usize, selected: usize) -> Vec<bool> {
    (0..len).map(|i| i == selected).collect()
}

/// Element id of the panel driven by a tab trigger
pub fn tab_panel_id(prefix: &str, key: &str) -> Option<String> {
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(format!("{}{}", prefix, key))
    }
}
