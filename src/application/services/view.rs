//! Layout state of the main view.

/// Visibility of the left drawer holding the document trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    left_drawer_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            left_drawer_open: true,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_left_drawer_open(&self) -> bool {
        self.left_drawer_open
    }

    pub fn toggle_left_drawer(&mut self) {
        self.left_drawer_open = !self.left_drawer_open;
    }

    pub fn set_left_drawer_open(&mut self, open: bool) {
        self.left_drawer_open = open;
    }
}
