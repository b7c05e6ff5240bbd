//! Page shell state: active view and hydration readiness.
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of the company list state so the table and
//! the form can be swapped without touching loaded data.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Content shown below the view toggle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActiveView {
    #[default]
    Table,
    Form,
}

impl ActiveView {
    /// Toggle order, left to right.
    pub const ALL: [ActiveView; 2] = [ActiveView::Table, ActiveView::Form];

    /// Label of the button that selects this view.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ActiveView::Table => "Company List",
            ActiveView::Form => "Register Company",
        }
    }
}

/// Page-level UI state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_view: ActiveView,
    /// False during the server render pass; set once after hydration.
    pub client_ready: bool,
}

impl UiState {
    /// Flip `client_ready` on. Returns `false` if it was already set.
    pub fn mark_client_ready(&mut self) -> bool {
        if self.client_ready {
            return false;
        }
        self.client_ready = true;
        true
    }
}
