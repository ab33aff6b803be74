//! UI-wide state: active panel, input mode and the open form.

use serde::{Deserialize, Serialize};

use crate::core::state::{form::FormState, PanelKind};

/// Which keymap is live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Normal,
    /// A create form is open and captures text input.
    Form,
    /// An insights id field captures text input.
    InsightInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub active_panel: PanelKind,
    pub mode: Mode,
    pub form: Option<FormState>,
}

impl UiState {
    pub fn new(initial_panel: PanelKind) -> Self {
        Self {
            active_panel: initial_panel,
            mode: Mode::Normal,
            form: None,
        }
    }

    pub fn open_form(&mut self, form: FormState) {
        self.form = Some(form);
        self.mode = Mode::Form;
    }

    pub fn close_form(&mut self) {
        self.form = None;
        self.mode = Mode::Normal;
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(PanelKind::Items)
    }
}
