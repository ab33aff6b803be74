use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::Msg,
    raw_msg::RawMsg,
    state::{AppState, Mode, PanelKind},
};
use crate::domain::entities::{TableStatus, WaiterStatus};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::Quit],
        RawMsg::Suspend => vec![Msg::Suspend],
        RawMsg::Resume => vec![Msg::Resume],
        RawMsg::Resize(width, height) => vec![Msg::Resize(width, height)],

        // User input - translate based on context
        RawMsg::Key(key) => translate_key_event(key, state),

        // Network settlements - direct mapping, token checks happen in update
        RawMsg::ListLoaded {
            panel,
            token,
            payload,
        } => vec![Msg::ListLoaded {
            panel,
            token,
            payload,
        }],
        RawMsg::ListFailed {
            panel,
            token,
            message,
        } => vec![Msg::ListFailed {
            panel,
            token,
            message,
        }],
        RawMsg::InsightLoaded {
            section,
            token,
            payload,
        } => vec![Msg::InsightLoaded {
            section,
            token,
            payload,
        }],
        RawMsg::InsightFailed {
            section,
            token,
            message,
        } => vec![Msg::InsightFailed {
            section,
            token,
            message,
        }],
        RawMsg::MutationDone { panel, kind, note } => vec![Msg::MutationDone { panel, kind, note }],
        RawMsg::MutationFailed {
            panel,
            kind,
            message,
        } => vec![Msg::MutationFailed {
            panel,
            kind,
            message,
        }],

        // System status
        RawMsg::SystemMessage(message) => vec![Msg::UpdateStatusMessage(message)],
        RawMsg::Error(error) => vec![Msg::Error(error)],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Global key bindings win in every mode
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::Quit],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::Suspend],

        _ => {}
    }

    match state.ui.mode {
        Mode::Form => translate_form_mode_keys(key),
        Mode::InsightInput => translate_insight_input_keys(key),
        Mode::Normal => translate_normal_mode_keys(key, state),
    }
}

/// Key bindings while a create form captures input
fn translate_form_mode_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc => vec![Msg::CancelForm],
        KeyCode::Enter => vec![Msg::SubmitForm],
        KeyCode::Tab | KeyCode::Down => vec![Msg::FormNextField],
        KeyCode::BackTab | KeyCode::Up => vec![Msg::FormPrevField],
        KeyCode::Backspace => vec![Msg::FormBackspace],
        KeyCode::Char(c) => vec![Msg::FormInput(c)],
        _ => vec![],
    }
}

/// Key bindings while an insights id field captures input
fn translate_insight_input_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Esc => vec![Msg::CancelInsightInput],
        KeyCode::Enter => vec![Msg::RunInsight],
        KeyCode::Backspace => vec![Msg::InsightBackspace],
        KeyCode::Char(c) if c.is_ascii_digit() => vec![Msg::InsightInput(c)],
        _ => vec![],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let panel = state.ui.active_panel;

    match key.code {
        KeyCode::Char('q') => vec![Msg::Quit],
        KeyCode::Tab => vec![Msg::NextPanel],
        KeyCode::BackTab => vec![Msg::PrevPanel],
        KeyCode::Char(c @ '1'..='8') => {
            let index = c as usize - '1' as usize;
            PanelKind::from_repr(index)
                .map(|panel| vec![Msg::SelectPanel(panel)])
                .unwrap_or_default()
        }
        KeyCode::Char('r') => vec![Msg::Refresh],
        KeyCode::Esc => vec![Msg::ClearStatusMessage],

        // Insights has its own navigation; everything else scrolls a list
        KeyCode::Char('j') | KeyCode::Down if panel == PanelKind::Insights => {
            vec![Msg::NextSection]
        }
        KeyCode::Char('k') | KeyCode::Up if panel == PanelKind::Insights => vec![Msg::PrevSection],
        KeyCode::Char('i') if panel == PanelKind::Insights => vec![Msg::StartInsightInput],
        KeyCode::Enter if panel == PanelKind::Insights => vec![Msg::RunInsight],

        KeyCode::Char('j') | KeyCode::Down => vec![Msg::ScrollDown],
        KeyCode::Char('k') | KeyCode::Up => vec![Msg::ScrollUp],
        KeyCode::Char('g') => vec![Msg::ScrollToTop],
        KeyCode::Char('G') => vec![Msg::ScrollToBottom],

        KeyCode::Char('a') if panel.has_form() => vec![Msg::OpenForm],

        KeyCode::Char(' ') if panel == PanelKind::Menu => vec![Msg::ToggleAvailability],

        KeyCode::Char('+') | KeyCode::Char('=') => vec![Msg::IncrementValue],
        KeyCode::Char('-') => vec![Msg::DecrementValue],

        KeyCode::Char('v') if panel == PanelKind::Tables => {
            vec![Msg::SetTableStatus(TableStatus::Available)]
        }
        KeyCode::Char('o') if panel == PanelKind::Tables => {
            vec![Msg::SetTableStatus(TableStatus::Occupied)]
        }
        KeyCode::Char('b') if panel == PanelKind::Tables => {
            vec![Msg::SetTableStatus(TableStatus::Reserved)]
        }
        KeyCode::Char('v') if panel == PanelKind::Waiters => {
            vec![Msg::SetWaiterStatus(WaiterStatus::Available)]
        }
        KeyCode::Char('b') if panel == PanelKind::Waiters => {
            vec![Msg::SetWaiterStatus(WaiterStatus::Busy)]
        }

        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::state::FormState;

    fn key(code: KeyCode) -> RawMsg {
        RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> RawMsg {
        RawMsg::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_ctrl_c_quits_in_any_mode() {
        let mut state = AppState::default();
        assert_eq!(translate_raw_to_domain(ctrl('c'), &state), vec![Msg::Quit]);

        state
            .ui
            .open_form(FormState::for_panel(PanelKind::Waiters).unwrap());
        assert_eq!(translate_raw_to_domain(ctrl('c'), &state), vec![Msg::Quit]);
    }

    #[test]
    fn test_normal_mode_navigation_keys() {
        let state = AppState::default();
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Tab), &state),
            vec![Msg::NextPanel]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('4')), &state),
            vec![Msg::SelectPanel(PanelKind::Tables)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('j')), &state),
            vec![Msg::ScrollDown]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::Quit]
        );
    }

    #[test]
    fn test_form_mode_captures_text() {
        let mut state = AppState::default();
        state
            .ui
            .open_form(FormState::for_panel(PanelKind::Items).unwrap());

        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('q')), &state),
            vec![Msg::FormInput('q')]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::SubmitForm]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Esc), &state),
            vec![Msg::CancelForm]
        );
    }

    #[test]
    fn test_status_keys_depend_on_active_panel() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Tables;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('o')), &state),
            vec![Msg::SetTableStatus(TableStatus::Occupied)]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('b')), &state),
            vec![Msg::SetTableStatus(TableStatus::Reserved)]
        );

        state.ui.active_panel = PanelKind::Waiters;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('b')), &state),
            vec![Msg::SetWaiterStatus(WaiterStatus::Busy)]
        );

        // 'o' is unbound outside the tables panel
        assert_eq!(translate_raw_to_domain(key(KeyCode::Char('o')), &state), vec![]);
    }

    #[test]
    fn test_insights_panel_keys() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Insights;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('j')), &state),
            vec![Msg::NextSection]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('i')), &state),
            vec![Msg::StartInsightInput]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Enter), &state),
            vec![Msg::RunInsight]
        );

        state.ui.mode = Mode::InsightInput;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('4')), &state),
            vec![Msg::InsightInput('4')]
        );
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('x')), &state),
            vec![]
        );
    }

    #[test]
    fn test_open_form_only_on_form_panels() {
        let mut state = AppState::default();
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('a')), &state),
            vec![Msg::OpenForm]
        );

        state.ui.active_panel = PanelKind::Menu;
        assert_eq!(
            translate_raw_to_domain(key(KeyCode::Char('a')), &state),
            vec![]
        );
    }

    #[test]
    fn test_tick_and_render_produce_no_domain_messages() {
        let state = AppState::default();
        assert_eq!(translate_raw_to_domain(RawMsg::Tick, &state), vec![]);
        assert_eq!(translate_raw_to_domain(RawMsg::Render, &state), vec![]);
    }
}
