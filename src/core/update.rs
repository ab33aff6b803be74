use crate::{
    core::cmd::Cmd,
    core::msg::Msg,
    core::state::{AppState, FormState, InsightSection, Mode, PanelKind},
    domain::entities::{InsightPayload, ListPayload},
    domain::requests::{MutationKind, PatchRequest},
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages
        Msg::Quit => {
            state.system.should_quit = true;
            (state, vec![])
        }

        Msg::Suspend => {
            state.system.should_suspend = true;
            (state, vec![])
        }

        Msg::Resume => {
            state.system.should_suspend = false;
            (state, vec![])
        }

        // The runner redraws every frame; nothing to record here
        Msg::Resize(_, _) => (state, vec![]),

        Msg::UpdateStatusMessage(message) => {
            state.system.set_message(message);
            (state, vec![])
        }

        Msg::ClearStatusMessage => {
            state.system.clear_message();
            (state, vec![])
        }

        Msg::Error(error) => {
            state.system.set_message(format!("[Error] {error}"));
            (state, vec![Cmd::LogError { message: error }])
        }

        // Panel navigation; the first visit to a list panel starts its fetch
        Msg::SelectPanel(panel) => focus_panel(state, panel),
        Msg::NextPanel => {
            let next = state.ui.active_panel.next();
            focus_panel(state, next)
        }
        Msg::PrevPanel => {
            let prev = state.ui.active_panel.prev();
            focus_panel(state, prev)
        }

        // List scrolling on the active panel
        Msg::ScrollUp => {
            let panel = state.ui.active_panel;
            state.panels.scroll_up(panel);
            (state, vec![])
        }
        Msg::ScrollDown => {
            let panel = state.ui.active_panel;
            state.panels.scroll_down(panel);
            (state, vec![])
        }
        Msg::ScrollToTop => {
            let panel = state.ui.active_panel;
            state.panels.scroll_to_top(panel);
            (state, vec![])
        }
        Msg::ScrollToBottom => {
            let panel = state.ui.active_panel;
            state.panels.scroll_to_bottom(panel);
            (state, vec![])
        }

        Msg::Refresh => {
            let panel = state.ui.active_panel;
            if panel == PanelKind::Insights {
                return run_insight(state);
            }
            let commands = start_fetch(&mut state, panel);
            (state, commands)
        }

        // Create-form lifecycle
        Msg::OpenForm => {
            let panel = state.ui.active_panel;
            if state.ui.mode == Mode::Normal {
                if let Some(form) = FormState::for_panel(panel) {
                    state.ui.open_form(form);
                }
            }
            (state, vec![])
        }

        Msg::CancelForm => {
            state.ui.close_form();
            (state, vec![])
        }

        Msg::FormNextField => {
            if let Some(form) = state.ui.form.as_mut() {
                form.focus_next();
            }
            (state, vec![])
        }

        Msg::FormPrevField => {
            if let Some(form) = state.ui.form.as_mut() {
                form.focus_prev();
            }
            (state, vec![])
        }

        Msg::FormInput(c) => {
            if let Some(form) = state.ui.form.as_mut() {
                form.push_char(c);
            }
            (state, vec![])
        }

        Msg::FormBackspace => {
            if let Some(form) = state.ui.form.as_mut() {
                form.backspace();
            }
            (state, vec![])
        }

        // Validation failures keep the form open with an inline error;
        // the form also stays open until the create settles
        Msg::SubmitForm => {
            let Some(form) = state.ui.form.as_mut() else {
                return (state, vec![]);
            };
            match form.validate() {
                Ok(request) => {
                    let panel = form.panel;
                    (state, vec![Cmd::Create { panel, request }])
                }
                Err(message) => {
                    form.error = Some(message);
                    (state, vec![])
                }
            }
        }

        // Row mutations
        Msg::ToggleAvailability => {
            let commands = match state.panels.menu.selected_row() {
                Some(row) => vec![Cmd::Patch {
                    panel: PanelKind::Menu,
                    request: PatchRequest::MenuAvailability {
                        id: row.id,
                        is_available: !row.is_available,
                    },
                }],
                None => vec![],
            };
            (state, commands)
        }

        Msg::IncrementValue => {
            let commands = step_value(&state, 1);
            (state, commands)
        }

        Msg::DecrementValue => {
            let commands = step_value(&state, -1);
            (state, commands)
        }

        Msg::SetTableStatus(status) => {
            let commands = match state.panels.tables.selected_row() {
                // Setting the status a row already has is a no-op
                Some(row) if row.status != status => vec![Cmd::Patch {
                    panel: PanelKind::Tables,
                    request: PatchRequest::TableStatus { id: row.id, status },
                }],
                _ => vec![],
            };
            (state, commands)
        }

        Msg::SetWaiterStatus(status) => {
            let commands = match state.panels.waiters.selected_row() {
                Some(row) if row.status != status => vec![Cmd::Patch {
                    panel: PanelKind::Waiters,
                    request: PatchRequest::WaiterStatus { id: row.id, status },
                }],
                _ => vec![],
            };
            (state, commands)
        }

        // AI Insights panel
        Msg::NextSection => {
            state.panels.insights.section = state.panels.insights.section.next();
            (state, vec![])
        }

        Msg::PrevSection => {
            state.panels.insights.section = state.panels.insights.section.prev();
            (state, vec![])
        }

        Msg::StartInsightInput => {
            if state.panels.insights.section.input_label().is_some() {
                state.ui.mode = Mode::InsightInput;
            }
            (state, vec![])
        }

        Msg::CancelInsightInput => {
            state.ui.mode = Mode::Normal;
            (state, vec![])
        }

        Msg::InsightInput(c) => {
            let section = state.panels.insights.section;
            if let Some(buffer) = state.panels.insights.input_for_mut(section) {
                buffer.push(c);
            }
            (state, vec![])
        }

        Msg::InsightBackspace => {
            let section = state.panels.insights.section;
            if let Some(buffer) = state.panels.insights.input_for_mut(section) {
                buffer.pop();
            }
            (state, vec![])
        }

        Msg::RunInsight => run_insight(state),

        // Network settlements; stale generation tokens are discarded
        Msg::ListLoaded {
            panel,
            token,
            payload,
        } => {
            if payload.panel() != panel {
                let message = format!(
                    "Payload for {} delivered to {panel} panel",
                    payload.panel()
                );
                return (state, vec![Cmd::LogError { message }]);
            }
            match payload {
                ListPayload::Items(rows) => state.panels.items.accept(token, rows),
                ListPayload::Menu(rows) => state.panels.menu.accept(token, rows),
                ListPayload::Stock(rows) => state.panels.stock.accept(token, rows),
                ListPayload::Tables(rows) => state.panels.tables.accept(token, rows),
                ListPayload::Waiters(rows) => state.panels.waiters.accept(token, rows),
                ListPayload::Taxes(rows) => state.panels.taxes.accept(token, rows),
                ListPayload::Products(rows) => state.panels.inventory.accept(token, rows),
            };
            (state, vec![])
        }

        Msg::ListFailed {
            panel,
            token,
            message,
        } => {
            let settled = state
                .panels
                .fail_fetch(panel, token, panel.load_error_message());
            let commands = if settled {
                vec![Cmd::LogError {
                    message: format!("{panel} fetch failed: {message}"),
                }]
            } else {
                vec![]
            };
            (state, commands)
        }

        Msg::InsightLoaded {
            section,
            token,
            payload,
        } => {
            let insights = &mut state.panels.insights;
            match (section, payload) {
                (InsightSection::SalesTrends, InsightPayload::Trends(data)) => {
                    insights.trends.settle(token, Ok(data));
                }
                (InsightSection::Recommendations, InsightPayload::Recommendations(data)) => {
                    insights.recommendations.settle(token, Ok(data));
                }
                (InsightSection::Inventory, InsightPayload::Inventory(data)) => {
                    insights.advice.settle(token, Ok(data));
                }
                (InsightSection::Performance, InsightPayload::Performance(data)) => {
                    insights.review.settle(token, Ok(data));
                }
                (section, _) => {
                    let message = format!("Mismatched insight payload for {section}");
                    return (state, vec![Cmd::LogError { message }]);
                }
            }
            (state, vec![])
        }

        Msg::InsightFailed {
            section,
            token,
            message,
        } => {
            let friendly = "Failed to load insights. Please try again later.".to_string();
            let insights = &mut state.panels.insights;
            let settled = match section {
                InsightSection::SalesTrends => insights.trends.settle(token, Err(friendly)),
                InsightSection::Recommendations => {
                    insights.recommendations.settle(token, Err(friendly))
                }
                InsightSection::Inventory => insights.advice.settle(token, Err(friendly)),
                InsightSection::Performance => insights.review.settle(token, Err(friendly)),
            };
            let commands = if settled {
                vec![Cmd::LogError {
                    message: format!("{section} fetch failed: {message}"),
                }]
            } else {
                vec![]
            };
            (state, commands)
        }

        // A settled mutation refetches the panel's list once; only a
        // settled create touches the open form
        Msg::MutationDone { panel, kind, note } => {
            if kind == MutationKind::Create
                && state.ui.form.as_ref().map(|f| f.panel) == Some(panel)
            {
                state.ui.close_form();
            }
            state.panels.clear_mutation_error(panel);
            state.system.set_message(note);
            let commands = start_fetch(&mut state, panel);
            (state, commands)
        }

        Msg::MutationFailed {
            panel,
            kind,
            message,
        } => {
            let log = Cmd::LogError {
                message: format!("{panel} mutation failed: {message}"),
            };
            match state.ui.form.as_mut() {
                // A failed create keeps the form open with the error inline;
                // a failed patch is the row's problem, not the form's
                Some(form) if kind == MutationKind::Create && form.panel == panel => {
                    form.error = Some(message);
                }
                _ => state.panels.set_mutation_error(panel, message),
            }
            (state, vec![log])
        }
    }
}

/// Switch the active panel, fetching its list on first focus.
fn focus_panel(mut state: AppState, panel: PanelKind) -> (AppState, Vec<Cmd>) {
    state.ui.active_panel = panel;
    let mut commands = vec![];
    if panel.is_list_panel() && !state.panels.visited(panel) {
        state.panels.mark_visited(panel);
        commands = start_fetch(&mut state, panel);
    }
    (state, commands)
}

/// Begin a list fetch and emit its command.
fn start_fetch(state: &mut AppState, panel: PanelKind) -> Vec<Cmd> {
    match state.panels.begin_fetch(panel) {
        Some(token) => vec![Cmd::FetchList { panel, token }],
        None => vec![],
    }
}

/// Increment or decrement the numeric field the active panel edits.
/// Decrements clamp at zero; a step that would not change the stored
/// value issues no request.
fn step_value(state: &AppState, direction: i32) -> Vec<Cmd> {
    let request = match state.ui.active_panel {
        PanelKind::Items => state.panels.items.selected_row().and_then(|row| {
            let price = (row.price + f64::from(direction)).max(0.0);
            (price != row.price).then_some(PatchRequest::ItemPrice { id: row.id, price })
        }),
        PanelKind::Stock => state.panels.stock.selected_row().and_then(|row| {
            let quantity = if direction > 0 {
                row.quantity.saturating_add(1)
            } else {
                row.quantity.saturating_sub(1)
            };
            (quantity != row.quantity)
                .then_some(PatchRequest::StockQuantity { id: row.id, quantity })
        }),
        PanelKind::Taxes => state.panels.taxes.selected_row().and_then(|row| {
            let rate = (row.rate + 0.1 * f64::from(direction)).max(0.0);
            (rate != row.rate).then_some(PatchRequest::TaxRateValue { id: row.id, rate })
        }),
        _ => None,
    };

    match request {
        Some(request) => vec![Cmd::Patch {
            panel: state.ui.active_panel,
            request,
        }],
        None => vec![],
    }
}

/// Fire the active insight section's request, if its argument is ready.
fn run_insight(mut state: AppState) -> (AppState, Vec<Cmd>) {
    let section = state.panels.insights.section;

    let arg = match state.panels.insights.input_for(section) {
        Some(value) if value.trim().is_empty() => {
            let label = section.input_label().unwrap_or("id");
            state.system.set_message(format!("Enter {label} first"));
            return (state, vec![]);
        }
        Some(value) => Some(value.trim().to_string()),
        None => None,
    };

    let insights = &mut state.panels.insights;
    let token = match section {
        InsightSection::SalesTrends => insights.trends.begin(),
        InsightSection::Recommendations => insights.recommendations.begin(),
        InsightSection::Inventory => insights.advice.begin(),
        InsightSection::Performance => insights.review.begin(),
    };
    state.ui.mode = Mode::Normal;

    (
        state,
        vec![Cmd::FetchInsight {
            section,
            arg,
            token,
        }],
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::state::Phase;
    use crate::domain::entities::{
        DiningTable, Item, MenuItem, SalesTrends, StockItem, TableStatus, TaxRate, Waiter,
        WaiterStatus,
    };
    use crate::domain::requests::CreateRequest;

    fn waiter(id: u64, name: &str, status: WaiterStatus) -> Waiter {
        Waiter {
            id,
            name: name.to_string(),
            status,
        }
    }

    fn table(id: u64, number: u32, status: TableStatus) -> DiningTable {
        DiningTable {
            id,
            number,
            capacity: 4,
            status,
        }
    }

    /// Load rows into a panel via the real message flow and return the state.
    fn loaded(mut state: AppState, payload: ListPayload) -> AppState {
        let panel = payload.panel();
        let token = state.panels.begin_fetch(panel).unwrap();
        let (state, commands) = update(
            Msg::ListLoaded {
                panel,
                token,
                payload,
            },
            state,
        );
        assert_eq!(commands, vec![]);
        state
    }

    #[test]
    fn test_quit_sets_flag() {
        let (state, commands) = update(Msg::Quit, AppState::default());
        assert!(state.system.should_quit);
        assert_eq!(commands, vec![]);
    }

    #[test]
    fn test_first_focus_fetches_once() {
        let state = AppState::default();
        let (state, commands) = update(Msg::SelectPanel(PanelKind::Waiters), state);
        assert_eq!(
            commands,
            vec![Cmd::FetchList {
                panel: PanelKind::Waiters,
                token: 1
            }]
        );
        assert!(state.panels.waiters.resource.is_loading());

        // Returning to the panel does not refetch
        let (state, _) = update(Msg::SelectPanel(PanelKind::Menu), state);
        let (_, commands) = update(Msg::SelectPanel(PanelKind::Waiters), state);
        assert_eq!(commands, vec![]);
    }

    #[test]
    fn test_refresh_always_fetches() {
        let state = AppState::default();
        let (state, _) = update(Msg::SelectPanel(PanelKind::Stock), state);
        let (_, commands) = update(Msg::Refresh, state);
        assert_eq!(
            commands,
            vec![Cmd::FetchList {
                panel: PanelKind::Stock,
                token: 2
            }]
        );
    }

    #[test]
    fn test_stale_list_settlement_is_discarded() {
        let mut state = AppState::default();
        let stale = state.panels.begin_fetch(PanelKind::Waiters).unwrap();
        let fresh = state.panels.begin_fetch(PanelKind::Waiters).unwrap();

        let (state, _) = update(
            Msg::ListLoaded {
                panel: PanelKind::Waiters,
                token: fresh,
                payload: ListPayload::Waiters(vec![waiter(1, "Sam", WaiterStatus::Available)]),
            },
            state,
        );
        let (state, _) = update(
            Msg::ListLoaded {
                panel: PanelKind::Waiters,
                token: stale,
                payload: ListPayload::Waiters(vec![]),
            },
            state,
        );

        assert_eq!(state.panels.waiters.len(), 1);
        assert_eq!(state.panels.waiters.resource.phase(), &Phase::Success);
    }

    #[test]
    fn test_failed_fetch_keeps_stale_rows_and_reports() {
        let state = loaded(
            AppState::default(),
            ListPayload::Waiters(vec![waiter(1, "Sam", WaiterStatus::Available)]),
        );

        let mut state = state;
        let token = state.panels.begin_fetch(PanelKind::Waiters).unwrap();
        let (state, commands) = update(
            Msg::ListFailed {
                panel: PanelKind::Waiters,
                token,
                message: "connection refused".to_string(),
            },
            state,
        );

        assert_eq!(state.panels.waiters.len(), 1);
        assert_eq!(
            state.panels.waiters.alert(),
            Some("Failed to load waiters. Please try again later.")
        );
        assert!(matches!(commands[..], [Cmd::LogError { .. }]));
    }

    #[test]
    fn test_toggle_availability_flips_selected_row_only() {
        let state = loaded(
            AppState::default(),
            ListPayload::Menu(vec![
                MenuItem {
                    id: 10,
                    name: "Espresso".to_string(),
                    description: String::new(),
                    price: 2.5,
                    category: "drinks".to_string(),
                    is_available: true,
                },
                MenuItem {
                    id: 11,
                    name: "Latte".to_string(),
                    description: String::new(),
                    price: 3.5,
                    category: "drinks".to_string(),
                    is_available: false,
                },
            ]),
        );
        let mut state = state;
        state.ui.active_panel = PanelKind::Menu;
        let (state, _) = update(Msg::ScrollDown, state);

        let (_, commands) = update(Msg::ToggleAvailability, state);
        assert_eq!(
            commands,
            vec![Cmd::Patch {
                panel: PanelKind::Menu,
                request: PatchRequest::MenuAvailability {
                    id: 11,
                    is_available: true
                }
            }]
        );
    }

    #[test]
    fn test_stock_decrement_clamps_at_zero() {
        let mut state = loaded(
            AppState::default(),
            ListPayload::Stock(vec![StockItem {
                id: 5,
                name: "Flour".to_string(),
                quantity: 0,
                unit: "kg".to_string(),
                reorder_point: 2,
            }]),
        );
        state.ui.active_panel = PanelKind::Stock;

        let (state, commands) = update(Msg::DecrementValue, state);
        assert_eq!(commands, vec![]);

        let (_, commands) = update(Msg::IncrementValue, state);
        assert_eq!(
            commands,
            vec![Cmd::Patch {
                panel: PanelKind::Stock,
                request: PatchRequest::StockQuantity { id: 5, quantity: 1 }
            }]
        );
    }

    #[test]
    fn test_item_price_steps_by_one() {
        let mut state = loaded(
            AppState::default(),
            ListPayload::Items(vec![Item {
                id: 2,
                name: "Burger".to_string(),
                description: String::new(),
                price: 0.5,
                category: "mains".to_string(),
            }]),
        );
        state.ui.active_panel = PanelKind::Items;

        // 0.5 - 1.0 clamps to 0, which still changes the stored value
        let (_, commands) = update(Msg::DecrementValue, state);
        assert_eq!(
            commands,
            vec![Cmd::Patch {
                panel: PanelKind::Items,
                request: PatchRequest::ItemPrice { id: 2, price: 0.0 }
            }]
        );
    }

    #[test]
    fn test_tax_rate_steps_by_tenth() {
        let mut state = loaded(
            AppState::default(),
            ListPayload::Taxes(vec![TaxRate {
                id: 1,
                name: "VAT".to_string(),
                rate: 5.0,
            }]),
        );
        state.ui.active_panel = PanelKind::Taxes;

        let (_, commands) = update(Msg::IncrementValue, state);
        assert_eq!(
            commands,
            vec![Cmd::Patch {
                panel: PanelKind::Taxes,
                request: PatchRequest::TaxRateValue { id: 1, rate: 5.1 }
            }]
        );
    }

    #[test]
    fn test_setting_current_status_is_a_noop() {
        let mut state = loaded(
            AppState::default(),
            ListPayload::Tables(vec![table(3, 3, TableStatus::Occupied)]),
        );
        state.ui.active_panel = PanelKind::Tables;

        let (state, commands) = update(Msg::SetTableStatus(TableStatus::Occupied), state);
        assert_eq!(commands, vec![]);

        let (_, commands) = update(Msg::SetTableStatus(TableStatus::Available), state);
        assert_eq!(
            commands,
            vec![Cmd::Patch {
                panel: PanelKind::Tables,
                request: PatchRequest::TableStatus {
                    id: 3,
                    status: TableStatus::Available
                }
            }]
        );
    }

    #[test]
    fn test_submit_invalid_form_keeps_it_open() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Waiters;
        let (state, _) = update(Msg::OpenForm, state);
        assert_eq!(state.ui.mode, Mode::Form);

        let (state, commands) = update(Msg::SubmitForm, state);
        assert_eq!(commands, vec![]);
        let form = state.ui.form.as_ref().unwrap();
        assert_eq!(form.error.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_create_flow_closes_form_and_refetches_once() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Waiters;
        state.panels.mark_visited(PanelKind::Waiters);

        let (state, _) = update(Msg::OpenForm, state);
        let mut state = state;
        for c in "Sam".chars() {
            let (next, _) = update(Msg::FormInput(c), state);
            state = next;
        }

        let (state, commands) = update(Msg::SubmitForm, state);
        assert_eq!(
            commands,
            vec![Cmd::Create {
                panel: PanelKind::Waiters,
                request: CreateRequest::Waiter {
                    name: "Sam".to_string()
                }
            }]
        );
        // Form stays open until the create settles
        assert!(state.ui.form.is_some());

        let (state, commands) = update(
            Msg::MutationDone {
                panel: PanelKind::Waiters,
                kind: MutationKind::Create,
                note: "[Added waiter] Sam".to_string(),
            },
            state,
        );
        assert!(state.ui.form.is_none());
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("[Added waiter] Sam")
        );
        assert_eq!(
            commands,
            vec![Cmd::FetchList {
                panel: PanelKind::Waiters,
                token: 1
            }]
        );
    }

    #[test]
    fn test_failed_create_keeps_form_open_with_error() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Waiters;
        let (state, _) = update(Msg::OpenForm, state);

        let (state, commands) = update(
            Msg::MutationFailed {
                panel: PanelKind::Waiters,
                kind: MutationKind::Create,
                message: "Failed to add waiter. Please try again.".to_string(),
            },
            state,
        );

        let form = state.ui.form.as_ref().unwrap();
        assert_eq!(
            form.error.as_deref(),
            Some("Failed to add waiter. Please try again.")
        );
        assert!(matches!(commands[..], [Cmd::LogError { .. }]));
    }

    #[test]
    fn test_failed_patch_sets_panel_alert() {
        let state = loaded(
            AppState::default(),
            ListPayload::Tables(vec![table(1, 1, TableStatus::Available)]),
        );

        let (state, _) = update(
            Msg::MutationFailed {
                panel: PanelKind::Tables,
                kind: MutationKind::Patch,
                message: "Failed to update table status. Please try again.".to_string(),
            },
            state,
        );
        assert_eq!(
            state.panels.tables.alert(),
            Some("Failed to update table status. Please try again.")
        );
    }

    #[test]
    fn test_failed_patch_skips_the_open_form() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Stock;
        let (state, _) = update(Msg::OpenForm, state);

        // A row patch fails while the create form is open on the same panel
        let (state, _) = update(
            Msg::MutationFailed {
                panel: PanelKind::Stock,
                kind: MutationKind::Patch,
                message: "Failed to update stock quantity. Please try again.".to_string(),
            },
            state,
        );

        let form = state.ui.form.as_ref().unwrap();
        assert_eq!(form.error, None);
        assert_eq!(
            state.panels.stock.alert(),
            Some("Failed to update stock quantity. Please try again.")
        );
    }

    #[test]
    fn test_settled_patch_leaves_the_open_form_alone() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Stock;
        let (state, _) = update(Msg::OpenForm, state);

        let (state, _) = update(
            Msg::MutationDone {
                panel: PanelKind::Stock,
                kind: MutationKind::Patch,
                note: "[Quantity set] 4".to_string(),
            },
            state,
        );

        assert!(state.ui.form.is_some());
        assert_eq!(state.system.status_message.as_deref(), Some("[Quantity set] 4"));
    }

    #[test]
    fn test_run_insight_without_required_id_prompts() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Insights;
        state.panels.insights.section = InsightSection::Inventory;

        let (state, commands) = update(Msg::RunInsight, state);
        assert_eq!(commands, vec![]);
        assert_eq!(
            state.system.status_message.as_deref(),
            Some("Enter Product ID first")
        );
    }

    #[test]
    fn test_run_insight_sends_trimmed_id() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Insights;
        state.panels.insights.section = InsightSection::Performance;
        state.panels.insights.employee_id = " 12 ".to_string();

        let (state, commands) = update(Msg::RunInsight, state);
        assert_eq!(
            commands,
            vec![Cmd::FetchInsight {
                section: InsightSection::Performance,
                arg: Some("12".to_string()),
                token: 1
            }]
        );
        assert!(state.panels.insights.review.is_loading());
    }

    #[test]
    fn test_sales_trends_needs_no_argument() {
        let mut state = AppState::default();
        state.ui.active_panel = PanelKind::Insights;

        let (state, commands) = update(Msg::RunInsight, state);
        assert_eq!(
            commands,
            vec![Cmd::FetchInsight {
                section: InsightSection::SalesTrends,
                arg: None,
                token: 1
            }]
        );

        let (state, _) = update(
            Msg::InsightLoaded {
                section: InsightSection::SalesTrends,
                token: 1,
                payload: InsightPayload::Trends(SalesTrends {
                    insights: "Sales are up".to_string(),
                }),
            },
            state,
        );
        assert_eq!(
            state.panels.insights.trends.data().map(|t| t.insights.as_str()),
            Some("Sales are up")
        );
    }

    #[test]
    fn test_mismatched_payload_is_rejected() {
        let mut state = AppState::default();
        let token = state.panels.begin_fetch(PanelKind::Menu).unwrap();
        let (state, commands) = update(
            Msg::ListLoaded {
                panel: PanelKind::Menu,
                token,
                payload: ListPayload::Waiters(vec![]),
            },
            state,
        );
        assert!(matches!(commands[..], [Cmd::LogError { .. }]));
        assert!(state.panels.menu.resource.is_loading());
    }
}
