use serde::{Deserialize, Serialize};

use crate::{
    core::state::{InsightSection, PanelKind},
    domain::entities::{InsightPayload, ListPayload, TableStatus, WaiterStatus},
    domain::requests::MutationKind,
};

/// Domain messages representing application intent and business logic
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),
    UpdateStatusMessage(String),
    ClearStatusMessage,
    Error(String),

    // Panel navigation
    SelectPanel(PanelKind),
    NextPanel,
    PrevPanel,

    // List operations on the active panel
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    Refresh,

    // Create-form lifecycle
    OpenForm,
    CancelForm,
    SubmitForm,
    FormNextField,
    FormPrevField,
    FormInput(char),
    FormBackspace,

    // Row mutations on the active panel's selection
    ToggleAvailability,
    IncrementValue,
    DecrementValue,
    SetTableStatus(TableStatus),
    SetWaiterStatus(WaiterStatus),

    // AI Insights panel
    NextSection,
    PrevSection,
    StartInsightInput,
    CancelInsightInput,
    InsightInput(char),
    InsightBackspace,
    RunInsight,

    // Network settlements
    ListLoaded {
        panel: PanelKind,
        token: u64,
        payload: ListPayload,
    },
    ListFailed {
        panel: PanelKind,
        token: u64,
        message: String,
    },
    InsightLoaded {
        section: InsightSection,
        token: u64,
        payload: InsightPayload,
    },
    InsightFailed {
        section: InsightSection,
        token: u64,
        message: String,
    },
    MutationDone {
        panel: PanelKind,
        kind: MutationKind,
        note: String,
    },
    MutationFailed {
        panel: PanelKind,
        kind: MutationKind,
        message: String,
    },
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    /// Domain messages are generally not frequent (raw messages handle Tick/Render)
    pub fn is_frequent(&self) -> bool {
        false
    }
}
