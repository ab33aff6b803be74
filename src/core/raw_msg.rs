use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

use crate::{
    core::state::{InsightSection, PanelKind},
    domain::entities::{InsightPayload, ListPayload},
    domain::requests::MutationKind,
};

/// Raw messages from external sources (input, network, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Network settlements, tagged with the request's generation token
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

    // System status
    SystemMessage(String),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}
