use serde::{Deserialize, Serialize};

use crate::{
    core::state::{InsightSection, PanelKind},
    domain::requests::{CreateRequest, PatchRequest},
};

/// Elm-like command definitions
/// Represents side effects (network communication, logging, etc.)
/// Cmd captures application intent (what to do); the API service layer
/// captures execution details (how to do it). Keeping both layers separate
/// improves testability and keeps HTTP types out of the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    // Backend requests
    FetchList {
        panel: PanelKind,
        token: u64,
    },
    FetchInsight {
        section: InsightSection,
        arg: Option<String>,
        token: u64,
    },
    Create {
        panel: PanelKind,
        request: CreateRequest,
    },
    Patch {
        panel: PanelKind,
        request: PatchRequest,
    },

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        match commands.len() {
            0 => Cmd::None,
            1 => commands.into_iter().next().unwrap_or(Cmd::None),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command requires asynchronous processing
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchList { .. }
            | Cmd::FetchInsight { .. }
            | Cmd::Create { .. }
            | Cmd::Patch { .. } => true,

            Cmd::LogError { .. } | Cmd::LogInfo { .. } | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Get command priority (smaller numbers = higher priority)
    pub fn priority(&self) -> u8 {
        match self {
            // User-initiated mutations first
            Cmd::Create { .. } | Cmd::Patch { .. } => 1,

            // Fetches next
            Cmd::FetchList { .. } | Cmd::FetchInsight { .. } => 2,

            // Logging has lowest priority
            Cmd::LogError { .. } | Cmd::LogInfo { .. } => 4,

            // Batch takes highest priority of contained commands
            Cmd::Batch(cmds) => cmds.iter().map(|cmd| cmd.priority()).min().unwrap_or(255),

            Cmd::None => 255,
        }
    }

    /// Short name for logging and stats
    pub fn name(&self) -> &'static str {
        match self {
            Cmd::FetchList { .. } => "FetchList",
            Cmd::FetchInsight { .. } => "FetchInsight",
            Cmd::Create { .. } => "Create",
            Cmd::Patch { .. } => "Patch",
            Cmd::LogError { .. } => "LogError",
            Cmd::LogInfo { .. } => "LogInfo",
            Cmd::Batch(_) => "Batch",
            Cmd::None => "None",
        }
    }
}
