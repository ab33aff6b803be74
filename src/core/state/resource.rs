//! Typed remote resource lifecycle
//!
//! One `Resource<T>` tracks one network-backed value through
//! idle/loading/success/failure. Exactly one phase is active at a time.
//! The last good payload is retained across reloads and failures, so a
//! failed refresh never clears rows that were already on screen.
//!
//! Overlapping fetches resolve last-write-wins: `begin` hands out a fresh
//! generation token and `settle` ignores any token that is no longer
//! current.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a remote resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Failure(String),
    Success,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource<T> {
    phase: Phase,
    data: Option<T>,
    generation: u64,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            generation: 0,
        }
    }
}

impl<T> Resource<T> {
    /// Start a fetch: transition to Loading and return the token the
    /// settlement must present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.phase = Phase::Loading;
        self.generation
    }

    /// Settle a fetch. Returns false (and changes nothing) when `token`
    /// belongs to a superseded fetch.
    pub fn settle(&mut self, token: u64, outcome: Result<T, String>) -> bool {
        if token != self.generation {
            return false;
        }
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.phase = Phase::Success;
            }
            Err(message) => {
                self.phase = Phase::Failure(message);
            }
        }
        true
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Last good payload, if any fetch ever succeeded.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    /// Token of the most recently started fetch.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
