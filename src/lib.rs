//! # Postui - POS Admin Dashboard TUI
//!
//! A terminal dashboard for a point-of-sale backend, built with Rust and
//! Ratatui. This library implements an Elm-like architecture for
//! predictable state management.
//!
//! ## Architecture Overview
//!
//! This crate is organized around the Elm architecture pattern:
//!
//! - **Model** (`core::state`): Immutable application state
//! - **Message** (`core::msg`): Events that can change the state
//! - **Update** (`core::update`): Pure functions that transform state
//! - **Command** (`core::cmd`): Side effects (HTTP requests, logging)
//! - **View** (`presentation`): UI rendering based on current state
//!
//! ## Example Usage
//!
//! ```rust
//! use postui::core::{msg::Msg, state::AppState, update::update};
//!
//! // Initialize state
//! let initial_state = AppState::default();
//!
//! // Process messages
//! let (new_state, commands) = update(Msg::Quit, initial_state);
//!
//! // State is now updated and commands contain side effects to execute
//! assert!(new_state.system.should_quit);
//! assert!(commands.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, the update function and commands
//! - [`domain`] - Panel entities, request payloads and text helpers
//! - [`infrastructure`] - Terminal, configuration and the REST client
//! - [`integration`] - The runtime and the application runner
//! - [`presentation`] - UI components

#![deny(warnings)]
#![allow(dead_code)]

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::cmd::Cmd;
pub use crate::core::msg::Msg;
pub use crate::core::raw_msg::RawMsg;
pub use crate::core::state::AppState;
pub use crate::core::translator::translate_raw_to_domain;
pub use crate::core::update::update;
pub use crate::integration::{AppRunner, Runtime};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
