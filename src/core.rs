//! Elm-like application core
//!
//! - `state`: immutable application state
//! - `msg` / `raw_msg`: domain messages and raw external events
//! - `translator`: pure raw-to-domain translation
//! - `update`: pure state transitions
//! - `cmd`: side-effect descriptions executed by the integration layer

pub mod cmd;
pub mod msg;
pub mod raw_msg;
pub mod state;
pub mod translator;
pub mod update;
