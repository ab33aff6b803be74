//! Reusable UI widgets
//!
//! This module contains reusable widgets that can be used
//! across different components.

pub mod data_table;
pub mod overlay;

pub use data_table::{Column, TablePage};
pub use overlay::centered_rect;
