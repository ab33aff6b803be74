//! Infrastructure layer: terminal lifecycle, configuration and the
//! backend HTTP client/service.

pub mod api;
pub mod api_service;
pub mod config;
pub mod tui;

pub use api::{ApiError, RestClient};
pub use api_service::{ApiOperation, ApiService, NewApiService};
pub use config::Config;
pub use tui::{Event, Tui};
