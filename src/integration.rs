//! Integration layer: the runtime owning the update loop and the runner
//! wiring it to the terminal and the API service.

pub mod app_runner;
pub mod runtime;

pub use app_runner::AppRunner;
pub use runtime::Runtime;
