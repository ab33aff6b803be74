//! File-based tracing setup
//!
//! The terminal is owned by the dashboard, so log output goes to a file
//! under the data directory instead of stdout.

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Directives used when neither `RUST_LOG` nor the app-specific variable
/// is set. The HTTP stack is noisy at info level, so it is capped at warn.
fn default_directives() -> String {
    format!(
        "{}=info,reqwest=warn,hyper=warn,hyper_util=warn,rustls=warn",
        env!("CARGO_CRATE_NAME")
    )
}

fn env_filter() -> Result<EnvFilter> {
    let directives = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV.clone()))
        .unwrap_or_else(|_| default_directives());
    Ok(EnvFilter::try_new(directives)?)
}

pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE.clone()))?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(log_file)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter()?);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_cap_http_noise() {
        let directives = default_directives();
        assert!(directives.contains("=info"));
        assert!(directives.contains("reqwest=warn"));
    }

    #[test]
    fn test_default_directives_parse_as_a_filter() {
        assert!(EnvFilter::try_new(default_directives()).is_ok());
    }
}
