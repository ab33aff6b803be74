//! Panic handling
//!
//! Restores the terminal before reporting, so a panic never leaves the
//! user's shell in raw mode.

use std::panic::{self, PanicHookInfo};
use std::process;

use color_eyre::config::{HookBuilder, PanicHook};
use color_eyre::eyre::Result;
use tracing::error;

use crate::infrastructure::tui::Tui;

pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;
    panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        report_panic(&panic_hook, panic_info);
        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

/// Leave raw mode and the alternate screen before anything is printed.
fn restore_terminal() {
    if let Ok(mut tui) = Tui::new() {
        if let Err(e) = tui.exit() {
            error!("Unable to exit Terminal: {e:?}");
        }
    }
}

fn report_panic(panic_hook: &PanicHook, panic_info: &PanicHookInfo<'_>) {
    let report = panic_hook.panic_report(panic_info).to_string();
    log::error!("Error: {}", strip_ansi_escapes::strip_str(&report));

    #[cfg(not(debug_assertions))]
    {
        use human_panic::{handle_dump, print_msg, Metadata};
        let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            .homepage(env!("CARGO_PKG_HOMEPAGE"));
        let file_path = handle_dump(&meta, panic_info);
        print_msg(file_path, &meta).expect("human-panic: printing error message to console failed");
        eprintln!("{report}");
    }

    #[cfg(debug_assertions)]
    better_panic::Settings::auto()
        .most_recent_first(false)
        .lineno_suffix(true)
        .verbosity(better_panic::Verbosity::Full)
        .create_panic_handler()(panic_info);
}
