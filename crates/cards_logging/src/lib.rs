#![deny(missing_docs)]
//! Shared logging utilities for the contributor cards workspace.
//!
//! This crate provides the `cards_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every macro logs
//! under [`LOG_TARGET`] so the widget's output can be filtered as a unit.

#[doc(hidden)]
pub use log;

/// Log target shared by every `cards_*` macro.
pub const LOG_TARGET: &str = "contributor_cards";

/// Environment variable read by [`initialize_for_tests`] to override the level.
pub const TEST_LEVEL_ENV: &str = "CARDS_TEST_LOG";

/// Logs a trace-level message under the widget log target.
#[macro_export]
macro_rules! cards_trace {
    ($($arg:tt)*) => {{
        $crate::log::trace!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the widget log target.
#[macro_export]
macro_rules! cards_debug {
    ($($arg:tt)*) => {{
        $crate::log::debug!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the widget log target.
#[macro_export]
macro_rules! cards_info {
    ($($arg:tt)*) => {{
        $crate::log::info!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the widget log target.
#[macro_export]
macro_rules! cards_warn {
    ($($arg:tt)*) => {{
        $crate::log::warn!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the widget log target.
#[macro_export]
macro_rules! cards_error {
    ($($arg:tt)*) => {{
        $crate::log::error!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Initializes a simple terminal logger for use in tests.
///
/// The level defaults to debug in debug builds and info in release builds;
/// setting [`TEST_LEVEL_ENV`] (e.g. `CARDS_TEST_LOG=trace`) overrides it.
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let _ = CombinedLogger::init(vec![TermLogger::new(
        test_level(),
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

fn test_level() -> log::LevelFilter {
    let fallback = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    std::env::var(TEST_LEVEL_ENV)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(fallback)
}
