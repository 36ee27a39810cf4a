//! Output macros for application messages.
//!
//! Every macro takes a [`Message`](super::Message) (or anything `Display`) and
//! routes it according to the debug mode:
//!
//! - **Debug mode** (`JIRA_TIMESHEET_DEBUG` or `RUST_LOG` set): the text goes
//!   to `tracing` at the matching level, so it interleaves with the structured
//!   events emitted by the core
//! - **Normal mode**: plain `println!`/`eprintln!` with an emoji prefix
//!
//! ## Usage Examples
//!
//! ```rust
//! use jira_timesheet::{msg_info, msg_success};
//! use jira_timesheet::libs::messages::Message;
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::SkippedRecordsSummary(2));
//! ```
//!
//! ```rust
//! use jira_timesheet::msg_error_anyhow;
//! use jira_timesheet::libs::messages::Message;
//!
//! let error = msg_error_anyhow!(Message::InvalidDate("2024-02-30".to_string()));
//! assert!(error.to_string().contains("2024-02-30"));
//! ```

use std::sync::OnceLock;

/// Environment variable enabling debug output.
pub const DEBUG_ENV: &str = "JIRA_TIMESHEET_DEBUG";

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks once whether debug output was requested and caches the answer.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var(DEBUG_ENV).is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a general message.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
}

/// Prints an error message with a ❌ prefix to stderr.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Prints a warning with a ⚠️ prefix.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️ {}", $msg);
        } else {
            eprintln!("⚠️ {}", $msg);
        }
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️ {}", $msg);
        } else {
            println!("ℹ️ {}", $msg);
        }
    };
}

/// Emits a debug message; silent outside debug mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Builds an `anyhow::Error` from a message.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("{}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("{}", $msg)
    };
}
