use jira_timesheet::commands::Cli;
use jira_timesheet::libs::messages::macros::is_debug_mode;
use jira_timesheet::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Load .env before anything reads the environment
    let _ = dotenv::dotenv();

    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            msg_error!(err);
            ExitCode::FAILURE
        }
    }
}
