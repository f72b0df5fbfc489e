use std::time::Duration;

use suggest_domain::SuggestError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a stable name such as `"query"`; query text is never logged.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&SuggestError>) {
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) => warn!(
            command,
            duration_ms,
            error_type = err.label(),
            error = %err,
            "command_execution_failure"
        ),
    }
}
