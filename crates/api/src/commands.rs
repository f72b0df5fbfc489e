//! Command handlers
//!
//! Handlers return the lines to print so they can be tested without a
//! terminal.

use std::collections::HashSet;
use std::time::Instant;

use suggest_domain::Result;

use crate::cli::Commands;
use crate::utils::logging::log_command_execution;
use crate::AppContext;

/// Printed when `query` finds nothing.
pub const NO_MATCHES: &str = "no matches";
/// Printed when `exact` finds nothing.
pub const NO_MATCH: &str = "no match";

/// Run `command` against the context's default source.
///
/// # Errors
/// Propagates `InvalidQuery`, `Fetch` and `Parse` failures from the service.
pub async fn execute(ctx: &AppContext, command: &Commands) -> Result<Vec<String>> {
    let started = Instant::now();
    let result = match command {
        Commands::Query { text, max, exclude } => {
            let exclude: HashSet<String> = exclude.iter().cloned().collect();
            ctx.suggestions
                .get_suggestions(text, *max, &exclude)
                .await
                .map(|found| found.unwrap_or_else(|| vec![NO_MATCHES.to_string()]))
        }
        Commands::Exact { text } => ctx
            .suggestions
            .get_exact_match(text)
            .await
            .map(|found| vec![found.unwrap_or_else(|| NO_MATCH.to_string())]),
    };

    log_command_execution(command.name(), started.elapsed(), result.as_ref().err());
    result
}
