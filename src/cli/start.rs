use super::{commands, dispatch};
use anyhow::Result;
use std::process::ExitCode;

/// Main orchestrator
///
/// 1. Parse: Extract CLI arguments
/// 2. Dispatch: Convert `ArgMatches` into typed Action enum, bad input falls
///    back to the defaults
/// 3. Execute: Run the action's business logic
///
/// # Errors
///
/// Returns an error if any step in the flow fails
pub async fn start() -> Result<ExitCode> {
    let action = match dispatch::dispatch_or_default(commands::new().try_get_matches()) {
        Ok(action) => action,
        Err(e) => e.exit(),
    };

    action.execute().await
}
