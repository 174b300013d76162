use super::Action;
use crate::{config::ConnectionConfig, postgres::Postgres, probe, report::Report};
use anyhow::Context;
use chrono::Utc;
use std::{io, process::ExitCode};

/// Execute the action's business logic by delegating to the appropriate module
pub async fn execute(action: Action) -> anyhow::Result<ExitCode> {
    match action {
        Action::Probe { json, strict } => {
            let started = Utc::now();
            let config = ConnectionConfig::from_env();

            let outcome = probe::run(
                &config,
                &Postgres,
                &mut io::stdout(),
                &mut io::stderr(),
            )
            .await
            .context("Failed to write probe output")?;

            if json {
                let report = Report::new(&outcome, started, Utc::now());
                let serialized =
                    serde_json::to_string(&report).context("Failed to serialize report")?;
                println!("{serialized}");
            }

            Ok(ExitCode::from(outcome.exit_status(strict)))
        }
    }
}
