mod run;

use std::process::ExitCode;

/// Action enum representing each possible command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Probe { json: bool, strict: bool },
}

impl Default for Action {
    fn default() -> Self {
        Self::Probe {
            json: false,
            strict: false,
        }
    }
}

impl Action {
    /// Execute the action
    ///
    /// # Errors
    ///
    /// Returns an error if the probe output cannot be written
    pub async fn execute(self) -> anyhow::Result<ExitCode> {
        run::execute(self).await
    }
}
