use crate::probe::Outcome;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Machine-readable summary of one run, printed as a single JSON line
#[derive(Serialize, Deserialize, Debug, Default, PartialEq, Eq)]
pub struct Report {
    pub time: String,
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub runtime_ms: i64,
}

impl Report {
    #[must_use]
    pub fn new(outcome: &Outcome, started: DateTime<Utc>, finished: DateTime<Utc>) -> Self {
        Self {
            time: started.to_rfc3339_opts(SecondsFormat::Secs, true),
            outcome: outcome.label().to_string(),
            address: outcome.address().map(ToString::to_string),
            error: match outcome {
                Outcome::Failed { error, .. } => Some(error.to_string()),
                _ => None,
            },
            runtime_ms: finished.signed_duration_since(started).num_milliseconds(),
        }
    }
}
