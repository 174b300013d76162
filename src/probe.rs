//! One-shot connectivity probe
//!
//! Prints the banner, decides from a [`ConnectionConfig`] whether a connection
//! should be attempted, and makes at most one attempt through a [`Connector`].
//! Connection failures are reported on the error stream and returned as
//! [`Outcome::Failed`]; they never abort the run.

use crate::config::{ConnectionConfig, Target};
use std::{
    error, fmt,
    io::{self, Write},
};

pub const BANNER: &str = "Hello, Docker! This is a simple Rust application.";
pub const CONNECTING: &str = "Connecting to database...";
pub const CONNECTED: &str = "Connection to PostgreSQL successful!";
pub const SKIPPED: &str = "Database environment variables not set, skipping database connection.";
pub const FAILED: &str = "Failed to connect to PostgreSQL";

/// Any failure while establishing or releasing the connection
#[derive(Debug)]
pub struct ConnectionError(sqlx::Error);

impl ConnectionError {
    #[must_use]
    pub const fn inner(&self) -> &sqlx::Error {
        &self.0
    }
}

impl fmt::Display for ConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl error::Error for ConnectionError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<sqlx::Error> for ConnectionError {
    fn from(err: sqlx::Error) -> Self {
        Self(err)
    }
}

/// Opens and releases database connections
pub trait Connector {
    type Connection: Send;

    /// Make exactly one connection attempt to `target`
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectionError`] if the connection cannot be established
    fn connect(
        &self,
        target: &Target,
    ) -> impl Future<Output = Result<Self::Connection, ConnectionError>> + Send;

    /// Release a connection obtained from [`Connector::connect`]
    ///
    /// # Errors
    ///
    /// Returns a [`ConnectionError`] if the connection does not shut down cleanly
    fn close(
        &self,
        conn: Self::Connection,
    ) -> impl Future<Output = Result<(), ConnectionError>> + Send;
}

/// How a probe run ended
#[derive(Debug)]
pub enum Outcome {
    /// At least one variable was missing, nothing was attempted
    Skipped,
    Connected {
        address: String,
    },
    Failed {
        address: String,
        error: ConnectionError,
    },
}

impl Outcome {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Skipped => "skipped",
            Self::Connected { .. } => "connected",
            Self::Failed { .. } => "failed",
        }
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    #[must_use]
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Skipped => None,
            Self::Connected { address } | Self::Failed { address, .. } => Some(address),
        }
    }

    /// Process exit status for this outcome, failures only count when `strict`
    #[must_use]
    pub fn exit_status(&self, strict: bool) -> u8 {
        u8::from(strict && self.is_failure())
    }
}

/// Run the probe once
///
/// Informational lines go to `out`, the failure line goes to `err`. A success
/// line is printed as soon as the connection is up; the connection is then
/// closed right away and a failure to close is reported like a failure to
/// connect.
///
/// # Errors
///
/// Returns an error only if writing to `out` or `err` fails
pub async fn run<C, O, E>(
    config: &ConnectionConfig,
    connector: &C,
    out: &mut O,
    err: &mut E,
) -> io::Result<Outcome>
where
    C: Connector,
    O: Write,
    E: Write,
{
    writeln!(out, "{BANNER}")?;

    let Some(target) = config.target() else {
        writeln!(out, "{SKIPPED}")?;
        out.flush()?;
        return Ok(Outcome::Skipped);
    };

    let address = target.address();

    writeln!(out, "{CONNECTING}")?;
    out.flush()?;

    let result = match connector.connect(&target).await {
        Ok(conn) => {
            writeln!(out, "{CONNECTED}")?;
            out.flush()?;
            connector.close(conn).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => Ok(Outcome::Connected { address }),
        Err(error) => {
            writeln!(err, "{FAILED}: {error}")?;
            err.flush()?;
            Ok(Outcome::Failed { address, error })
        }
    }
}
