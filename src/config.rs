use std::{env, ffi::OsString, fmt, net::Ipv6Addr};

pub const DB_HOST: &str = "DB_HOST";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";

/// `PostgreSQL` listens here unless `DB_HOST` says otherwise
pub const DEFAULT_PORT: u16 = 5432;

/// Database endpoint and credentials as found in the environment
///
/// Every field is optional; an empty value is still a value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub host: Option<String>,
    pub database: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl ConnectionConfig {
    /// Read `DB_HOST`, `DB_NAME`, `DB_USER` and `DB_PASSWORD` from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(env::var_os)
    }

    /// Build the config from any key lookup, values that are not valid
    /// UTF-8 are converted lossily rather than dropped
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&'static str) -> Option<OsString>,
    {
        let get = |key: &'static str| lookup(key).map(|v| v.to_string_lossy().into_owned());

        Self {
            host: get(DB_HOST),
            database: get(DB_NAME),
            user: get(DB_USER),
            password: get(DB_PASSWORD),
        }
    }

    /// Returns a [`Target`] only when all four fields are present
    #[must_use]
    pub fn target(&self) -> Option<Target> {
        let (Some(host), Some(database), Some(user), Some(password)) = (
            self.host.as_deref(),
            self.database.as_deref(),
            self.user.as_deref(),
            self.password.as_deref(),
        ) else {
            return None;
        };

        let (host, port) = split_host_port(host);

        Some(Target {
            host: host.to_string(),
            port,
            database: database.to_string(),
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    /// Names of the variables that are not set
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (DB_HOST, self.host.is_none()),
            (DB_NAME, self.database.is_none()),
            (DB_USER, self.user.is_none()),
            (DB_PASSWORD, self.password.is_none()),
        ]
        .into_iter()
        .filter_map(|(name, missing)| missing.then_some(name))
        .collect()
    }
}

// keep the password out of debug output
impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// A complete endpoint, ready to connect to
#[derive(Clone, PartialEq, Eq)]
pub struct Target {
    pub host: String,
    pub port: Option<u16>,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl Target {
    /// `postgresql://<host>/<database>`, credentials are never part of it
    #[must_use]
    pub fn address(&self) -> String {
        let host = if self.host.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]", self.host)
        } else {
            self.host.clone()
        };

        match self.port {
            Some(port) => format!("postgresql://{host}:{port}/{}", self.database),
            None => format!("postgresql://{host}/{}", self.database),
        }
    }

    #[must_use]
    pub fn port_or_default(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"***")
            .finish()
    }
}

/// Split `host`, `host:port` or `[v6]:port`
///
/// A bare IPv6 address (more than one colon, no brackets) is kept whole, and
/// anything after the last colon that is not a valid port stays part of the host.
fn split_host_port(raw: &str) -> (&str, Option<u16>) {
    if let Some(rest) = raw.strip_prefix('[') {
        if let Some((host, tail)) = rest.split_once(']') {
            let port = tail.strip_prefix(':').and_then(|p| p.parse::<u16>().ok());
            return (host, port);
        }
        return (raw, None);
    }

    match raw.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') => port
            .parse::<u16>()
            .map_or((raw, None), |port| (host, Some(port))),
        _ => (raw, None),
    }
}
