use crate::{
    config::Target,
    probe::{ConnectionError, Connector},
};
use sqlx::{
    ConnectOptions, Connection,
    postgres::{PgConnectOptions, PgConnection},
};

/// Connection options for `target`, everything not set here is left to the
/// `sqlx` defaults (including the connect timeout)
#[must_use]
pub fn connect_options(target: &Target) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&target.host)
        .port(target.port_or_default())
        .database(&target.database)
        .username(&target.user)
        .password(&target.password)
}

/// [`Connector`] backed by a single `PgConnection`
#[derive(Debug, Default, Clone, Copy)]
pub struct Postgres;

impl Connector for Postgres {
    type Connection = PgConnection;

    async fn connect(&self, target: &Target) -> Result<PgConnection, ConnectionError> {
        let options = connect_options(target);
        options.connect().await.map_err(ConnectionError::from)
    }

    async fn close(&self, conn: PgConnection) -> Result<(), ConnectionError> {
        conn.close().await.map_err(ConnectionError::from)
    }
}
