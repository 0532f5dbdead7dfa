use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use color_eyre::{Result, eyre::Context};
use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection, DbErr};

/// Connections older than this are closed and replaced by the pool.
pub const MAX_CONNECTION_LIFETIME: Duration = Duration::from_secs(3 * 60);
pub const MAX_OPEN_CONNECTIONS: u32 = 10;
/// Idle connections are kept up to the open limit. They are retired by
/// [`MAX_CONNECTION_LIFETIME`] long before sqlx's idle timeout would reap them.
pub const MAX_IDLE_CONNECTIONS: u32 = MAX_OPEN_CONNECTIONS;

/// Retries after the first failed connect/ping at startup.
const STARTUP_RETRIES: usize = 3;

/// The process-wide connection pool, shared by every request handler.
pub struct Database {
    pub(crate) conn: DatabaseConnection,
}

/// Whether the error means the database could not be reached, as opposed to a
/// statement that ran and failed.
pub fn is_connection_error(err: &DbErr) -> bool {
    matches!(err, DbErr::Conn(_) | DbErr::ConnectionAcquire(_))
}

pub fn connect_options(url: &str) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.max_connections(MAX_OPEN_CONNECTIONS)
        .max_lifetime(MAX_CONNECTION_LIFETIME)
        .sqlx_logging(false);
    opt
}

impl Database {
    /// Open the pool and check that the database answers a ping.
    ///
    /// Unreachable databases are retried a few times with exponential backoff;
    /// any other failure is returned immediately.
    pub async fn connect(url: &str) -> Result<Self> {
        let opt = connect_options(url);

        let conn = (|| async {
            let conn = SeaDatabase::connect(opt.clone()).await?;
            conn.ping().await?;
            Ok::<_, DbErr>(conn)
        })
        .retry(ExponentialBuilder::default().with_max_times(STARTUP_RETRIES))
        .when(is_connection_error)
        .notify(|err, delay| {
            tracing::warn!("Database not reachable ({err}), retrying in {delay:?}");
        })
        .await
        .wrap_err("Failed to connect to the database")?;

        tracing::info!(
            backend = ?conn.get_database_backend(),
            max_open = MAX_OPEN_CONNECTIONS,
            max_idle = MAX_IDLE_CONNECTIONS,
            "Database connection pool ready"
        );
        Ok(Database { conn })
    }

    #[cfg(test)]
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        Database { conn }
    }

    /// Close every pooled connection. Handles still held elsewhere start failing.
    pub async fn close(&self) -> Result<()> {
        self.conn
            .clone()
            .close()
            .await
            .wrap_err("Failed to close the database connection pool")
    }
}
