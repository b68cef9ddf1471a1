//! Database connection helpers.
//!
//! Wraps the Diesel r2d2 pool used by [`crate::repository::DieselRepository`]
//! and installs a statement logger on every pooled SQLite connection.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use diesel::connection::{Instrumentation, InstrumentationEvent, SimpleConnection};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sqlite::SqliteConnection;
use log::{debug, error};

use crate::models::config::AppConfig;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Counts and logs SQL statements executed on the connections it is attached to.
///
/// Clones share the same counter, so one handle kept by the caller observes
/// every connection in the pool.
#[derive(Debug, Clone, Default)]
pub struct QueryLog {
    executed: Arc<AtomicUsize>,
}

impl QueryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of statements started since this log was created.
    pub fn executed(&self) -> usize {
        self.executed.load(Ordering::Relaxed)
    }
}

impl Instrumentation for QueryLog {
    fn on_connection_event(&mut self, event: InstrumentationEvent<'_>) {
        if let InstrumentationEvent::StartQuery { query, .. } = event {
            self.executed.fetch_add(1, Ordering::Relaxed);
            debug!("sql: {query}");
        }
    }
}

#[derive(Debug)]
/// Options that are applied each time a connection is acquired from the pool.
pub struct ConnectionOptions {
    /// Enable Write Ahead Logging mode for SQLite.
    pub enable_wal: bool,
    /// Enforce foreign key checks for SQLite.
    pub enable_foreign_keys: bool,
    /// Timeout to wait for a locked database.
    pub busy_timeout: Option<Duration>,
    /// Statement logger attached after the pragmas have run. When set, the pool
    /// skips its checkout ping so the log only sees application statements.
    pub query_log: Option<QueryLog>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            enable_wal: true,
            enable_foreign_keys: true,
            busy_timeout: Some(Duration::from_secs(30)),
            query_log: None,
        }
    }
}

impl From<&AppConfig> for ConnectionOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            enable_wal: config.enable_wal,
            busy_timeout: Some(Duration::from_millis(config.busy_timeout_ms)),
            ..Self::default()
        }
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            if self.enable_wal {
                conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
            }
            if self.enable_foreign_keys {
                conn.batch_execute("PRAGMA foreign_keys = ON;")?;
            }
            if let Some(d) = self.busy_timeout {
                conn.batch_execute(&format!("PRAGMA busy_timeout = {};", d.as_millis()))?;
            }
            Ok(())
        })()
        .map_err(diesel::r2d2::Error::QueryError)?;

        if let Some(query_log) = &self.query_log {
            conn.set_instrumentation(query_log.clone());
        }
        Ok(())
    }
}

/// Create a Diesel connection pool for the given database URL with default options.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    establish_connection_pool_with(database_url, ConnectionOptions::default())
}

/// Create a Diesel connection pool applying `options` to every new connection.
pub fn establish_connection_pool_with(
    database_url: &str,
    options: ConnectionOptions,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    // The checkout ping would show up in the query log.
    let test_on_check_out = options.query_log.is_none();
    Pool::builder()
        .test_on_check_out(test_on_check_out)
        .connection_customizer(Box::new(options))
        .build(manager)
}

/// Retrieve a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    match pool.get() {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to get connection from pool: {e}");
            Err(e)
        }
    }
}
