//! PostgreSQL pooled connection source
//!
//! Wraps an r2d2 pool of `postgres` connections behind the
//! [`ConnectionSource`] port. Pools are created lazily: no connection is
//! opened until the first borrow. The pool name is sent to the server as
//! `application_name` so sessions can be traced back to their pool.

use crate::constants::{
    DB_CONNECTION_IDLE_TIMEOUT_SECS, DB_CONNECTION_MAX_LIFETIME_SECS, DB_CONNECTION_TIMEOUT_SECS,
    DB_HEALTH_CHECK_QUERY,
};
use crate::error_ext::ErrorContext;
use dbpool_domain::error::{Error, Result};
use dbpool_domain::ports::{ConnectionSource, SourceFactory};
use dbpool_domain::value_objects::ConnectionSettings;
use r2d2::Pool;
use r2d2_postgres::PostgresConnectionManager;
use r2d2_postgres::postgres::{Config, NoTls};
use serde::Serialize;
use std::sync::RwLock;
use std::time::Duration;
use tracing::{debug, info};

/// Connection manager used by every pool
pub type PgConnectionManager = PostgresConnectionManager<NoTls>;

/// Connection borrowed from a [`PgPoolSource`]
pub type PgPooledConnection = r2d2::PooledConnection<PgConnectionManager>;

/// Pool statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Total connections in the pool
    pub connections: u32,
    /// Idle connections in the pool
    pub idle_connections: u32,
    /// Maximum connections allowed
    pub max_connections: u32,
}

/// Named r2d2 pool for one pool mode
pub struct PgPoolSource {
    name: String,
    settings: ConnectionSettings,
    pool: RwLock<Option<Pool<PgConnectionManager>>>,
}

impl PgPoolSource {
    /// Create a lazily-connecting pool named `name`
    pub fn new(name: impl Into<String>, settings: ConnectionSettings) -> Result<Self> {
        let name = name.into();
        settings.check()?;

        let mut config = Config::new();
        config
            .host(&settings.server)
            .port(settings.port)
            .dbname(&settings.database)
            .user(&settings.username)
            .password(&settings.password)
            .application_name(&name)
            .connect_timeout(Duration::from_secs(DB_CONNECTION_TIMEOUT_SECS));

        let pool = Pool::builder()
            .max_size(settings.max_connections)
            .min_idle(Some(0))
            .max_lifetime(Some(Duration::from_secs(DB_CONNECTION_MAX_LIFETIME_SECS)))
            .idle_timeout(Some(Duration::from_secs(DB_CONNECTION_IDLE_TIMEOUT_SECS)))
            .connection_timeout(Duration::from_secs(DB_CONNECTION_TIMEOUT_SECS))
            .build_unchecked(PostgresConnectionManager::new(config, NoTls));

        info!(
            pool = %name,
            url = %settings.redacted_url(),
            max_connections = settings.max_connections,
            "Created connection pool"
        );

        Ok(Self {
            name,
            settings,
            pool: RwLock::new(Some(pool)),
        })
    }

    /// Borrow a connection, waiting up to the connection timeout
    pub fn get_connection(&self) -> Result<PgPooledConnection> {
        let pool = self.pool()?;
        pool.get()
            .db_context(format!("Failed to get connection from pool '{}'", self.name))
    }

    /// Run a trivial query on a borrowed connection
    pub fn health_check(&self) -> Result<()> {
        let mut conn = self.get_connection()?;
        conn.simple_query(DB_HEALTH_CHECK_QUERY)
            .db_context(format!("Health check failed for pool '{}'", self.name))?;
        debug!(pool = %self.name, "Health check passed");
        Ok(())
    }

    /// Get pool statistics
    pub fn stats(&self) -> PoolStats {
        let state = self.pool().ok().map(|pool| pool.state());
        PoolStats {
            connections: state.as_ref().map_or(0, |s| s.connections),
            idle_connections: state.as_ref().map_or(0, |s| s.idle_connections),
            max_connections: self.settings.max_connections,
        }
    }

    fn pool(&self) -> Result<Pool<PgConnectionManager>> {
        let guard = self
            .pool
            .read()
            .map_err(|_| Error::database(format!("Pool '{}' lock poisoned", self.name)))?;
        guard
            .clone()
            .ok_or_else(|| Error::database(format!("Pool '{}' is closed", self.name)))
    }
}

impl ConnectionSource for PgPoolSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }

    /// Drop the pool; a second call fails like the underlying pool would
    fn close(&self) -> Result<()> {
        let mut guard = self
            .pool
            .write()
            .map_err(|_| Error::database(format!("Pool '{}' lock poisoned", self.name)))?;
        match guard.take() {
            Some(pool) => {
                let state = pool.state();
                drop(pool);
                info!(
                    pool = %self.name,
                    connections = state.connections,
                    "Closed connection pool"
                );
                Ok(())
            }
            None => Err(Error::database(format!(
                "Pool '{}' is already closed",
                self.name
            ))),
        }
    }

    fn is_closed(&self) -> bool {
        self.pool.read().map_or(true, |guard| guard.is_none())
    }
}

impl std::fmt::Debug for PgPoolSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgPoolSource")
            .field("name", &self.name)
            .field("url", &self.settings.redacted_url())
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Creates [`PgPoolSource`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct PgSourceFactory;

impl SourceFactory for PgSourceFactory {
    type Source = PgPoolSource;

    fn create(&self, name: &str, settings: &ConnectionSettings) -> Result<PgPoolSource> {
        PgPoolSource::new(name, settings.clone())
    }
}
