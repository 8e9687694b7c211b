//! Connection settings value object

use crate::constants::{KEY_DATABASE, KEY_MAXCONNS, KEY_PORT, KEY_SERVER, KEY_USERNAME};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Fully resolved parameters for one pooled connection source
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ConnectionSettings {
    /// Database server host
    #[validate(custom(function = "not_blank"))]
    pub server: String,
    /// Database name
    #[validate(custom(function = "not_blank"))]
    pub database: String,
    /// Database server port
    #[validate(range(min = 1))]
    pub port: u16,
    /// Login user
    #[validate(custom(function = "not_blank"))]
    pub username: String,
    /// Login password (never serialized)
    #[serde(default, skip_serializing)]
    pub password: String,
    /// Maximum number of connections in the pool
    #[validate(range(min = 1))]
    pub max_connections: u32,
}

impl ConnectionSettings {
    /// Create settings with a single-connection pool
    pub fn new(
        server: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            server: server.into(),
            database: database.into(),
            port,
            username: username.into(),
            password: password.into(),
            max_connections: 1,
        }
    }

    /// Set the maximum pool size
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Connection URL without the password, safe for logs
    pub fn redacted_url(&self) -> String {
        format!(
            "postgresql://{}@{}:{}/{}",
            self.username, self.server, self.port, self.database
        )
    }

    /// Check field constraints, reporting the first offending property
    pub fn check(&self) -> Result<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let fields = errors.field_errors();

        let checks: [(&str, &str, String, &str); 5] = [
            ("server", KEY_SERVER, self.server.clone(), "must not be blank"),
            ("database", KEY_DATABASE, self.database.clone(), "must not be blank"),
            ("port", KEY_PORT, self.port.to_string(), "must be between 1 and 65535"),
            ("username", KEY_USERNAME, self.username.clone(), "must not be blank"),
            (
                "max_connections",
                KEY_MAXCONNS,
                self.max_connections.to_string(),
                "must be at least 1",
            ),
        ];

        for (field, key, value, reason) in checks {
            if fields.contains_key(field) {
                return Err(Error::invalid_configuration(key, value, reason));
            }
        }

        Err(Error::invalid_configuration(
            "settings",
            self.redacted_url(),
            errors.to_string(),
        ))
    }
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("server", &self.server)
            .field("database", &self.database)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
