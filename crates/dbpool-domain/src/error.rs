//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dbpool
#[derive(Error, Debug)]
pub enum Error {
    /// A required property is absent from both the default and the mode tier
    #[error("Unable to locate required property '{key}' as '{default_path}' or '{mode_path}'.")]
    MissingConfiguration {
        /// Property name relative to its tier (e.g. `server`)
        key: String,
        /// Full path checked in the default tier
        default_path: String,
        /// Full path checked in the mode tier
        mode_path: String,
    },

    /// A property is present but its value cannot be used
    #[error("Invalid value '{value}' for property '{key}': {reason}")]
    InvalidConfiguration {
        /// Property name or path
        key: String,
        /// The offending value as supplied
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Database-related error
    #[error("Database error: {message}")]
    Database {
        /// Description of the database error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Property resolution error creation methods
impl Error {
    /// Create a missing configuration error for `key` looked up under both tiers
    pub fn missing_configuration<K, D, M>(key: K, default_path: D, mode_path: M) -> Self
    where
        K: Into<String>,
        D: Into<String>,
        M: Into<String>,
    {
        Self::MissingConfiguration {
            key: key.into(),
            default_path: default_path.into(),
            mode_path: mode_path.into(),
        }
    }

    /// Create an invalid configuration error
    pub fn invalid_configuration<K, V, R>(key: K, value: V, reason: R) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        Self::InvalidConfiguration {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Database error creation methods
impl Error {
    /// Create a database error
    pub fn database<S: Into<String>>(message: S) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// Create a database error with source
    pub fn database_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Database {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

impl Error {
    /// Whether this error was raised while resolving provider properties
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingConfiguration { .. }
                | Self::InvalidConfiguration { .. }
                | Self::Configuration { .. }
        )
    }
}
