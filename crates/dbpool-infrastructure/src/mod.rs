//! # Infrastructure Layer
//!
//! Property loading, provider construction and PostgreSQL pools.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-backed property store and loader |
//! | [`provider`] | Provider factory and guarded provider |
//! | [`postgres`] | r2d2 PostgreSQL connection source |
//! | [`logging`] | Structured logging with tracing |
//! | [`constants`] | Infrastructure defaults |
//! | [`error_ext`] | Error context helpers |

pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;
pub mod postgres;
pub mod provider;

// Re-export commonly used types
pub use config::{ConfigLoader, LoggingConfig, Properties, PropertyStore};
pub use error_ext::ErrorContext;
pub use postgres::{PgPoolSource, PgSourceFactory, PoolStats};
pub use provider::{
    PooledProvider, ProviderFactory, create_pooling_provider, create_pooling_provider_with_prefix,
};
