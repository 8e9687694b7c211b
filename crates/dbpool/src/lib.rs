//! # dbpool
//!
//! Builds a PostgreSQL connection provider holding two pools, one for
//! read-only and one for read-write work, from layered configuration.
//!
//! Each mode reads `<prefix>.default.*` and then `<prefix>.<mode>.*`, the
//! mode-specific value winning per key:
//!
//! ```toml
//! [db.default]
//! server = "primary.internal"
//! port = 5432
//! database = "orders"
//! username = "app"
//! password = "secret"
//!
//! [db.readonly]
//! server = "replica.internal"
//! maxconns = 8
//! ```
//!
//! ## Example
//!
//! ```ignore
//! use dbpool::prelude::*;
//!
//! let store = ConfigLoader::new().with_config_path("dbpool.toml").load()?;
//! let provider = create_pooling_provider(&store, "orders-api")?;
//!
//! let mut conn = provider.readonly().get_connection()?;
//! let rows = conn.query("SELECT id FROM orders", &[])?;
//!
//! // Safe to call again, or to let the provider drop
//! provider.shutdown()?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - pool modes, connection settings, errors, port traits
//! - `infrastructure` - property loading, provider factory, r2d2 pools, logging

/// Domain layer - core types and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use dbpool_domain::*;
}

/// Infrastructure layer - configuration, provider construction and pools
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use dbpool_infrastructure::*;
}

/// Commonly used types in one import
pub mod prelude {
    pub use dbpool_domain::{
        ConnectionProvider, ConnectionSettings, ConnectionSource, Error, PoolMode, Result,
        SourceFactory,
    };
    pub use dbpool_infrastructure::{
        ConfigLoader, PgPoolSource, PgSourceFactory, PooledProvider, PropertyStore,
        ProviderFactory, create_pooling_provider, create_pooling_provider_with_prefix,
    };
}

// Re-export commonly used domain types at the crate root
pub use domain::{Error, Result};
pub use infrastructure::{create_pooling_provider, create_pooling_provider_with_prefix};
