//! Connection provider construction
//!
//! [`ProviderFactory`] resolves per-mode settings and creates the sources;
//! [`PooledProvider`] owns them and guards shutdown.

pub mod factory;
pub mod pooled;

pub use factory::ProviderFactory;
pub use pooled::PooledProvider;

use crate::config::PropertyStore;
use crate::postgres::{PgPoolSource, PgSourceFactory};
use dbpool_domain::constants::DEFAULT_PREFIX;
use dbpool_domain::error::Result;

/// PostgreSQL provider reading properties under `db`
///
/// ```text
/// db.default.server = DBHOST
/// db.default.port = 5432
/// db.default.database = DATABASE
/// db.default.username = USERNAME
/// db.default.password = PASSWORD
/// db.readonly.maxconns = 1
/// db.readwrite.maxconns = 1
/// ```
///
/// `db.readonly.*` and `db.readwrite.*` may override any of the default
/// fields. `process_id` prefixes the pool names and must be unique per
/// component sharing the process.
pub fn create_pooling_provider(
    store: &PropertyStore,
    process_id: &str,
) -> Result<PooledProvider<PgPoolSource>> {
    create_pooling_provider_with_prefix(store, process_id, DEFAULT_PREFIX)
}

/// As [`create_pooling_provider`], reading properties under `prefix`
pub fn create_pooling_provider_with_prefix(
    store: &PropertyStore,
    process_id: &str,
    prefix: &str,
) -> Result<PooledProvider<PgPoolSource>> {
    ProviderFactory::new(PgSourceFactory)
        .with_prefix(prefix)
        .build(store, process_id)
}
