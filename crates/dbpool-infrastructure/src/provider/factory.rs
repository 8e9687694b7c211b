//! Provider factory
//!
//! Resolves each mode's settings by layering `<prefix>.<mode>` properties
//! over `<prefix>.default`, then creates one source per mode named
//! `<process_id>.<mode>`.

use super::pooled::PooledProvider;
use crate::config::{Properties, PropertyStore};
use dbpool_domain::constants::{
    DEFAULT_MAX_CONNECTIONS, DEFAULT_PREFIX, DEFAULT_TIER, KEY_DATABASE, KEY_MAXCONNS,
    KEY_PASSWORD, KEY_PORT, KEY_SERVER, KEY_USERNAME,
};
use dbpool_domain::error::{Error, Result};
use dbpool_domain::ports::{ConnectionSource, SourceFactory};
use dbpool_domain::value_objects::{ConnectionSettings, PoolMode};
use std::str::FromStr;
use tracing::{debug, info, warn};

/// Builds [`PooledProvider`]s from a [`PropertyStore`]
#[derive(Debug, Clone)]
pub struct ProviderFactory<F: SourceFactory> {
    source_factory: F,
    prefix: String,
}

impl<F: SourceFactory> ProviderFactory<F> {
    /// Create a factory reading properties under `db`
    pub fn new(source_factory: F) -> Self {
        Self {
            source_factory,
            prefix: DEFAULT_PREFIX.to_string(),
        }
    }

    /// Read properties under `prefix` instead of `db`
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Property prefix in use
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Build a provider whose pools are named after `process_id`
    ///
    /// A blank `process_id` is rejected. If the read-write source cannot be
    /// created, the already-created read-only source is closed before the
    /// error is returned.
    pub fn build(
        &self,
        store: &PropertyStore,
        process_id: &str,
    ) -> Result<PooledProvider<F::Source>> {
        if process_id.trim().is_empty() {
            return Err(Error::invalid_configuration(
                "process_id",
                process_id,
                "must not be blank",
            ));
        }

        let readonly = self.create_source(store, process_id, PoolMode::ReadOnly)?;
        let readwrite = match self.create_source(store, process_id, PoolMode::ReadWrite) {
            Ok(source) => source,
            Err(e) => {
                warn!(
                    pool = %readonly.name(),
                    error = %e,
                    "Read-write source failed; closing read-only source"
                );
                if let Err(close_err) = readonly.close() {
                    warn!(pool = %readonly.name(), error = %close_err, "Failed to close pool");
                }
                return Err(e);
            }
        };

        info!(
            process_id = %process_id,
            prefix = %self.prefix,
            "Connection provider ready"
        );
        Ok(PooledProvider::new(readonly, readwrite))
    }

    /// Resolve the settings for `mode` without creating a source
    pub fn resolve(&self, store: &PropertyStore, mode: PoolMode) -> Result<ConnectionSettings> {
        let tiers = Tiers::new(&self.prefix, mode);

        // start with defaults, then apply overrides
        let mut props = store.sub_properties(&tiers.default_prefix);
        store.sub_properties_into(&tiers.mode_prefix, &mut props);

        let server = tiers.require(&props, KEY_SERVER)?;
        let database = tiers.require(&props, KEY_DATABASE)?;
        let port = tiers.require(&props, KEY_PORT)?;
        let username = tiers.require(&props, KEY_USERNAME)?;
        let password = tiers.require(&props, KEY_PASSWORD)?;
        let maxconns = props.get_or(KEY_MAXCONNS, DEFAULT_MAX_CONNECTIONS);

        let settings = ConnectionSettings {
            server: server.to_string(),
            database: database.to_string(),
            port: tiers.parse(store, KEY_PORT, port)?,
            username: username.to_string(),
            password: password.to_string(),
            max_connections: tiers.parse(store, KEY_MAXCONNS, maxconns)?,
        };
        settings.check()?;

        debug!(
            mode = %mode,
            url = %settings.redacted_url(),
            max_connections = settings.max_connections,
            "Resolved connection settings"
        );
        Ok(settings)
    }

    fn create_source(
        &self,
        store: &PropertyStore,
        process_id: &str,
        mode: PoolMode,
    ) -> Result<F::Source> {
        let settings = self.resolve(store, mode)?;
        self.source_factory
            .create(&mode.pool_name(process_id), &settings)
    }
}

/// The two property paths a mode's settings are read from
struct Tiers {
    default_prefix: String,
    mode_prefix: String,
}

impl Tiers {
    fn new(prefix: &str, mode: PoolMode) -> Self {
        Self {
            default_prefix: format!("{prefix}.{DEFAULT_TIER}"),
            mode_prefix: mode.property_prefix(prefix),
        }
    }

    fn require<'a>(&self, props: &'a Properties, key: &str) -> Result<&'a str> {
        props.get(key).ok_or_else(|| {
            Error::missing_configuration(
                key,
                format!("{}.{key}", self.default_prefix),
                format!("{}.{key}", self.mode_prefix),
            )
        })
    }

    /// Parse an integer property, naming the tier it came from on failure
    fn parse<T: FromStr>(&self, store: &PropertyStore, key: &str, raw: &str) -> Result<T> {
        raw.trim().parse().map_err(|_| {
            let mode_path = format!("{}.{key}", self.mode_prefix);
            let path = if store.get(&mode_path).is_some() {
                mode_path
            } else {
                format!("{}.{key}", self.default_prefix)
            };
            Error::invalid_configuration(path, raw, "not a valid integer")
        })
    }
}
