//! Read-only/read-write provider with a one-shot shutdown guard

use dbpool_domain::error::Result;
use dbpool_domain::ports::{ConnectionProvider, ConnectionSource};
use dbpool_domain::value_objects::PoolMode;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, error, info};

/// Provider owning one source per [`PoolMode`]
///
/// The first `shutdown()` closes both sources; every later call, including
/// concurrent ones and the one issued on drop, returns without touching them.
pub struct PooledProvider<S: ConnectionSource> {
    readonly: S,
    readwrite: S,
    shutdown: AtomicBool,
}

impl<S: ConnectionSource> PooledProvider<S> {
    /// Wrap the two sources in a live provider
    pub fn new(readonly: S, readwrite: S) -> Self {
        Self {
            readonly,
            readwrite,
            shutdown: AtomicBool::new(false),
        }
    }

    /// Both sources with their modes, read-only first
    pub fn sources(&self) -> [(PoolMode, &S); 2] {
        [
            (PoolMode::ReadOnly, &self.readonly),
            (PoolMode::ReadWrite, &self.readwrite),
        ]
    }
}

impl<S: ConnectionSource> ConnectionProvider for PooledProvider<S> {
    type Source = S;

    fn source(&self, mode: PoolMode) -> &S {
        match mode {
            PoolMode::ReadOnly => &self.readonly,
            PoolMode::ReadWrite => &self.readwrite,
        }
    }

    fn shutdown(&self) -> Result<()> {
        if self.shutdown.swap(true, Ordering::AcqRel) {
            debug!("Provider already shut down");
            return Ok(());
        }

        info!("Shutting down connection provider");
        let mut first_error = None;
        for (mode, source) in self.sources() {
            if let Err(e) = source.close() {
                error!(mode = %mode, pool = %source.name(), error = %e, "Failed to close pool");
                first_error.get_or_insert(e);
            }
        }

        first_error.map_or(Ok(()), Err)
    }

    fn is_shut_down(&self) -> bool {
        self.shutdown.load(Ordering::Acquire)
    }
}

impl<S: ConnectionSource> Drop for PooledProvider<S> {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            error!(error = %e, "Connection provider shutdown on drop failed");
        }
    }
}

impl<S: ConnectionSource> std::fmt::Debug for PooledProvider<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PooledProvider")
            .field("readonly", &self.readonly.name())
            .field("readwrite", &self.readwrite.name())
            .field("is_shut_down", &self.is_shut_down())
            .finish()
    }
}
