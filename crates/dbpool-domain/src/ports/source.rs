//! Pooled connection source ports

use crate::error::Result;
use crate::value_objects::ConnectionSettings;
use std::sync::Arc;

/// A named pool vending database connections
///
/// Implementations are not required to tolerate a second `close()`; callers
/// that may close more than once go through a [`ConnectionProvider`] guard.
///
/// [`ConnectionProvider`]: super::ConnectionProvider
pub trait ConnectionSource: Send + Sync {
    /// Process-unique pool name (`<process_id>.<mode>`)
    fn name(&self) -> &str;

    /// Settings the pool was created with
    fn settings(&self) -> &ConnectionSettings;

    /// Release the pool and every idle connection it holds
    fn close(&self) -> Result<()>;

    /// Whether `close()` has completed
    fn is_closed(&self) -> bool;
}

impl<T: ConnectionSource + ?Sized> ConnectionSource for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn settings(&self) -> &ConnectionSettings {
        (**self).settings()
    }

    fn close(&self) -> Result<()> {
        (**self).close()
    }

    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

/// Creates connection sources from resolved settings
pub trait SourceFactory: Send + Sync {
    /// Source type produced by this factory
    type Source: ConnectionSource;

    /// Create a source registered under `name`
    fn create(&self, name: &str, settings: &ConnectionSettings) -> Result<Self::Source>;
}
