//! Connection provider port

use super::source::ConnectionSource;
use crate::error::Result;
use crate::value_objects::PoolMode;

/// Owner of one read-only and one read-write connection source
///
/// `live --shutdown()--> closed`; `closed` is terminal and further
/// `shutdown()` calls, from any thread, do nothing.
pub trait ConnectionProvider: Send + Sync {
    /// Source type held for each mode
    type Source: ConnectionSource;

    /// Source serving `mode`
    fn source(&self, mode: PoolMode) -> &Self::Source;

    /// Source for read-only work
    fn readonly(&self) -> &Self::Source {
        self.source(PoolMode::ReadOnly)
    }

    /// Source for read-write work
    fn readwrite(&self) -> &Self::Source {
        self.source(PoolMode::ReadWrite)
    }

    /// Close both sources exactly once
    fn shutdown(&self) -> Result<()>;

    /// Whether shutdown has been requested
    fn is_shut_down(&self) -> bool;
}
