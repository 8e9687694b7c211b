//! Domain Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`PoolMode`] | Read-only or read-write access mode |
//! | [`ConnectionSettings`] | Resolved server, credentials and pool size for a mode |

/// Pool access modes
pub mod mode;
/// Resolved connection parameters
pub mod settings;

pub use mode::PoolMode;
pub use settings::ConnectionSettings;
