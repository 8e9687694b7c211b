//! # Domain Layer
//!
//! Core types for the dual-pool connection provider: the two pool modes,
//! the resolved connection settings for a mode, the error type, and the
//! port traits implemented by the infrastructure layer.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`constants`] | Configuration key names and defaults |
//! | [`error`] | Error type and `Result` alias |
//! | [`ports`] | `ConnectionSource`, `SourceFactory`, `ConnectionProvider` |
//! | [`value_objects`] | `PoolMode`, `ConnectionSettings` |

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::{ConnectionProvider, ConnectionSource, SourceFactory};
pub use value_objects::{ConnectionSettings, PoolMode};
