//! Domain Port Interfaces
//!
//! Contracts implemented by the infrastructure layer:
//! - **source** - a named pool and the factory that creates it
//! - **provider** - the pair of mode-specific sources with guarded shutdown

/// Connection provider port
pub mod provider;
/// Connection source and factory ports
pub mod source;

pub use provider::ConnectionProvider;
pub use source::{ConnectionSource, SourceFactory};
