//! Configuration management
//!
//! Loads dotted-key properties from TOML files and environment variables
//! and exposes sub-tree extraction for the provider factory.

pub mod loader;
pub mod properties;
pub mod types;

pub use loader::ConfigLoader;
pub use properties::{Properties, PropertyStore};
pub use types::LoggingConfig;
