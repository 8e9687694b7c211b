//! Domain layer constants
//!
//! Property key names shared by the resolver and by error messages.
//! Infrastructure-specific constants remain in the infrastructure crate.

// ============================================================================
// PROPERTY KEY CONSTANTS
// ============================================================================

/// Default top-level prefix for database properties
pub const DEFAULT_PREFIX: &str = "db";

/// Sub-tree holding the properties shared by every pool mode
pub const DEFAULT_TIER: &str = "default";

/// Database server host
pub const KEY_SERVER: &str = "server";

/// Database name
pub const KEY_DATABASE: &str = "database";

/// Database server port
pub const KEY_PORT: &str = "port";

/// Login user
pub const KEY_USERNAME: &str = "username";

/// Login password
pub const KEY_PASSWORD: &str = "password";

/// Maximum pooled connections for a mode
pub const KEY_MAXCONNS: &str = "maxconns";

/// Keys that must resolve from either the default or the mode tier, in check order
pub const REQUIRED_KEYS: [&str; 5] = [
    KEY_SERVER,
    KEY_DATABASE,
    KEY_PORT,
    KEY_USERNAME,
    KEY_PASSWORD,
];

// ============================================================================
// POOL DEFAULTS
// ============================================================================

/// Value used for `maxconns` when neither tier provides one
pub const DEFAULT_MAX_CONNECTIONS: &str = "1";
