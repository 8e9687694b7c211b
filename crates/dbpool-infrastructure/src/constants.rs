//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Property key names are defined in `dbpool_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "dbpool.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "dbpool";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DBPOOL";

/// Separator between nesting levels in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Separator between nesting levels in property keys
pub const PROPERTY_KEY_SEPARATOR: char = '.';

// ============================================================================
// DATABASE CONSTANTS
// ============================================================================

/// Time to wait for a pooled connection before giving up
pub const DB_CONNECTION_TIMEOUT_SECS: u64 = 30;

/// Maximum lifetime of a pooled connection (30 minutes)
pub const DB_CONNECTION_MAX_LIFETIME_SECS: u64 = 1800;

/// Idle time after which a pooled connection is closed (10 minutes)
pub const DB_CONNECTION_IDLE_TIMEOUT_SECS: u64 = 600;

/// Query used by pool health checks
pub const DB_HEALTH_CHECK_QUERY: &str = "SELECT 1";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a tracing filter directive
pub const LOG_FILTER_ENV_VAR: &str = "DBPOOL_LOG";

/// File stem used when a log file path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "dbpool";
