//! Infrastructure layer constants
//!
//! Domain-specific constants are defined in `apus_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "apus.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "apus";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "APUS";

/// Separator between nested keys in environment variables
/// (`APUS_CAMERA__MAX_ZOOM`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "APUS_LOG";

/// File name prefix for rolling log files
pub const LOG_FILE_PREFIX: &str = "apus";

// ============================================================================
// PHOTO LIBRARY CONSTANTS
// ============================================================================

/// Directory created under the user's pictures folder
pub const PHOTO_LIBRARY_DIR_NAME: &str = "Apus";

/// Extension of saved raw image files
pub const PHOTO_FILE_EXTENSION: &str = "raw";
