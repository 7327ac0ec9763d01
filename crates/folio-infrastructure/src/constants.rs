//! Infrastructure constants

/// Prefix for configuration environment variables (`FOLIO_BOOK__ROOT`)
pub const CONFIG_ENV_PREFIX: &str = "FOLIO";

/// Separator for nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Environment variable holding a `tracing` filter directive
pub const LOG_FILTER_ENV: &str = "FOLIO_LOG";

/// Configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILENAME: &str = "folio.toml";

/// Directory name used under the user config dir
pub const DEFAULT_CONFIG_DIR: &str = "folio";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Paths skipped when walking a book unless configured otherwise
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &["node_modules/**", "book/**", "target/**"];
