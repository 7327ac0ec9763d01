//! Top-level configuration

use super::{BookConfig, LoggingConfig};
use folio_validate::ValidationConfig;
use serde::{Deserialize, Serialize};

/// Complete configuration as read from `folio.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the book lives
    pub book: BookConfig,
    /// Which integrity checks run and how strictly
    pub checks: ValidationConfig,
    /// Log output
    pub logging: LoggingConfig,
}
