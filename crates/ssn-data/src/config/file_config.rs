//! File configuration for the navigator

use std::path::Path;
use serde::{Serialize, Deserialize};
use ssn_core::SearchConfig;

use crate::DataError;

/// Rows shown by the scroller when nothing else is configured
pub const DEFAULT_VISIBLE_ROWS: usize = 20;

/// Scroller configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollerConfig {
    /// Number of rows in the displayed window
    pub visible_rows: usize,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            visible_rows: DEFAULT_VISIBLE_ROWS,
        }
    }
}

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Search engine tuning
    pub search: SearchConfig,

    /// Displayed window
    pub scroller: ScrollerConfig,
}

/// Load a JSON configuration file. Missing keys keep their defaults.
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig, DataError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&text)?;
    tracing::debug!("Loaded config from {}: {:?}", path.display(), config);
    Ok(config)
}
