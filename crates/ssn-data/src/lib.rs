//! Collaborators of the navigation core: the virtual scroller model, the
//! region annotation table and configuration loading

pub mod config;
pub mod region;
pub mod scroller;

use ssn_core::IdentifierError;
use thiserror::Error;

// Re-exports
pub use config::{load_config, AppConfig, ScrollerConfig};
pub use region::{region_for_area, Region};
pub use scroller::VirtualScroller;

/// Errors that can occur outside the navigation core
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config parsing error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),
}
