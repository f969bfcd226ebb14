//! Core functionality for the identifier navigator
//!
//! This crate provides the index/identifier codec, partial pattern alignment,
//! constrained random generation and the stateful search navigation engine.

pub mod config;
pub mod generator;
pub mod identifier;
pub mod navigation;
pub mod pattern;

use std::fmt;
use thiserror::Error;

// Re-export commonly used types
pub use config::SearchConfig;
pub use generator::{CandidateGenerator, Generated};
pub use identifier::{decode, encode, wrap_index, Identifier, Index, MAX_INDEX};
pub use navigation::{
    Direction, HitSource, NavigationEngine, NavigationSnapshot, NavigationSubscriber,
    SearchHit, Viewport, WindowEntry,
};
pub use pattern::Pattern;

/// The three numeric groups of an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// First group, three digits
    Area,
    /// Middle group, two digits
    Group,
    /// Last group, four digits
    Serial,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Area => write!(f, "area"),
            Segment::Group => write!(f, "group"),
            Segment::Serial => write!(f, "serial"),
        }
    }
}

/// Errors that can occur when validating input, identifiers or indices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("empty search query")]
    EmptyQuery,

    #[error("malformed identifier {0:?}, expected NNN-NN-NNNN")]
    InvalidFormat(String),

    #[error("{segment} number {value} is out of range")]
    ConstraintViolation { segment: Segment, value: u32 },

    #[error("index {index} is out of range (max: {})", MAX_INDEX - 1)]
    OutOfRange { index: u64 },
}
