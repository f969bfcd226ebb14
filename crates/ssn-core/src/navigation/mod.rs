use serde::{Deserialize, Serialize};

mod engine;
mod local;
mod position;
mod random;
mod subscriber;

pub use engine::NavigationEngine;
pub use position::{Viewport, WindowEntry};
pub use subscriber::NavigationSubscriber;

use crate::identifier::{Identifier, Index};
use crate::pattern::Pattern;

/// Direction of a search relative to the current position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Towards higher indices
    Forward,
    /// Towards lower indices
    Backward,
}

impl Direction {
    /// Whether `candidate` lies strictly on this side of `position`
    pub fn admits(self, candidate: Index, position: Index) -> bool {
        match self {
            Direction::Forward => candidate > position,
            Direction::Backward => candidate < position,
        }
    }

    /// Whether `candidate` is nearer the origin of the search than `best`
    pub fn prefers(self, candidate: Index, best: Index) -> bool {
        match self {
            Direction::Forward => candidate < best,
            Direction::Backward => candidate > best,
        }
    }
}

/// Where a search hit came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitSource {
    /// Exact substring match inside the scanned window
    LocalWindow,
    /// Sampled candidate satisfying direction and uniqueness
    RandomSearch,
    /// Best-effort candidate that may break direction or uniqueness
    Fallback,
}

/// One search result; also the unit stored on the history stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub identifier: Identifier,
    pub index: Index,
    /// Pattern the identifier was synthesized from, if any
    pub pattern: Option<Pattern>,
    pub source: HitSource,
}

impl SearchHit {
    pub fn local(entry: WindowEntry) -> Self {
        Self {
            identifier: entry.identifier,
            index: entry.index,
            pattern: None,
            source: HitSource::LocalWindow,
        }
    }

    pub fn synthesized(identifier: Identifier, pattern: Pattern, source: HitSource) -> Self {
        Self {
            identifier,
            index: identifier.index(),
            pattern: Some(pattern),
            source,
        }
    }
}

/// Context passed to subscribers after every navigation change
#[derive(Debug, Clone, Default)]
pub struct NavigationSnapshot {
    pub query: Option<String>,
    pub current: Option<SearchHit>,
    pub history_len: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_rules() {
        assert!(Direction::Forward.admits(11, 10));
        assert!(!Direction::Forward.admits(10, 10));
        assert!(Direction::Backward.admits(9, 10));
        assert!(!Direction::Backward.admits(10, 10));
        assert!(Direction::Forward.prefers(12, 20));
        assert!(Direction::Backward.prefers(20, 12));
    }
}
