use serde::{Deserialize, Serialize};

use crate::identifier::{encode_wrapping, Identifier, Index, MAX_INDEX};
use crate::IdentifierError;

/// One row of the displayed window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowEntry {
    pub index: Index,
    pub identifier: Identifier,
}

impl WindowEntry {
    /// Row at `index`
    pub fn at(index: Index) -> Result<Self, IdentifierError> {
        Ok(Self {
            index,
            identifier: Identifier::from_index(index)?,
        })
    }

    /// Row at a signed offset, wrapping around both ends of the list
    pub fn wrapping(index: i128) -> Self {
        let (index, identifier) = encode_wrapping(index);
        Self { index, identifier }
    }
}

/// What the scroller currently shows: a position plus the rows on screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    position: Index,
    displayed: Vec<WindowEntry>,
}

impl Viewport {
    /// Build a viewport, rejecting positions outside the index space
    pub fn new(position: Index, displayed: Vec<WindowEntry>) -> Result<Self, IdentifierError> {
        if position >= MAX_INDEX {
            return Err(IdentifierError::OutOfRange { index: position });
        }
        Ok(Self { position, displayed })
    }

    /// Viewport with nothing on screen
    pub fn at(position: Index) -> Result<Self, IdentifierError> {
        Self::new(position, Vec::new())
    }

    pub fn position(&self) -> Index {
        self.position
    }

    pub fn displayed(&self) -> &[WindowEntry] {
        &self.displayed
    }

    /// Row at the current position
    pub fn current_entry(&self) -> WindowEntry {
        WindowEntry::wrapping(i128::from(self.position))
    }

    /// `count` rows past the end of the displayed window (past the position
    /// when nothing is displayed), nearest first
    pub fn lookahead(&self, count: usize) -> impl Iterator<Item = WindowEntry> {
        let end = self.displayed.last().map_or(self.position, |entry| entry.index);
        Self::following(end, count)
    }

    fn following(from: Index, count: usize) -> impl Iterator<Item = WindowEntry> {
        (1..=count as i128).map(move |distance| WindowEntry::wrapping(i128::from(from) + distance))
    }

    /// `count` rows before the current position, nearest first
    pub fn lookback(&self, count: usize) -> impl Iterator<Item = WindowEntry> {
        let from = self.position;
        (1..=count as i128).map(move |distance| WindowEntry::wrapping(i128::from(from) - distance))
    }
}
