//! Virtual scroller model
//!
//! Owns the current virtual position over the full index space and produces
//! the window of rows on screen. Positions supplied from outside are wrapped
//! into range here, so the engine only ever sees valid indices.

use std::sync::Arc;
use parking_lot::RwLock;
use ssn_core::{
    wrap_index, Identifier, Index, NavigationSnapshot, NavigationSubscriber, Viewport, WindowEntry,
};

use crate::config::ScrollerConfig;
use crate::DataError;

/// Scroll state shared with navigation subscribers
pub struct VirtualScroller {
    position: Arc<RwLock<Index>>,
    visible_rows: usize,
}

impl VirtualScroller {
    /// Create a scroller at the top of the list
    pub fn new(config: &ScrollerConfig) -> Self {
        Self {
            position: Arc::new(RwLock::new(0)),
            visible_rows: config.visible_rows,
        }
    }

    pub fn position(&self) -> Index {
        *self.position.read()
    }

    /// Move to any position, wrapping around both ends of the list
    pub fn set_position(&self, position: i128) -> Index {
        let wrapped = wrap_index(position);
        *self.position.write() = wrapped;
        wrapped
    }

    /// Scroll by `delta` rows
    pub fn scroll_by(&self, delta: i64) -> Index {
        let mut position = self.position.write();
        *position = wrap_index(i128::from(*position) + i128::from(delta));
        *position
    }

    /// Jump to an identifier typed by the user
    pub fn jump_to_identifier(&self, text: &str) -> Result<Index, DataError> {
        let identifier: Identifier = text.trim().parse()?;
        let index = identifier.index();
        *self.position.write() = index;
        Ok(index)
    }

    /// Rows currently on screen, starting at the position
    pub fn displayed(&self) -> Vec<WindowEntry> {
        let position = self.position();
        (0..self.visible_rows as i128)
            .map(|offset| WindowEntry::wrapping(i128::from(position) + offset))
            .collect()
    }

    /// Position and displayed rows, as consumed by the navigation engine
    pub fn viewport(&self) -> Viewport {
        let displayed = self.displayed();
        let position = self.position();
        // `position` is always wrapped into range
        Viewport::new(position, displayed).unwrap_or_default()
    }
}

impl NavigationSubscriber for VirtualScroller {
    fn on_navigation_change(&self, snapshot: &NavigationSnapshot) {
        if let Some(hit) = &snapshot.current {
            tracing::debug!("Scrolling to {} at index {}", hit.identifier, hit.index);
            *self.position.write() = hit.index;
        }
    }
}
