//! Navigation subscriber trait

use super::NavigationSnapshot;

/// Trait for components that need to respond to navigation changes
pub trait NavigationSubscriber: Send + Sync {
    /// Called after the current identifier, query or history changes
    fn on_navigation_change(&self, snapshot: &NavigationSnapshot);
}
