//! Navigation engine implementation

use super::{local, random};
use super::{Direction, NavigationSnapshot, NavigationSubscriber, SearchHit, Viewport};
use crate::config::SearchConfig;
use crate::identifier::Identifier;
use crate::pattern;
use parking_lot::{Mutex, RwLock};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Weak};

/// Navigation state stored internally
#[derive(Debug, Clone)]
enum NavigationState {
    Idle,
    Searching {
        query: String,
        current: SearchHit,
        /// Results in the order they were produced; the top is the most recent
        history: Vec<SearchHit>,
    },
}

/// The search navigation engine.
///
/// Every operation receives the scroller's [`Viewport`] and runs to
/// completion while holding the state lock, so a call's changes to the
/// current identifier and the history are applied together.
pub struct NavigationEngine {
    config: SearchConfig,
    state: Arc<RwLock<NavigationState>>,
    rng: Mutex<StdRng>,
    subscribers: Arc<RwLock<Vec<Weak<dyn NavigationSubscriber>>>>,
}

impl NavigationEngine {
    /// Create a new navigation engine seeded from OS entropy
    pub fn new(config: SearchConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create an engine whose random search is reproducible
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: SearchConfig, rng: StdRng) -> Self {
        Self {
            config,
            state: Arc::new(RwLock::new(NavigationState::Idle)),
            rng: Mutex::new(rng),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Start a new search for `raw`.
    ///
    /// Returns `None` without touching the state when the input holds
    /// anything but digits and dashes, or when nothing can be found.
    pub fn search(&self, raw: &str, viewport: &Viewport) -> Option<Identifier> {
        let query = match pattern::clean_query(raw) {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!("Rejected search input {:?}: {}", raw, err);
                return None;
            }
        };

        let mut state = self.state.write();

        // A new search starts a new history
        let hit = self.locate(&query, viewport, Direction::Forward, true, &[])?;
        tracing::info!(
            "Search {:?} found {} at index {} ({:?})",
            query,
            hit.identifier,
            hit.index,
            hit.source
        );

        let identifier = hit.identifier;
        *state = NavigationState::Searching {
            query,
            current: hit.clone(),
            history: vec![hit],
        };

        drop(state);
        self.notify_subscribers();
        Some(identifier)
    }

    /// Find the next match after the current position
    pub fn next(&self, viewport: &Viewport) -> Option<Identifier> {
        let mut state = self.state.write();

        let (query, current, history) = match &mut *state {
            NavigationState::Idle => return None,
            NavigationState::Searching { query, current, history } => (query, current, history),
        };

        let hit = self.locate(query, viewport, Direction::Forward, false, history)?;
        tracing::info!(
            "Next {:?} found {} at index {} ({:?})",
            query,
            hit.identifier,
            hit.index,
            hit.source
        );

        let identifier = hit.identifier;
        *current = hit.clone();
        history.push(hit);

        drop(state);
        self.notify_subscribers();
        Some(identifier)
    }

    /// Step back: replay the history while it has more than one entry,
    /// otherwise search backward from the current position
    pub fn previous(&self, viewport: &Viewport) -> Option<Identifier> {
        let mut state = self.state.write();

        let (query, current, history) = match &mut *state {
            NavigationState::Idle => return None,
            NavigationState::Searching { query, current, history } => (query, current, history),
        };

        let hit = if history.len() > 1 {
            history.pop();
            let top = history.last().cloned()?;
            tracing::debug!("Replaying {} from history ({} left)", top.identifier, history.len());
            top
        } else {
            // Nothing below the base of the stack, so the result replaces
            // the current identifier without being pushed.
            let hit = self.locate(query, viewport, Direction::Backward, false, history)?;
            tracing::info!(
                "Previous {:?} found {} at index {} ({:?})",
                query,
                hit.identifier,
                hit.index,
                hit.source
            );
            hit
        };

        let identifier = hit.identifier;
        *current = hit;

        drop(state);
        self.notify_subscribers();
        Some(identifier)
    }

    /// Drop the active search and its history
    pub fn reset(&self) {
        *self.state.write() = NavigationState::Idle;
        self.notify_subscribers();
    }

    /// Local window first, then randomized search
    fn locate(
        &self,
        query: &str,
        viewport: &Viewport,
        direction: Direction,
        include_current: bool,
        history: &[SearchHit],
    ) -> Option<SearchHit> {
        let nearby =
            local::search_around(query, viewport, direction, include_current, &self.config);
        if nearby.is_some() {
            return nearby;
        }

        tracing::debug!(
            "No local match for {:?} around index {}, sampling {:?}",
            query,
            viewport.position(),
            direction
        );
        let mut rng = self.rng.lock();
        let position = viewport.position();
        random::search_randomly(query, position, direction, history, &self.config, &mut *rng)
    }

    /// Currently selected identifier
    pub fn current(&self) -> Option<Identifier> {
        self.current_hit().map(|hit| hit.identifier)
    }

    /// Currently selected hit with its index and origin
    pub fn current_hit(&self) -> Option<SearchHit> {
        match &*self.state.read() {
            NavigationState::Idle => None,
            NavigationState::Searching { current, .. } => Some(current.clone()),
        }
    }

    /// Active search text
    pub fn query(&self) -> Option<String> {
        match &*self.state.read() {
            NavigationState::Idle => None,
            NavigationState::Searching { query, .. } => Some(query.clone()),
        }
    }

    /// History stack, oldest first
    pub fn history(&self) -> Vec<SearchHit> {
        match &*self.state.read() {
            NavigationState::Idle => Vec::new(),
            NavigationState::Searching { history, .. } => history.clone(),
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(&*self.state.read(), NavigationState::Searching { .. })
    }

    /// Get current navigation snapshot
    pub fn snapshot(&self) -> NavigationSnapshot {
        match &*self.state.read() {
            NavigationState::Idle => NavigationSnapshot::default(),
            NavigationState::Searching { query, current, history } => NavigationSnapshot {
                query: Some(query.clone()),
                current: Some(current.clone()),
                history_len: history.len(),
            },
        }
    }

    /// Add a subscriber
    pub fn add_subscriber(&self, subscriber: Arc<dyn NavigationSubscriber>) {
        let mut subscribers = self.subscribers.write();
        subscribers.push(Arc::downgrade(&subscriber));
    }

    /// Notify all subscribers of navigation change
    fn notify_subscribers(&self) {
        let snapshot = self.snapshot();
        let mut subscribers = self.subscribers.write();

        // Remove any dead weak references
        subscribers.retain(|weak| weak.strong_count() > 0);

        for weak in subscribers.iter() {
            if let Some(subscriber) = weak.upgrade() {
                subscriber.on_navigation_change(&snapshot);
            }
        }
    }
}

impl Default for NavigationEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
