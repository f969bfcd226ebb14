//! Bounded substring scan around the current position

use super::{Direction, SearchHit, Viewport, WindowEntry};
use crate::config::SearchConfig;

/// First row near the viewport whose identifier contains `query`.
///
/// Forward scans the displayed window in caller order and then the
/// lookahead; with nothing displayed the window is just the current row.
/// Backward scans the lookback only. Rows are only considered on the
/// searched side of the position, so rows that wrapped around an end of
/// the list never match; `include_current` additionally admits the row at
/// the position itself.
pub(crate) fn search_around(
    query: &str,
    viewport: &Viewport,
    direction: Direction,
    include_current: bool,
    config: &SearchConfig,
) -> Option<SearchHit> {
    let position = viewport.position();
    let admissible = |entry: &WindowEntry| {
        direction.admits(entry.index, position) || (include_current && entry.index == position)
    };
    let matches = |entry: &WindowEntry| admissible(entry) && entry.identifier.contains(query);

    let found = match direction {
        Direction::Forward => {
            let current = [viewport.current_entry()];
            let window: &[WindowEntry] = if viewport.displayed().is_empty() {
                &current
            } else {
                viewport.displayed()
            };

            window
                .iter()
                .copied()
                .chain(viewport.lookahead(config.lookahead))
                .find(matches)
        }
        Direction::Backward => viewport.lookback(config.lookback).find(matches),
    };

    found.map(SearchHit::local)
}
