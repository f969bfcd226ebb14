//! Randomized directional search over the pattern space
//!
//! The number of ways to fill a pattern can be far too large to enumerate,
//! so a fixed budget of samples is drawn (with replacement) and the sample
//! nearest the current position on the requested side is kept.

use ahash::AHashSet;
use rand::Rng;

use super::{Direction, HitSource, SearchHit};
use crate::config::SearchConfig;
use crate::generator::CandidateGenerator;
use crate::identifier::{Identifier, Index};
use crate::pattern;

pub(crate) fn search_randomly<R: Rng>(
    query: &str,
    position: Index,
    direction: Direction,
    history: &[SearchHit],
    config: &SearchConfig,
    rng: &mut R,
) -> Option<SearchHit> {
    let patterns = match pattern::align(query) {
        Ok(patterns) => patterns,
        Err(err) => {
            tracing::error!("Query {:?} reached random search uncleaned: {}", query, err);
            return None;
        }
    };
    if patterns.is_empty() {
        tracing::debug!("No pattern fits {:?}, nothing to search", query);
        return None;
    }

    let generator = CandidateGenerator::new(config.max_generation_attempts);
    let visited: AHashSet<Identifier> = history.iter().map(|hit| hit.identifier).collect();
    let mut best: Option<SearchHit> = None;

    for _ in 0..config.random_iterations {
        let pattern = &patterns[rng.gen_range(0..patterns.len())];
        let generated = generator.generate(pattern, rng);
        let identifier = generated.identifier();
        let index = identifier.index();

        if !direction.admits(index, position) || visited.contains(&identifier) {
            continue;
        }
        if best.as_ref().map_or(true, |b| direction.prefers(index, b.index)) {
            let source = if generated.is_fallback() {
                HitSource::Fallback
            } else {
                HitSource::RandomSearch
            };
            best = Some(SearchHit::synthesized(identifier, pattern.clone(), source));
        }
    }

    if best.is_some() {
        return best;
    }

    // Nothing satisfied both constraints; take any candidate so navigation
    // does not stall.
    let pattern = &patterns[rng.gen_range(0..patterns.len())];
    let identifier = generator.generate(pattern, rng).identifier();
    tracing::warn!(
        "No {:?} match for {:?} from index {} in {} samples, falling back to {}",
        direction,
        query,
        position,
        config.random_iterations,
        identifier
    );
    Some(SearchHit::synthesized(identifier, pattern.clone(), HitSource::Fallback))
}
