//! Constrained random generation of identifiers from a pattern

use rand::Rng;

use crate::config::MAX_GENERATION_ATTEMPTS;
use crate::identifier::{Identifier, FORMATTED_LEN};
use crate::pattern::{Pattern, PLACEHOLDER};

/// Result of filling a pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generated {
    /// A valid identifier that honours the pattern
    Filled(Identifier),
    /// Every attempt violated a range constraint; carries [`Identifier::FIRST`]
    Fallback(Identifier),
}

impl Generated {
    pub fn identifier(&self) -> Identifier {
        match self {
            Generated::Filled(id) | Generated::Fallback(id) => *id,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Generated::Fallback(_))
    }
}

/// Fills placeholder slots with uniform random digits until the result
/// passes validation
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator {
    max_attempts: usize,
}

impl CandidateGenerator {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Produce a valid identifier matching `pattern`. Never fails: when the
    /// attempt budget runs out the fixed first identifier is returned instead.
    pub fn generate<R: Rng>(&self, pattern: &Pattern, rng: &mut R) -> Generated {
        let mut candidate = [0u8; FORMATTED_LEN];
        for _ in 0..self.max_attempts {
            for (slot, fixed) in candidate.iter_mut().zip(pattern.as_bytes()) {
                *slot = if *fixed == PLACEHOLDER {
                    b'0' + rng.gen_range(0..10u8)
                } else {
                    *fixed
                };
            }

            if let Ok(identifier) = Identifier::from_bytes(&candidate) {
                debug_assert!(pattern.matches(&identifier));
                return Generated::Filled(identifier);
            }
        }

        tracing::warn!(
            "Could not fill {} open slots of pattern {} after {} attempts, using {}",
            pattern.placeholders(),
            pattern,
            self.max_attempts,
            Identifier::FIRST
        );
        Generated::Fallback(Identifier::FIRST)
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new(MAX_GENERATION_ATTEMPTS)
    }
}
