//! Alignment of partial search text onto the identifier layout
//!
//! A query such as `"5-12"` can sit at several offsets inside `NNN-NN-NNNN`.
//! Every offset where the query's dashes land on separators and its digits
//! land on digit slots yields a [`Pattern`]; the remaining digit slots are
//! left as placeholders for the generator to fill.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::identifier::{is_separator, Identifier, FORMATTED_LEN};
use crate::IdentifierError;

/// Marker for an unfilled digit slot. Never a digit.
pub const PLACEHOLDER: u8 = b'X';

/// Clean raw search input: lower-case it and reject anything that is not a
/// digit or a dash.
pub fn clean_query(raw: &str) -> Result<String, IdentifierError> {
    let query = raw.to_lowercase();
    if let Some((position, character)) = query
        .chars()
        .enumerate()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '-'))
    {
        return Err(IdentifierError::InvalidCharacter { character, position });
    }
    if query.is_empty() {
        return Err(IdentifierError::EmptyQuery);
    }
    Ok(query)
}

/// A full-width template with the query spliced in at `offset`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pattern {
    template: String,
    offset: usize,
}

impl Pattern {
    /// Overlay `query` at `offset`, or `None` if a dash and a digit collide
    pub fn at_offset(query: &str, offset: usize) -> Option<Self> {
        let bytes = query.as_bytes();
        if offset + bytes.len() > FORMATTED_LEN {
            return None;
        }

        let mut template = [PLACEHOLDER; FORMATTED_LEN];
        for (pos, slot) in template.iter_mut().enumerate() {
            if is_separator(pos) {
                *slot = b'-';
            }
        }

        for (i, b) in bytes.iter().enumerate() {
            let pos = offset + i;
            let is_dash = *b == b'-';
            if is_dash != is_separator(pos) || !(is_dash || b.is_ascii_digit()) {
                return None;
            }
            template[pos] = *b;
        }

        // Only ASCII digits, dashes and the placeholder reach the template.
        let template = String::from_utf8_lossy(&template).into_owned();
        Some(Self { template, offset })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.template.as_bytes()
    }

    /// Where the query starts inside the template
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of digit slots left to fill
    pub fn placeholders(&self) -> usize {
        self.as_bytes().iter().filter(|b| **b == PLACEHOLDER).count()
    }

    /// Whether `identifier` agrees with every fixed slot
    pub fn matches(&self, identifier: &Identifier) -> bool {
        self.as_bytes()
            .iter()
            .zip(identifier.to_bytes().iter())
            .all(|(p, c)| *p == PLACEHOLDER || p == c)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}

/// Every valid overlay of `query`, in ascending offset order. Empty input,
/// input wider than an identifier, or input that fits nowhere gives an empty
/// list.
pub fn align(query: &str) -> Result<Vec<Pattern>, IdentifierError> {
    let query = match clean_query(query) {
        Ok(query) => query,
        Err(IdentifierError::EmptyQuery) => return Ok(Vec::new()),
        Err(err) => return Err(err),
    };
    if query.len() > FORMATTED_LEN {
        return Ok(Vec::new());
    }

    Ok((0..=FORMATTED_LEN - query.len())
        .filter_map(|offset| Pattern::at_offset(&query, offset))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn templates(query: &str) -> Vec<(String, usize)> {
        align(query)
            .unwrap()
            .into_iter()
            .map(|p| (p.as_str().to_string(), p.offset()))
            .collect()
    }

    #[test]
    fn test_dash_must_land_on_separator() {
        // "1-2" fits where the dash hits position 3 or 6
        assert_eq!(
            templates("1-2"),
            vec![
                ("XX1-2X-XXXX".to_string(), 2),
                ("XXX-X1-2XXX".to_string(), 5),
            ]
        );
        for pattern in align("1-2").unwrap() {
            let groups: Vec<usize> = pattern.as_str().split('-').map(str::len).collect();
            assert_eq!(groups, vec![3, 2, 4]);
        }
    }

    #[test]
    fn test_digit_runs() {
        assert_eq!(
            templates("999"),
            vec![
                ("999-XX-XXXX".to_string(), 0),
                ("XXX-XX-999X".to_string(), 7),
                ("XXX-XX-X999".to_string(), 8),
            ]
        );
        assert_eq!(templates("7").len(), 9);
        assert_eq!(templates("12345").len(), 0);
        assert_eq!(templates("123-45-6789"), vec![("123-45-6789".to_string(), 0)]);
    }

    #[test]
    fn test_no_candidates() {
        assert!(align("").unwrap().is_empty());
        assert!(align("--").unwrap().is_empty());
        assert!(align("1234-56-7890").unwrap().is_empty());
    }

    #[test]
    fn test_rejects_invalid_characters() {
        assert_eq!(
            align("12a"),
            Err(IdentifierError::InvalidCharacter { character: 'a', position: 2 })
        );
        assert_eq!(
            clean_query("12 3"),
            Err(IdentifierError::InvalidCharacter { character: ' ', position: 2 })
        );
        assert_eq!(clean_query(""), Err(IdentifierError::EmptyQuery));
        assert_eq!(clean_query("12-3").unwrap(), "12-3");
    }

    #[test]
    fn test_pattern_matching() {
        let pattern = Pattern::at_offset("5-1", 2).unwrap();
        assert_eq!(pattern.as_str(), "XX5-1X-XXXX");
        assert_eq!(pattern.placeholders(), 7);
        assert!(pattern.matches(&"125-13-0001".parse().unwrap()));
        assert!(!pattern.matches(&"124-13-0001".parse().unwrap()));
        assert!(Pattern::at_offset("5-1", 3).is_none());
        assert!(Pattern::at_offset("5-1", 9).is_none());
    }
}
