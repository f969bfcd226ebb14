//! Bijection between list indices and formatted identifiers
//!
//! Identifiers look like `AAA-GG-SSSS`. The index space is a mixed-radix
//! number with the area as the least significant digit, then the group, then
//! the serial, so stepping through indices walks the area first and carries
//! into the group and serial. Area 666 is skipped.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::{IdentifierError, Segment};

/// Rank of an identifier in the enumeration order
pub type Index = u64;

/// Number of valid area values (001-899 without 666)
pub const AREA_COUNT: u64 = 898;
/// Number of valid group values (01-99)
pub const GROUP_COUNT: u64 = 99;
/// Number of valid serial values (0001-9999)
pub const SERIAL_COUNT: u64 = 9999;

/// Size of the index space; valid indices are `0..MAX_INDEX`
pub const MAX_INDEX: Index = AREA_COUNT * GROUP_COUNT * SERIAL_COUNT;

/// Area value that never appears in a valid identifier
pub const FORBIDDEN_AREA: u16 = 666;
const MAX_AREA: u32 = 899;
const MAX_GROUP: u32 = 99;
const MAX_SERIAL: u32 = 9999;

/// Length of a formatted identifier, separators included
pub const FORMATTED_LEN: usize = 11;

/// Byte offsets of the two separators in a formatted identifier
pub const SEPARATOR_POSITIONS: [usize; 2] = [3, 6];

/// Whether `position` holds a separator in the formatted layout
pub fn is_separator(position: usize) -> bool {
    SEPARATOR_POSITIONS.contains(&position)
}

/// A valid identifier. Values of this type always satisfy the range
/// constraints, so converting one back to an index cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier {
    area: u16,
    group: u8,
    serial: u16,
}

impl Identifier {
    /// Identifier at index 0
    pub const FIRST: Identifier = Identifier { area: 1, group: 1, serial: 1 };

    /// Identifier at index `MAX_INDEX - 1`
    pub const LAST: Identifier = Identifier { area: 899, group: 99, serial: 9999 };

    /// Build an identifier from its numeric groups, validating each range
    pub fn new(area: u32, group: u32, serial: u32) -> Result<Self, IdentifierError> {
        if area == 0 || area > MAX_AREA || area == u32::from(FORBIDDEN_AREA) {
            return Err(IdentifierError::ConstraintViolation {
                segment: Segment::Area,
                value: area,
            });
        }
        if group == 0 || group > MAX_GROUP {
            return Err(IdentifierError::ConstraintViolation {
                segment: Segment::Group,
                value: group,
            });
        }
        if serial == 0 || serial > MAX_SERIAL {
            return Err(IdentifierError::ConstraintViolation {
                segment: Segment::Serial,
                value: serial,
            });
        }

        Ok(Self {
            area: area as u16,
            group: group as u8,
            serial: serial as u16,
        })
    }

    /// Identifier at `index`
    pub fn from_index(index: Index) -> Result<Self, IdentifierError> {
        encode(index)
    }

    /// Parse the exact `NNN-NN-NNNN` byte layout
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdentifierError> {
        let well_formed = bytes.len() == FORMATTED_LEN
            && bytes.iter().enumerate().all(|(pos, b)| {
                if is_separator(pos) {
                    *b == b'-'
                } else {
                    b.is_ascii_digit()
                }
            });
        if !well_formed {
            return Err(IdentifierError::InvalidFormat(
                String::from_utf8_lossy(bytes).into_owned(),
            ));
        }

        let number = |range: std::ops::Range<usize>| {
            bytes[range]
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        };
        Self::new(number(0..3), number(4..6), number(7..11))
    }

    pub fn area(&self) -> u16 {
        self.area
    }

    pub fn group(&self) -> u8 {
        self.group
    }

    pub fn serial(&self) -> u16 {
        self.serial
    }

    /// Position of this identifier in the enumeration order
    pub fn index(&self) -> Index {
        let mut area_index = u64::from(self.area) - 1;
        if self.area > FORBIDDEN_AREA {
            area_index -= 1;
        }

        (u64::from(self.serial) - 1) * (AREA_COUNT * GROUP_COUNT)
            + (u64::from(self.group) - 1) * AREA_COUNT
            + area_index
    }

    /// Formatted identifier as fixed-width ASCII bytes
    pub fn to_bytes(&self) -> [u8; FORMATTED_LEN] {
        let mut out = [b'-'; FORMATTED_LEN];
        write_digits(&mut out[0..3], u32::from(self.area));
        write_digits(&mut out[4..6], u32::from(self.group));
        write_digits(&mut out[7..11], u32::from(self.serial));
        out
    }

    /// Whether the formatted identifier contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        let needle = needle.as_bytes();
        if needle.is_empty() {
            return true;
        }
        needle.len() <= FORMATTED_LEN && self.to_bytes().windows(needle.len()).any(|w| w == needle)
    }
}

fn write_digits(slot: &mut [u8], mut value: u32) {
    for byte in slot.iter_mut().rev() {
        *byte = b'0' + (value % 10) as u8;
        value /= 10;
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}-{:02}-{:04}", self.area, self.group, self.serial)
    }
}

impl FromStr for Identifier {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(s.as_bytes())
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

/// Identifier at `index`
pub fn encode(index: Index) -> Result<Identifier, IdentifierError> {
    if index >= MAX_INDEX {
        return Err(IdentifierError::OutOfRange { index });
    }

    Ok(encode_wrapping(i128::from(index)).1)
}

/// Index of a formatted identifier
pub fn decode(identifier: &str) -> Result<Index, IdentifierError> {
    identifier.parse::<Identifier>().map(|id| id.index())
}

/// Fold any signed offset into `0..MAX_INDEX`, wrapping around both ends
pub fn wrap_index(index: i128) -> Index {
    index.rem_euclid(i128::from(MAX_INDEX)) as Index
}

/// Index and identifier at a wrapped offset
pub fn encode_wrapping(index: i128) -> (Index, Identifier) {
    let index = wrap_index(index);
    let mut area = (index % AREA_COUNT) as u16 + 1;
    if area >= FORBIDDEN_AREA {
        area += 1;
    }
    let identifier = Identifier {
        area,
        group: ((index / AREA_COUNT) % GROUP_COUNT) as u8 + 1,
        serial: ((index / (AREA_COUNT * GROUP_COUNT)) % SERIAL_COUNT) as u16 + 1,
    };
    (index, identifier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_endpoints() {
        assert_eq!(MAX_INDEX, 888_931_098);
        assert_eq!(encode(0).unwrap().to_string(), "001-01-0001");
        assert_eq!(decode("001-01-0001").unwrap(), 0);
        assert_eq!(encode(MAX_INDEX - 1).unwrap(), Identifier::LAST);
        assert_eq!(Identifier::LAST.to_string(), "899-99-9999");
        assert_eq!(Identifier::FIRST.index(), 0);
    }

    #[test]
    fn test_encode_out_of_range() {
        assert_eq!(
            encode(MAX_INDEX),
            Err(IdentifierError::OutOfRange { index: MAX_INDEX })
        );
        assert!(encode(u64::MAX).is_err());
    }

    #[test]
    fn test_area_skips_forbidden_value() {
        assert_eq!(encode(664).unwrap().to_string(), "665-01-0001");
        assert_eq!(encode(665).unwrap().to_string(), "667-01-0001");
        assert_eq!(decode("667-01-0001").unwrap(), 665);
        assert_eq!(encode(897).unwrap().to_string(), "899-01-0001");
    }

    #[test]
    fn test_carry_into_group_and_serial() {
        assert_eq!(encode(898).unwrap().to_string(), "001-02-0001");
        assert_eq!(encode(898 * 99).unwrap().to_string(), "001-01-0002");
        assert_eq!(encode(898 * 99 - 1).unwrap().to_string(), "899-99-0001");
    }

    #[test]
    fn test_index_order_is_not_numeric_order() {
        let second_group: Identifier = "001-02-0001".parse().unwrap();
        let last_area: Identifier = "899-01-0001".parse().unwrap();
        assert!(second_group.index() > last_area.index());
        assert_eq!(Identifier::from_index(second_group.index()), Ok(second_group));
    }

    #[test]
    fn test_round_trip_indices() {
        let samples = [
            0,
            1,
            664,
            665,
            666,
            897,
            898,
            898 * 99 - 1,
            898 * 99,
            123_456_789,
            MAX_INDEX / 2,
            MAX_INDEX - 2,
            MAX_INDEX - 1,
        ];
        for index in samples {
            let id = encode(index).unwrap();
            assert_eq!(decode(&id.to_string()).unwrap(), index, "index {}", index);
        }

        for index in (0..MAX_INDEX).step_by(7_919_993) {
            assert_eq!(encode(index).unwrap().index(), index);
        }
    }

    #[test]
    fn test_round_trip_identifiers() {
        for text in ["001-01-0001", "665-99-9999", "667-01-0001", "899-99-9999", "123-45-6789"] {
            let index = decode(text).unwrap();
            assert_eq!(encode(index).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_block_is_injective() {
        let start = 898 * 99 - 500;
        let ids: std::collections::HashSet<Identifier> =
            (start..start + 1000).map(|i| encode(i).unwrap()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_decode_rejects_out_of_range_groups() {
        for text in [
            "000-01-0001",
            "666-01-0001",
            "900-01-0001",
            "999-01-0001",
            "001-00-0001",
            "001-01-0000",
        ] {
            assert!(
                matches!(decode(text), Err(IdentifierError::ConstraintViolation { .. })),
                "{} should violate a constraint",
                text
            );
        }
        assert_eq!(
            decode("666-01-0001"),
            Err(IdentifierError::ConstraintViolation { segment: Segment::Area, value: 666 })
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let malformed = [
            "",
            "123456789",
            "12-345-6789",
            "123-45-678",
            "123-45-67890",
            "12a-45-6789",
            "123_45_6789",
            " 123-45-6789",
        ];
        for text in malformed {
            assert!(
                matches!(decode(text), Err(IdentifierError::InvalidFormat(_))),
                "{:?} should be malformed",
                text
            );
        }
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(wrap_index(-1), MAX_INDEX - 1);
        assert_eq!(wrap_index(i128::from(MAX_INDEX)), 0);
        let (index, id) = encode_wrapping(-1);
        assert_eq!(index, MAX_INDEX - 1);
        assert_eq!(id, Identifier::LAST);
        assert_eq!(encode_wrapping(665).1, encode(665).unwrap());
    }

    #[test]
    fn test_bytes_match_display() {
        let id: Identifier = "042-07-0815".parse().unwrap();
        assert_eq!(&id.to_bytes(), b"042-07-0815");
        assert!(id.contains("7-08"));
        assert!(!id.contains("999"));
        assert_eq!((id.area(), id.group(), id.serial()), (42, 7, 815));
    }

    #[test]
    fn test_serde_as_string() {
        let id: Identifier = "123-45-6789".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"123-45-6789\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<Identifier>("\"666-45-6789\"").is_err());
    }
}
