//! Region annotation for an identifier's area number
//!
//! Demonstration data only; the table reflects the historic allocation of
//! area numbers and is not authoritative.

use std::fmt;

/// Region an area number was allocated to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Named(&'static str),
    /// Areas 729-999 were never allocated
    NotInUse,
    Unknown,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Named(name) => f.write_str(name),
            Region::NotInUse => f.write_str("Not in use"),
            Region::Unknown => f.write_str("Unknown"),
        }
    }
}

/// Inclusive area ranges and their region
const AREA_TABLE: &[(u16, u16, &str)] = &[
    (1, 3, "New Hampshire"),
    (4, 7, "Maine"),
    (8, 9, "Vermont"),
    (10, 34, "Massachusetts"),
    (35, 39, "Rhode Island"),
    (40, 49, "Connecticut"),
    (50, 134, "New York"),
    (135, 158, "New Jersey"),
    (159, 211, "Pennsylvania"),
    (212, 220, "Maryland"),
    (221, 222, "Delaware"),
    (223, 231, "Virginia"),
    (232, 232, "North Carolina/West Virginia"),
    (233, 236, "West Virginia"),
    (237, 246, "North Carolina"),
    (247, 251, "South Carolina"),
    (252, 260, "Georgia"),
    (261, 267, "Florida"),
    (268, 302, "Ohio"),
    (303, 317, "Indiana"),
    (318, 361, "Illinois"),
    (362, 386, "Michigan"),
    (387, 399, "Wisconsin"),
    (400, 407, "Kentucky"),
    (408, 415, "Tennessee"),
    (416, 424, "Alabama"),
    (425, 428, "Mississippi"),
    (429, 432, "Arkansas"),
    (433, 439, "Louisiana"),
    (440, 448, "Oklahoma"),
    (449, 467, "Texas"),
    (468, 477, "Minnesota"),
    (478, 485, "Iowa"),
    (486, 500, "Missouri"),
    (501, 502, "North Dakota"),
    (503, 504, "South Dakota"),
    (505, 508, "Nebraska"),
    (509, 515, "Kansas"),
    (516, 517, "Montana"),
    (518, 519, "Idaho"),
    (520, 520, "Wyoming"),
    (521, 524, "Colorado"),
    (525, 525, "New Mexico"),
    (526, 527, "Arizona"),
    (528, 529, "Utah"),
    (530, 530, "Nevada"),
    (531, 539, "Washington"),
    (540, 544, "Oregon"),
    (545, 573, "California"),
    (574, 574, "Alaska"),
    (575, 576, "Hawaii"),
    (577, 579, "District of Columbia"),
    (580, 580, "Virgin Islands"),
    (581, 584, "Puerto Rico"),
    (585, 585, "New Mexico"),
    (586, 586, "Pacific Territories"),
    (587, 588, "Mississippi"),
    (589, 595, "Florida"),
    (600, 601, "Arizona"),
    (602, 626, "California"),
    (700, 728, "Railroad Retirement"),
];

/// Look up the region for an area number
pub fn region_for_area(area: u16) -> Region {
    if (729..=999).contains(&area) {
        return Region::NotInUse;
    }

    AREA_TABLE
        .iter()
        .find(|(start, end, _)| (*start..=*end).contains(&area))
        .map(|(_, _, name)| Region::Named(*name))
        .unwrap_or(Region::Unknown)
}
