//! The viewership record, one CSV row.

use serde::Deserialize;
use std::fmt;

/// Viewer gender as recorded in the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Gender {
    /// Male viewers.
    Male,
    /// Female viewers.
    Female,
}

impl Gender {
    /// Get the display name.
    pub fn name(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// Parse from the dataset's string form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of the viewership table.
///
/// Field names map onto the CSV header (Countries, Sports, Gender,
/// Viewership, Visits). The table is immutable after load; records are only
/// ever read.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ViewershipRecord {
    /// Country name, as spelled in the dataset.
    #[serde(rename = "Countries")]
    pub country: String,
    /// Sport name.
    #[serde(rename = "Sports")]
    pub sport: String,
    /// Viewer gender.
    #[serde(rename = "Gender")]
    pub gender: Gender,
    /// Viewership count for this (country, sport, gender) row.
    #[serde(rename = "Viewership")]
    pub viewership: u64,
    /// Site-visit count for this row.
    #[serde(rename = "Visits")]
    pub visits: u64,
}
