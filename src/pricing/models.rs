//! Domain models for the booking estimator.
//!
//! Packages are immutable once the catalog is built; date ranges are
//! constructed fresh for every estimate.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Season tag attached to a travel package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Summer,
    Winter,
    Spring,
    Autumn,
    Unknown,
}

impl Season {
    /// Parse a season label, ignoring case and surrounding whitespace.
    ///
    /// Unrecognized labels (including the empty string) map to `Season::Unknown`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "summer" => Season::Summer,
            "winter" => Season::Winter,
            "spring" => Season::Spring,
            "autumn" | "fall" => Season::Autumn,
            _ => Season::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Autumn => "Autumn",
            Season::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A purchasable travel itinerary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPackage {
    pub id: i64,
    pub destination: String,
    pub duration_days: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    pub season: Season,
}

impl TravelPackage {
    pub fn new(
        id: i64,
        destination: impl Into<String>,
        duration_days: u32,
        base_price: Decimal,
        season: Season,
    ) -> Self {
        Self {
            id,
            destination: destination.into(),
            duration_days,
            base_price,
            season,
        }
    }
}

/// Stay range with an exclusive check-out day.
///
/// Either endpoint may be absent; a range is only usable when both are
/// present and check-out falls strictly after check-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    /// Range with both endpoints present
    pub fn between(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self::new(Some(check_in), Some(check_out))
    }

    /// Both endpoints, if the range is well-formed (`check_out > check_in`)
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.check_in, self.check_out) {
            (Some(start), Some(end)) if end > start => Some((start, end)),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.bounds().is_some()
    }
}
