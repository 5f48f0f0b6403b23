//! Request DTOs for the booking estimator.
//!
//! `BookingForm` carries raw field values exactly as the presentation layer
//! sees them; `BookingInput` is the normalized form the estimator consumes.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::calculators::parse_date;
use super::models::DateRange;
use crate::error::Result;

/// Raw booking form fields
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct BookingForm {
    pub name: String,
    pub check_in: String,
    pub check_out: String,
    pub package_id: String,
    pub promo_code: String,
}

impl BookingForm {
    /// Read a form encoded as a JSON object; missing fields default to empty.
    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Package picked in the form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PackageChoice {
    /// Nothing selected
    #[default]
    Unselected,
    /// A numeric package id
    Id(i64),
    /// Something selected that is not a package id
    Unrecognized(String),
}

impl PackageChoice {
    /// Coerce a raw form value the way a browser turns a select value into a number.
    ///
    /// Accepts integers, integral decimals and exponent forms (`"2.0"`,
    /// `"1e0"`) and unsigned `0x` / `0o` / `0b` literals.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return PackageChoice::Unselected;
        }
        match parse_radix_literal(raw).or_else(|| parse_integral(raw)) {
            Some(id) => PackageChoice::Id(id),
            None => PackageChoice::Unrecognized(raw.to_string()),
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, PackageChoice::Unselected)
    }

    pub fn id(&self) -> Option<i64> {
        match self {
            PackageChoice::Id(id) => Some(*id),
            _ => None,
        }
    }
}

fn parse_radix_literal(raw: &str) -> Option<i64> {
    let (radix, digits) = match raw.get(..2)? {
        "0x" | "0X" => (16, &raw[2..]),
        "0o" | "0O" => (8, &raw[2..]),
        "0b" | "0B" => (2, &raw[2..]),
        _ => return None,
    };
    // from_str_radix tolerates a leading sign; number literals do not
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

fn parse_integral(raw: &str) -> Option<i64> {
    if let Ok(id) = raw.parse::<i64>() {
        return Some(id);
    }
    let value = raw.parse::<f64>().ok()?;
    let in_range = value.abs() < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

/// Normalized booking input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingInput {
    pub name: String,
    pub range: DateRange,
    pub package: PackageChoice,
    pub promo_code: Option<String>,
}

impl BookingInput {
    pub fn new(name: impl Into<String>, range: DateRange, package: PackageChoice) -> Self {
        Self {
            name: name.into(),
            range,
            package,
            promo_code: None,
        }
    }

    pub fn with_promo(mut self, code: impl Into<String>) -> Self {
        self.promo_code = Some(code.into());
        self
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

impl From<&BookingForm> for BookingInput {
    fn from(form: &BookingForm) -> Self {
        let promo = form.promo_code.trim();
        Self {
            name: form.name.clone(),
            range: DateRange::new(parse_date(&form.check_in), parse_date(&form.check_out)),
            package: PackageChoice::parse(&form.package_id),
            promo_code: (!promo.is_empty()).then(|| promo.to_string()),
        }
    }
}

impl From<BookingForm> for BookingInput {
    fn from(form: BookingForm) -> Self {
        Self::from(&form)
    }
}
