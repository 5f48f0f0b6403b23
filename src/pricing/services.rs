//! Booking estimator service.
//!
//! Orchestrates nights, per-unit price, promo discount and validity for a
//! single input snapshot. Every call recomputes from scratch; nothing is
//! cached between estimates.

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;

use super::calculators::{nights_between, saturating_mul, PriceCalculator};
use super::models::TravelPackage;
use super::requests::{BookingInput, PackageChoice};
use super::responses::{format_money, EstimateResult, PackageOption, PackageRow};
use super::rules::PromoCodeRule;

/// Reason a booking cannot be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationIssue {
    MissingName,
    MissingCheckIn,
    MissingCheckOut,
    NoNights,
    NoPackage,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            ValidationIssue::MissingName => "name is required",
            ValidationIssue::MissingCheckIn => "check-in date is required",
            ValidationIssue::MissingCheckOut => "check-out date is required",
            ValidationIssue::NoNights => "check-out must be after check-in",
            ValidationIssue::NoPackage => "a package must be selected",
        };
        f.write_str(msg)
    }
}

/// Issues preventing submission of `input` with `nights` computed nights.
///
/// An empty list means the booking is valid.
pub fn validation_issues(input: &BookingInput, nights: i64) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    if !input.has_name() {
        issues.push(ValidationIssue::MissingName);
    }
    if input.range.check_in.is_none() {
        issues.push(ValidationIssue::MissingCheckIn);
    }
    if input.range.check_out.is_none() {
        issues.push(ValidationIssue::MissingCheckOut);
    }
    if nights <= 0 {
        issues.push(ValidationIssue::NoNights);
    }
    if !input.package.is_selected() {
        issues.push(ValidationIssue::NoPackage);
    }
    issues
}

/// Accepted booking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookingConfirmation {
    pub guest_name: String,
    pub package_id: i64,
    pub destination: String,
    pub nights: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
}

impl BookingConfirmation {
    pub fn message(&self, currency_symbol: &str) -> String {
        format!(
            "Booking submitted! Estimated total: {}",
            format_money(currency_symbol, self.total)
        )
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum BookingError {
    #[error("Booking is incomplete: {}", join_issues(.issues))]
    Invalid { issues: Vec<ValidationIssue> },
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Computes price estimates against a shared, read-only catalog
#[derive(Debug, Clone)]
pub struct BookingEstimator {
    catalog: Arc<Catalog>,
    calculator: PriceCalculator,
    promos: PromoCodeRule,
}

impl BookingEstimator {
    pub fn new(catalog: Arc<Catalog>, calculator: PriceCalculator, promos: PromoCodeRule) -> Self {
        Self {
            catalog,
            calculator,
            promos,
        }
    }

    /// Estimator with the standard season, weekend and promo tables
    pub fn with_catalog(catalog: Arc<Catalog>) -> Self {
        Self::new(catalog, PriceCalculator::default(), PromoCodeRule::default())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Estimate nights, per-unit price, total and validity.
    ///
    /// Never fails: missing dates, unknown ids and unknown codes all fall
    /// back to neutral values. The priced total counts at least one night
    /// even when the booking itself is invalid.
    pub fn estimate(&self, input: &BookingInput) -> EstimateResult {
        let nights = nights_between(input.range.check_in, input.range.check_out);
        let pkg = self.resolve_package(&input.package);

        let per_unit_price = self.calculator.final_price(pkg, Some(&input.range));
        let raw_total = saturating_mul(per_unit_price, Decimal::from(nights.max(1)));
        let total = self
            .promos
            .apply_discount(raw_total, input.promo_code.as_deref());

        let valid = validation_issues(input, nights).is_empty();

        debug!(
            package_id = pkg.id,
            nights,
            per_unit_price = %per_unit_price,
            total = %total,
            valid,
            "estimate computed"
        );

        EstimateResult {
            nights,
            per_unit_price,
            total,
            valid,
        }
    }

    /// Recompute the estimate and accept the booking if it is valid.
    pub fn submit(&self, input: &BookingInput) -> Result<BookingConfirmation, BookingError> {
        let estimate = self.estimate(input);
        let issues = validation_issues(input, estimate.nights);
        if !issues.is_empty() {
            warn!(?issues, "booking rejected");
            return Err(BookingError::Invalid { issues });
        }

        let pkg = self.resolve_package(&input.package);

        info!(
            package_id = pkg.id,
            nights = estimate.nights,
            total = %estimate.total,
            "booking submitted"
        );

        Ok(BookingConfirmation {
            guest_name: input.name.trim().to_string(),
            package_id: pkg.id,
            destination: pkg.destination.clone(),
            nights: estimate.nights,
            total: estimate.total,
        })
    }

    /// Package table rows with display prices (no date range applied)
    pub fn catalog_rows(&self) -> Vec<PackageRow> {
        self.catalog
            .packages()
            .iter()
            .map(|pkg| PackageRow {
                id: pkg.id,
                destination: pkg.destination.clone(),
                duration_label: format!("{} Days", pkg.duration_days),
                base_price: pkg.base_price,
                season: pkg.season,
                final_price: self.calculator.final_price(pkg, None),
            })
            .collect()
    }

    /// Labels for the package picker, e.g. `Kasauli (4d) - ₹1200`
    pub fn package_options(&self, currency_symbol: &str) -> Vec<PackageOption> {
        self.catalog
            .packages()
            .iter()
            .map(|pkg| PackageOption {
                id: pkg.id,
                label: format!(
                    "{} ({}d) - {}",
                    pkg.destination,
                    pkg.duration_days,
                    format_money(currency_symbol, pkg.base_price)
                ),
            })
            .collect()
    }

    fn resolve_package(&self, choice: &PackageChoice) -> &TravelPackage {
        let id = choice.id();
        let pkg = self.catalog.resolve(id);
        if choice.is_selected() && id != Some(pkg.id) {
            warn!(?choice, fallback_id = pkg.id, "unknown package, using first catalog entry");
        }
        pkg
    }
}

impl Default for BookingEstimator {
    fn default() -> Self {
        Self::with_catalog(Arc::new(Catalog::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::{DateRange, Season};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(name: &str, range: DateRange, package: PackageChoice) -> BookingInput {
        BookingInput::new(name, range, package)
    }

    fn summer_estimator() -> BookingEstimator {
        let catalog = Catalog::new(vec![TravelPackage::new(
            10,
            "Test Valley",
            3,
            dec!(1200),
            Season::Summer,
        )])
        .unwrap();
        BookingEstimator::with_catalog(Arc::new(catalog))
    }

    // ==================== estimate tests ====================

    #[test]
    fn test_estimate_two_weekday_nights() {
        let estimator = summer_estimator();
        let input = booking(
            "Asha",
            DateRange::between(date(2024, 1, 8), date(2024, 1, 10)),
            PackageChoice::Id(10),
        );

        let result = estimator.estimate(&input);
        assert_eq!(result.nights, 2);
        assert_eq!(result.per_unit_price, dec!(1320));
        assert_eq!(result.total, dec!(2640));
        assert!(result.valid);
    }

    #[test]
    fn test_estimate_weekend_night_with_promo() {
        let estimator = summer_estimator();
        let input = booking(
            "Asha",
            DateRange::between(date(2024, 1, 6), date(2024, 1, 7)),
            PackageChoice::Id(10),
        )
        .with_promo("FESTIVE5");

        let result = estimator.estimate(&input);
        assert_eq!(result.nights, 1);
        assert_eq!(result.per_unit_price, dec!(1452));
        assert_eq!(result.total, dec!(1379));
        assert!(result.valid);
    }

    #[test]
    fn test_estimate_empty_name_invalid() {
        let estimator = summer_estimator();
        let input = booking(
            "",
            DateRange::between(date(2024, 1, 8), date(2024, 1, 10)),
            PackageChoice::Id(10),
        );

        let result = estimator.estimate(&input);
        assert!(!result.valid);
        assert_eq!(result.total, dec!(2640));
    }

    #[test]
    fn test_estimate_zero_nights_still_priced() {
        let estimator = summer_estimator();
        let same_day = booking(
            "Asha",
            DateRange::between(date(2024, 1, 8), date(2024, 1, 8)),
            PackageChoice::Id(10),
        );

        let result = estimator.estimate(&same_day);
        assert_eq!(result.nights, 0);
        assert!(!result.valid);
        assert_eq!(result.total, dec!(1320));

        let no_dates = booking("Asha", DateRange::default(), PackageChoice::Id(10));
        let result = estimator.estimate(&no_dates);
        assert_eq!(result.nights, 0);
        assert!(!result.valid);
        assert_eq!(result.total, dec!(1320));
    }

    #[test]
    fn test_estimate_inverted_range() {
        let estimator = summer_estimator();
        let input = booking(
            "Asha",
            DateRange::between(date(2024, 1, 7), date(2024, 1, 6)),
            PackageChoice::Id(10),
        );

        let result = estimator.estimate(&input);
        assert_eq!(result.nights, 0);
        // No weekend surcharge for an inverted range
        assert_eq!(result.per_unit_price, dec!(1320));
        assert!(!result.valid);
    }

    #[test]
    fn test_estimate_unknown_package_falls_back() {
        let estimator = BookingEstimator::default();
        let range = DateRange::between(date(2024, 1, 8), date(2024, 1, 9));

        let result = estimator.estimate(&booking("Asha", range, PackageChoice::Id(99)));
        assert_eq!(result.per_unit_price, dec!(1320));
        assert!(result.valid);

        let unrecognized = PackageChoice::Unrecognized("beach".to_string());
        let result = estimator.estimate(&booking("Asha", range, unrecognized));
        assert_eq!(result.per_unit_price, dec!(1320));
        assert!(result.valid);
    }

    #[test]
    fn test_estimate_unselected_package_invalid() {
        let estimator = BookingEstimator::default();
        let range = DateRange::between(date(2024, 1, 8), date(2024, 1, 9));

        let result = estimator.estimate(&booking("Asha", range, PackageChoice::Unselected));
        assert!(!result.valid);
        assert_eq!(result.total, dec!(1320));
    }

    #[test]
    fn test_estimate_earlybird_winter() {
        let estimator = BookingEstimator::default();
        // Mon -> Thu, three weekday nights at 5000 * 1.05
        let input = booking(
            "Asha",
            DateRange::between(date(2024, 1, 8), date(2024, 1, 11)),
            PackageChoice::Id(2),
        )
        .with_promo(" earlybird ");

        let result = estimator.estimate(&input);
        assert_eq!(result.per_unit_price, dec!(5250));
        assert_eq!(result.total, dec!(14175));
    }

    #[test]
    fn test_estimate_extreme_range_does_not_overflow() {
        let catalog = Catalog::new(vec![TravelPackage::new(
            1,
            "Far Away",
            3,
            Decimal::from_i128_with_scale(10_i128.pow(23), 0),
            Season::Summer,
        )])
        .unwrap();
        let estimator = BookingEstimator::with_catalog(Arc::new(catalog));
        let input = booking(
            "Asha",
            DateRange::between(date(1, 1, 1), date(9999, 12, 31)),
            PackageChoice::Id(1),
        );

        let result = estimator.estimate(&input);
        assert_eq!(result.nights, 3_652_058);
        assert_eq!(
            result.per_unit_price,
            Decimal::from_i128_with_scale(121 * 10_i128.pow(21), 0)
        );
        assert_eq!(result.total, Decimal::MAX);
        assert!(result.valid);

        let discounted = estimator.estimate(&input.with_promo("FESTIVE5"));
        assert!(discounted.total < Decimal::MAX);
    }

    #[test]
    fn test_estimate_is_stateless() {
        let estimator = BookingEstimator::default();
        let input = booking(
            "Asha",
            DateRange::between(date(2024, 1, 6), date(2024, 1, 8)),
            PackageChoice::Id(3),
        );
        assert_eq!(estimator.estimate(&input), estimator.estimate(&input));
    }

    // ==================== submit tests ====================

    #[test]
    fn test_submit_valid_booking() {
        let estimator = BookingEstimator::default();
        let input = booking(
            "  Asha ",
            DateRange::between(date(2024, 1, 8), date(2024, 1, 10)),
            PackageChoice::Id(1),
        );

        let confirmation = estimator.submit(&input).unwrap();
        assert_eq!(confirmation.guest_name, "Asha");
        assert_eq!(confirmation.destination, "Kasauli");
        assert_eq!(confirmation.nights, 2);
        assert_eq!(confirmation.total, dec!(2640));
        assert_eq!(
            confirmation.message("₹"),
            "Booking submitted! Estimated total: ₹2640"
        );
    }

    #[test]
    fn test_submit_reports_issues() {
        let estimator = BookingEstimator::default();
        let input = booking("", DateRange::default(), PackageChoice::Unselected);

        let BookingError::Invalid { issues } = estimator.submit(&input).unwrap_err();
        assert_eq!(
            issues,
            vec![
                ValidationIssue::MissingName,
                ValidationIssue::MissingCheckIn,
                ValidationIssue::MissingCheckOut,
                ValidationIssue::NoNights,
                ValidationIssue::NoPackage,
            ]
        );
    }

    #[test]
    fn test_booking_error_display() {
        let err = BookingError::Invalid {
            issues: vec![ValidationIssue::MissingName, ValidationIssue::NoNights],
        };
        let msg = err.to_string();
        assert!(msg.contains("name is required"));
        assert!(msg.contains("check-out must be after check-in"));
    }

    // ==================== catalog display tests ====================

    #[test]
    fn test_catalog_rows_use_season_only() {
        let rows = BookingEstimator::default().catalog_rows();
        let finals: Vec<_> = rows.iter().map(|r| r.final_price).collect();
        assert_eq!(finals, vec![dec!(1320), dec!(5250), dec!(4100)]);
        assert_eq!(rows[0].duration_label, "4 Days");
        assert_eq!(rows[2].season, Season::Spring);
    }

    #[test]
    fn test_package_options_labels() {
        let options = BookingEstimator::default().package_options("₹");
        assert_eq!(options[0].label, "Kasauli (4d) - ₹1200");
        assert_eq!(options[1].id, 2);
    }
}
