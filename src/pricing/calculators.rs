//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state.

use chrono::NaiveDate;
use rust_decimal::prelude::*;

use super::models::{DateRange, TravelPackage};
use super::rules::{SeasonPricingRule, WeekendSurchargeRule};

/// Date format accepted from booking forms
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Round to whole currency units, halves rounding up.
///
/// Prices are never negative, so rounding away from zero matches the
/// familiar "round half up" behaviour.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use booking_estimator::pricing::round_price;
///
/// assert_eq!(round_price(dec!(1379.4)), dec!(1379));
/// assert_eq!(round_price(dec!(1225.5)), dec!(1226));
/// assert_eq!(round_price(dec!(1320.0)), dec!(1320));
/// ```
pub fn round_price(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Multiply two amounts, clamping to `Decimal::MAX` instead of overflowing.
///
/// Factors and prices are never negative, so the upper bound is the only
/// one that can be hit.
pub fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::MAX)
}

/// Parse a `YYYY-MM-DD` date; empty or malformed input is treated as absent.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

/// Whole nights between check-in and check-out.
///
/// Zero when either date is absent or check-out does not fall after check-in.
pub fn nights_between(check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> i64 {
    match (check_in, check_out) {
        (Some(start), Some(end)) => end.signed_duration_since(start).num_days().max(0),
        _ => 0,
    }
}

/// Composes base price with season and weekend factors.
#[derive(Debug, Clone, Default)]
pub struct PriceCalculator {
    season: SeasonPricingRule,
    weekend: WeekendSurchargeRule,
}

impl PriceCalculator {
    pub fn new(season: SeasonPricingRule, weekend: WeekendSurchargeRule) -> Self {
        Self { season, weekend }
    }

    /// Per-unit price for `pkg`, rounded to whole units.
    ///
    /// Without a range (catalog display) the weekend factor is always `1`.
    pub fn final_price(&self, pkg: &TravelPackage, range: Option<&DateRange>) -> Decimal {
        let season_factor = self.season.multiplier_for(pkg.season);
        let weekend_factor = range
            .map(|r| self.weekend.multiplier(r.check_in, r.check_out))
            .unwrap_or(Decimal::ONE);

        round_price(saturating_mul(
            saturating_mul(pkg.base_price, season_factor),
            weekend_factor,
        ))
    }
}
