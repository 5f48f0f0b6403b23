//! Pricing rules: season factor, weekend surcharge and promo discounts.
//!
//! Each rule is an explicit lookup table with a neutral default. Unknown
//! keys are never an error; they simply leave the price unchanged.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculators::{round_price, saturating_mul};
use super::models::Season;

/// Any closed-open range this long contains both a Saturday and a Sunday.
const FULL_WEEK_DAYS: i64 = 7;

/// Season label to price factor
#[derive(Debug, Clone)]
pub struct SeasonPricingRule {
    factors: HashMap<Season, Decimal>,
    default_factor: Decimal,
}

impl SeasonPricingRule {
    pub fn new(factors: HashMap<Season, Decimal>) -> Self {
        Self {
            factors,
            default_factor: Decimal::ONE,
        }
    }

    /// Factor for a raw season label (case-insensitive)
    pub fn multiplier(&self, season: &str) -> Decimal {
        self.multiplier_for(Season::parse(season))
    }

    pub fn multiplier_for(&self, season: Season) -> Decimal {
        self.factors
            .get(&season)
            .copied()
            .unwrap_or(self.default_factor)
    }
}

impl Default for SeasonPricingRule {
    fn default() -> Self {
        let mut factors = HashMap::new();
        factors.insert(Season::Summer, dec!(1.10));
        factors.insert(Season::Winter, dec!(1.05));
        Self::new(factors)
    }
}

/// Surcharge applied when a stay touches a Saturday or Sunday
#[derive(Debug, Clone)]
pub struct WeekendSurchargeRule {
    surcharge: Decimal,
}

impl WeekendSurchargeRule {
    pub fn new(surcharge: Decimal) -> Self {
        Self { surcharge }
    }

    /// Factor for the stay `[check_in, check_out)`.
    ///
    /// Returns the surcharge as soon as the first weekend day is found and
    /// `1` for absent endpoints or ranges where `check_out <= check_in`.
    pub fn multiplier(&self, check_in: Option<NaiveDate>, check_out: Option<NaiveDate>) -> Decimal {
        let (Some(start), Some(end)) = (check_in, check_out) else {
            return Decimal::ONE;
        };

        let span = end.signed_duration_since(start).num_days().clamp(0, FULL_WEEK_DAYS);
        let touches_weekend = start.iter_days().take(span as usize).any(is_weekend);

        if touches_weekend {
            Decimal::ONE + self.surcharge
        } else {
            Decimal::ONE
        }
    }
}

impl Default for WeekendSurchargeRule {
    fn default() -> Self {
        Self::new(dec!(0.10))
    }
}

fn is_weekend(day: NaiveDate) -> bool {
    matches!(day.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Promo code to discount factor.
///
/// Codes are normalized (trimmed, uppercased) before lookup. Codes are not
/// chained; a single code is applied to the whole total.
#[derive(Debug, Clone)]
pub struct PromoCodeRule {
    discounts: HashMap<String, Decimal>,
}

impl PromoCodeRule {
    pub fn new<I, K>(codes: I) -> Self
    where
        I: IntoIterator<Item = (K, Decimal)>,
        K: AsRef<str>,
    {
        let discounts = codes
            .into_iter()
            .map(|(code, factor)| (normalize_code(code.as_ref()), factor))
            .collect();
        Self { discounts }
    }

    /// Discount factor for a code, if recognized
    pub fn lookup(&self, code: &str) -> Option<Decimal> {
        self.discounts.get(&normalize_code(code)).copied()
    }

    /// Apply the discount for `code` to `total`, rounded to whole units.
    ///
    /// Absent, empty or unrecognized codes return `total` unchanged.
    pub fn apply_discount(&self, total: Decimal, code: Option<&str>) -> Decimal {
        match code.and_then(|c| self.lookup(c)) {
            Some(factor) => round_price(saturating_mul(total, factor)),
            None => total,
        }
    }
}

impl Default for PromoCodeRule {
    fn default() -> Self {
        Self::new([("EARLYBIRD", dec!(0.90)), ("FESTIVE5", dec!(0.95))])
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
