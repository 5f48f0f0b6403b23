//! Pricing engine module for the booking page.
//!
//! Computes per-unit prices, totals and validity for travel package
//! bookings. Everything here is pure and synchronous.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod rules;
pub mod services;

// Re-export commonly used items
pub use calculators::{nights_between, parse_date, round_price, PriceCalculator};
pub use models::{DateRange, Season, TravelPackage};
pub use requests::{BookingForm, BookingInput, PackageChoice};
pub use responses::{EstimateResult, EstimateView, PackageOption, PackageRow};
pub use rules::{PromoCodeRule, SeasonPricingRule, WeekendSurchargeRule};
pub use services::{BookingConfirmation, BookingError, BookingEstimator, ValidationIssue};
