//! Booking price estimator for travel packages.
//!
//! Given a package catalog and the raw values of a booking form, computes
//! nights, a per-unit price, a promo-adjusted total and whether the form
//! may be submitted.

pub mod catalog;
pub mod config;
pub mod error;
pub mod pricing;

pub use catalog::{Catalog, CatalogError};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use pricing::{BookingEstimator, BookingForm, BookingInput, EstimateResult};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging to stderr.
///
/// `RUST_LOG` wins over `default_level`. Can only be called once per process.
pub fn init_tracing(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .init();
}
