//! Immutable travel package catalog
//!
//! Built once at startup and shared read-only (behind an `Arc`) by every
//! estimate. Construction validates the table so lookups never fail.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pricing::models::{Season, TravelPackage};

/// Validated, non-empty list of travel packages
#[derive(Debug, Clone)]
pub struct Catalog {
    packages: Vec<TravelPackage>,
}

impl Catalog {
    /// Build a catalog from a package list.
    ///
    /// The list must be non-empty, ids must be unique, and every package
    /// needs a positive duration and base price.
    pub fn new(packages: Vec<TravelPackage>) -> Result<Self, CatalogError> {
        if packages.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(packages.len());
        for pkg in &packages {
            if !seen.insert(pkg.id) {
                return Err(CatalogError::DuplicateId(pkg.id));
            }
            if pkg.duration_days == 0 {
                return Err(CatalogError::InvalidDuration { id: pkg.id });
            }
            if pkg.base_price <= Decimal::ZERO {
                return Err(CatalogError::InvalidBasePrice {
                    id: pkg.id,
                    base_price: pkg.base_price,
                });
            }
        }

        Ok(Self { packages })
    }

    /// The embedded package table shown on the booking page
    pub fn builtin() -> Self {
        Self {
            packages: vec![
                TravelPackage::new(1, "Kasauli", 4, dec!(1200), Season::Summer),
                TravelPackage::new(2, "Chakrata", 3, dec!(5000), Season::Winter),
                TravelPackage::new(3, "Amritsar", 2, dec!(4100), Season::Spring),
            ],
        }
    }

    pub fn get(&self, id: i64) -> Option<&TravelPackage> {
        self.packages.iter().find(|p| p.id == id)
    }

    /// Package for `id`, falling back to the first entry when absent or unmatched
    pub fn resolve(&self, id: Option<i64>) -> &TravelPackage {
        id.and_then(|id| self.get(id)).unwrap_or_else(|| self.first())
    }

    pub fn first(&self) -> &TravelPackage {
        // Non-empty by construction
        &self.packages[0]
    }

    pub fn packages(&self) -> &[TravelPackage] {
        &self.packages
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog must contain at least one package")]
    Empty,

    #[error("Duplicate package id: {0}")]
    DuplicateId(i64),

    #[error("Package {id} must last at least one day")]
    InvalidDuration { id: i64 },

    #[error("Package {id} has non-positive base price {base_price}")]
    InvalidBasePrice { id: i64, base_price: Decimal },
}
