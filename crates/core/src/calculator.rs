// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The interactive quoting session.
//!
//! A [`Calculator`] holds the ephemeral inputs of one quote: the product,
//! the grade, the dimensions and the material density. Nothing is derived
//! until [`Calculator::recompute`] is called.

use crate::error::CoreError;
use crate::state::PricingConfig;
use serde::Serialize;
use steelcalc_domain::{
    DimensionField, Dimensions, PriceBreakdown, Product, STEEL_DENSITY_KG_PER_M3,
    compute_breakdown, compute_weight, default_product, find_product,
};

/// A computed quote for the current session inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// The product key.
    pub product: String,
    /// The selected grade.
    pub grade: String,
    /// The dimensions the quote was computed from.
    pub dimensions: Dimensions,
    /// Total weight in kilograms.
    pub total_weight: f64,
    /// The price breakdown.
    pub breakdown: PriceBreakdown,
}

/// Session state for one quote.
#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    product: &'static Product,
    grade: String,
    dimensions: Dimensions,
    density_kg_per_m3: f64,
}

impl Calculator {
    /// Creates a session with the default product, its first grade and the
    /// default dimensions.
    #[must_use]
    pub fn new() -> Self {
        let product: &'static Product = default_product();
        Self {
            product,
            grade: product.default_grade().to_string(),
            dimensions: Dimensions::session_defaults(),
            density_kg_per_m3: STEEL_DENSITY_KG_PER_M3,
        }
    }

    /// Overrides the material density.
    #[must_use]
    pub const fn with_density(mut self, density_kg_per_m3: f64) -> Self {
        self.density_kg_per_m3 = density_kg_per_m3;
        self
    }

    /// Returns the selected product.
    #[must_use]
    pub const fn product(&self) -> &'static Product {
        self.product
    }

    /// Returns the selected grade.
    #[must_use]
    pub fn grade(&self) -> &str {
        &self.grade
    }

    /// Returns the current dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    /// Returns the material density in kg/m³.
    #[must_use]
    pub const fn density(&self) -> f64 {
        self.density_kg_per_m3
    }

    /// Switches to the product with `key`.
    ///
    /// The grade resets to the new product's first grade. Dimensions are
    /// kept.
    ///
    /// # Errors
    ///
    /// Returns an error if the product key is not in the catalog.
    pub fn select_product(&mut self, key: &str) -> Result<(), CoreError> {
        let product: &'static Product = find_product(key)?;
        self.product = product;
        self.grade = product.default_grade().to_string();
        Ok(())
    }

    /// Selects a grade.
    ///
    /// Any grade may be chosen; grades the product is not sold in are
    /// priced at the fallback base price.
    pub fn select_grade(&mut self, grade: &str) {
        self.grade = grade.to_string();
    }

    /// Sets or clears one dimension field.
    pub const fn set_dimension(&mut self, field: DimensionField, value: Option<f64>) {
        self.dimensions.set_field(field, value);
    }

    /// Sets the piece count.
    pub const fn set_quantity(&mut self, quantity: f64) {
        self.dimensions.quantity = quantity;
    }

    /// Replaces all dimensions at once.
    pub const fn set_dimensions(&mut self, dimensions: Dimensions) {
        self.dimensions = dimensions;
    }

    /// Returns the base price per kilogram for the current selection.
    #[must_use]
    pub fn base_price(&self) -> f64 {
        self.product.base_price(&self.grade)
    }

    /// Returns the total weight for the current inputs.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        compute_weight(self.product.shape, &self.dimensions, self.density_kg_per_m3)
    }

    /// Derives the weight and price breakdown from the current inputs.
    #[must_use]
    pub fn recompute(&self, config: &PricingConfig) -> Quote {
        let total_weight: f64 = self.total_weight();
        let breakdown: PriceBreakdown = compute_breakdown(
            self.base_price(),
            total_weight,
            &self.dimensions,
            &self.grade,
            &config.rules,
            &config.discounts,
        );

        Quote {
            product: self.product.key.to_string(),
            grade: self.grade.clone(),
            dimensions: self.dimensions,
            total_weight,
            breakdown,
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}
