// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Static product catalog.
//!
//! Each product maps to a shape family, the grades it is sold in and the
//! per-kilogram base price of each grade.

use crate::error::DomainError;
use crate::types::{DimensionField, ShapeFamily};

/// Base price per kilogram used when a grade has no catalog price.
pub const FALLBACK_BASE_PRICE: f64 = 50.0;

/// A grade a product is sold in, with its base price per kilogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradePrice {
    /// Grade code (e.g. `fe500`, `ss304`).
    pub grade: &'static str,
    /// Base price per kilogram.
    pub price_per_kg: f64,
}

/// A catalog product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    /// Stable lookup key.
    pub key: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Weight formula family.
    pub shape: ShapeFamily,
    /// Grades in display order; the first one is the default.
    pub grades: &'static [GradePrice],
}

const fn grade(grade: &'static str, price_per_kg: f64) -> GradePrice {
    GradePrice {
        grade,
        price_per_kg,
    }
}

static PRODUCTS: [Product; 8] = [
    Product {
        key: "rebar",
        name: "TMT Rebar",
        shape: ShapeFamily::Circular,
        grades: &[grade("fe415", 48.0), grade("fe500", 52.0), grade("fe550", 55.0)],
    },
    Product {
        key: "structural",
        name: "Structural Steel",
        shape: ShapeFamily::Rectangular,
        grades: &[grade("ms", 55.0), grade("ss304", 180.0), grade("ss316", 220.0)],
    },
    Product {
        key: "sheet",
        name: "Steel Sheet",
        shape: ShapeFamily::Sheet,
        grades: &[grade("ms", 62.0), grade("galvanized", 75.0), grade("ss304", 190.0)],
    },
    Product {
        key: "pipe",
        name: "Steel Pipe",
        shape: ShapeFamily::Pipe,
        grades: &[grade("ms", 58.0), grade("galvanized", 70.0), grade("ss304", 185.0)],
    },
    Product {
        key: "angle",
        name: "Steel Angle",
        shape: ShapeFamily::Angle,
        grades: &[grade("ms", 55.0), grade("galvanized", 68.0)],
    },
    Product {
        key: "round",
        name: "Round Bar",
        shape: ShapeFamily::Circular,
        grades: &[grade("ms", 53.0), grade("ss304", 175.0)],
    },
    Product {
        key: "flat",
        name: "Flat Bar",
        shape: ShapeFamily::Rectangular,
        grades: &[grade("ms", 54.0), grade("ss304", 178.0)],
    },
    Product {
        key: "wire",
        name: "Steel Wire",
        shape: ShapeFamily::Circular,
        grades: &[grade("ms", 60.0), grade("galvanized", 72.0)],
    },
];

impl Product {
    /// Returns the base price per kilogram for `grade`.
    ///
    /// Grades the product is not sold in fall back to
    /// [`FALLBACK_BASE_PRICE`].
    #[must_use]
    pub fn base_price(&self, grade: &str) -> f64 {
        self.grades
            .iter()
            .find(|g| g.grade == grade)
            .map_or(FALLBACK_BASE_PRICE, |g| g.price_per_kg)
    }

    /// Returns the grade a session switches to when this product is chosen.
    #[must_use]
    pub fn default_grade(&self) -> &'static str {
        self.grades.first().map_or("", |g| g.grade)
    }

    /// Returns whether the product is sold in `grade`.
    #[must_use]
    pub fn offers_grade(&self, grade: &str) -> bool {
        self.grades.iter().any(|g| g.grade == grade)
    }

    /// Returns the dimension fields the form shows for this product.
    #[must_use]
    pub const fn dimension_fields(&self) -> &'static [DimensionField] {
        self.shape.required_fields()
    }
}

/// Returns every catalog product in display order.
#[must_use]
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// Looks up a product by key.
///
/// # Errors
///
/// Returns an error if no product has the given key.
pub fn find_product(key: &str) -> Result<&'static Product, DomainError> {
    PRODUCTS
        .iter()
        .find(|p| p.key == key)
        .ok_or_else(|| DomainError::UnknownProduct(key.to_string()))
}

/// Returns the product a new calculator session starts with.
#[must_use]
pub fn default_product() -> &'static Product {
    &PRODUCTS[0]
}
