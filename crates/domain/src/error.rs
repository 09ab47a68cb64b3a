// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur during domain validation.
///
/// The pricing computations themselves never fail. These errors only arise
/// when configuration entries are built or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The shape family name is not one of the known weight formulas.
    #[error("Unknown shape family: '{0}'")]
    UnknownShapeFamily(String),
    /// The product key is not in the catalog.
    #[error("Unknown product: '{0}'")]
    UnknownProduct(String),
    /// The rule condition name is not recognized.
    #[error("Unknown rule condition: '{0}'")]
    UnknownCondition(String),
    /// The rule operator name is not recognized.
    #[error("Unknown rule operator: '{0}'")]
    UnknownOperator(String),
    /// The adjustment type name is not recognized.
    #[error("Unknown adjustment type: '{0}'")]
    UnknownAdjustmentType(String),
    /// The operator cannot be used with the given condition.
    #[error("Operator '{operator}' is not valid for condition '{condition}'")]
    UnsupportedOperator {
        /// The condition name.
        condition: String,
        /// The operator name.
        operator: String,
    },
    /// A grade rule was given an empty grade value.
    #[error("Grade rules require a non-empty grade value")]
    EmptyGradeValue,
    /// Entry name is empty.
    #[error("Invalid name: {0}")]
    InvalidName(String),
    /// Entry identifier is empty.
    #[error("Invalid id: {0}")]
    InvalidId(String),
    /// Minimum quantity of a bulk discount is negative.
    #[error("Invalid minimum quantity: {value}. Must be zero or greater")]
    InvalidMinQuantity {
        /// The rejected minimum quantity, rendered for display.
        value: String,
    },
    /// Discount percentage is outside `0..=100`.
    #[error("Invalid discount percentage: {value}. Must be between 0 and 100")]
    InvalidDiscountPercentage {
        /// The rejected percentage, rendered for display.
        value: String,
    },
    /// An entry with the same id already exists in the collection.
    #[error("An entry with id '{0}' already exists")]
    DuplicateId(String),
}
