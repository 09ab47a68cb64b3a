// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk discount tiers and tier selection.
//!
//! ## Selection Rules
//!
//! A tier qualifies when it is active, its numbers are within range, and
//! its `min_quantity` (kilograms) does not exceed the total weight. Among
//! qualifying tiers exactly one is applied:
//!
//! 1. Highest `discount_percentage` wins
//! 2. Tie Breaker 1: highest `min_quantity` wins
//! 3. Tie Breaker 2: earliest position in the collection wins
//!
//! Tiers never stack. The discount is applied to the subtotal after all
//! pricing rules have run.

use crate::error::DomainError;
use crate::numeric::{LooseValue, finite_or_zero, non_negative};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A weight-tiered percentage discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "BulkDiscountRecord", into = "BulkDiscountRecord")]
pub struct BulkDiscount {
    /// Unique identifier within the collection.
    pub id: String,
    /// Display name (e.g. "10+ tonnes").
    pub name: String,
    /// Minimum total weight in kilograms for the tier to qualify.
    pub min_quantity: f64,
    /// Discount percentage in `0..=100`.
    pub discount_percentage: f64,
    /// Whether the tier takes part in selection.
    pub active: bool,
}

impl BulkDiscount {
    /// Creates a tier from a draft and a freshly assigned id.
    #[must_use]
    pub fn from_draft(id: String, draft: DiscountDraft) -> Self {
        Self {
            id,
            name: draft.name,
            min_quantity: draft.min_quantity,
            discount_percentage: draft.discount_percentage,
            active: draft.active,
        }
    }

    /// Returns whether the tier's numbers are within their allowed ranges.
    ///
    /// Stored tiers are loaded as written, so an out-of-range tier can
    /// exist in a collection. It is listed and editable but never applied.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate_tier(self.min_quantity, self.discount_percentage).is_ok()
    }

    /// Returns whether this tier qualifies for `total_weight`.
    #[must_use]
    pub fn qualifies(&self, total_weight: f64) -> bool {
        self.active && self.is_valid() && self.min_quantity <= total_weight
    }
}

/// The user-supplied parts of a new bulk discount, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountDraft {
    /// Display name.
    pub name: String,
    /// Minimum total weight in kilograms.
    pub min_quantity: f64,
    /// Discount percentage in `0..=100`.
    pub discount_percentage: f64,
    /// Whether the tier takes part in selection.
    pub active: bool,
}

impl Default for DiscountDraft {
    /// The blank template the add-discount form opens with.
    fn default() -> Self {
        Self {
            name: String::new(),
            min_quantity: 0.0,
            discount_percentage: 0.0,
            active: true,
        }
    }
}

/// Validates the numeric constraints of a tier.
///
/// # Errors
///
/// Returns an error if:
/// - `min_quantity` is negative or not finite
/// - `discount_percentage` is outside `0..=100`
pub fn validate_tier(min_quantity: f64, discount_percentage: f64) -> Result<(), DomainError> {
    if !min_quantity.is_finite() || min_quantity < 0.0 {
        return Err(DomainError::InvalidMinQuantity {
            value: min_quantity.to_string(),
        });
    }
    if !(0.0..=100.0).contains(&discount_percentage) {
        return Err(DomainError::InvalidDiscountPercentage {
            value: discount_percentage.to_string(),
        });
    }
    Ok(())
}

/// Flat, stored form of a [`BulkDiscount`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDiscountRecord {
    pub id: String,
    pub name: String,
    pub min_quantity: LooseValue,
    pub discount_percentage: LooseValue,
    pub active: bool,
}

impl From<BulkDiscountRecord> for BulkDiscount {
    /// Reads a stored record. Numbers are coerced (`null` and non-numeric
    /// text become `0`) and ranges are not checked here.
    fn from(record: BulkDiscountRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            min_quantity: record.min_quantity.to_number(),
            discount_percentage: record.discount_percentage.to_number(),
            active: record.active,
        }
    }
}

impl From<BulkDiscount> for BulkDiscountRecord {
    fn from(discount: BulkDiscount) -> Self {
        Self {
            id: discount.id,
            name: discount.name,
            min_quantity: LooseValue::Number(discount.min_quantity),
            discount_percentage: LooseValue::Number(discount.discount_percentage),
            active: discount.active,
        }
    }
}

/// The outcome of bulk discount selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountSelection {
    /// Amount subtracted from the subtotal (`0.0` when nothing applied).
    pub amount: f64,
    /// The tier that was applied, if any.
    pub applied: Option<BulkDiscount>,
}

/// Picks the single best qualifying tier for `total_weight`.
///
/// # Arguments
///
/// * `total_weight` - Total weight in kilograms
/// * `discounts` - The tier collection in stored order
///
/// # Returns
///
/// The winning tier, or `None` if no active tier qualifies.
#[must_use]
pub fn best_tier(total_weight: f64, discounts: &[BulkDiscount]) -> Option<&BulkDiscount> {
    let total_weight: f64 = non_negative(total_weight);
    let mut best: Option<&BulkDiscount> = None;

    for candidate in discounts.iter().filter(|d| d.qualifies(total_weight)) {
        best = match best {
            None => Some(candidate),
            Some(current) => {
                let ordering: Ordering = candidate
                    .discount_percentage
                    .total_cmp(&current.discount_percentage)
                    .then_with(|| candidate.min_quantity.total_cmp(&current.min_quantity));
                // Equal candidates keep the earlier tier.
                if ordering == Ordering::Greater {
                    Some(candidate)
                } else {
                    Some(current)
                }
            }
        };
    }

    best
}

/// Selects and prices the bulk discount for a rule-adjusted subtotal.
///
/// # Arguments
///
/// * `subtotal` - The subtotal after all pricing rules
/// * `total_weight` - Total weight in kilograms
/// * `discounts` - The tier collection in stored order
#[must_use]
pub fn select_discount(
    subtotal: f64,
    total_weight: f64,
    discounts: &[BulkDiscount],
) -> DiscountSelection {
    best_tier(total_weight, discounts).map_or(
        DiscountSelection {
            amount: 0.0,
            applied: None,
        },
        |tier| DiscountSelection {
            amount: finite_or_zero(subtotal) * (tier.discount_percentage / 100.0),
            applied: Some(tier.clone()),
        },
    )
}
