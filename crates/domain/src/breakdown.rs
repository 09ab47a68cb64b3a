// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Price breakdown orchestration.
//!
//! Stages run in a fixed order, each feeding the next:
//!
//! 1. `base_amount = total_weight * base_price`
//! 2. Pricing rules, seeded with `base_amount`
//! 3. Bulk discount on the rule-adjusted subtotal
//! 4. `price_per_kg = total / total_weight` (zero when weight is zero)

use crate::bulk_discount::{BulkDiscount, DiscountSelection, select_discount};
use crate::numeric::{finite_or_zero, non_negative};
use crate::pricing_rule::PricingRule;
use crate::rule_evaluator::{AppliedAdjustment, RuleContext, RuleOutcome, apply_rules};
use crate::types::Dimensions;
use serde::{Deserialize, Serialize};

/// The full computed result for one set of quote inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Price per kilogram before adjustments.
    pub base_price: f64,
    /// `total_weight * base_price`.
    pub base_amount: f64,
    /// Rule adjustments in the order they were applied.
    pub adjustments: Vec<AppliedAdjustment>,
    /// Amount removed by the bulk discount.
    pub bulk_discount: f64,
    /// The bulk discount tier that applied, if any.
    pub applied_discount: Option<BulkDiscount>,
    /// Amount after rules and discount.
    pub subtotal: f64,
    /// Final amount; equal to `subtotal`.
    pub total: f64,
    /// Effective price per kilogram.
    pub price_per_kg: f64,
}

/// Computes a price breakdown.
///
/// Non-finite inputs are treated as zero and a negative weight is treated
/// as zero. This function never fails.
///
/// # Arguments
///
/// * `base_price` - Price per kilogram for the selected product and grade
/// * `total_weight` - Total weight in kilograms
/// * `dimensions` - The quote dimensions (supplies the piece count)
/// * `selected_grade` - The selected material grade
/// * `rules` - Pricing rules in stored order
/// * `discounts` - Bulk discount tiers in stored order
#[must_use]
pub fn compute_breakdown(
    base_price: f64,
    total_weight: f64,
    dimensions: &Dimensions,
    selected_grade: &str,
    rules: &[PricingRule],
    discounts: &[BulkDiscount],
) -> PriceBreakdown {
    let base_price: f64 = finite_or_zero(base_price);
    let total_weight: f64 = non_negative(total_weight);
    let base_amount: f64 = total_weight * base_price;

    let context: RuleContext = RuleContext {
        quantity: finite_or_zero(dimensions.quantity),
        total_weight,
        selected_grade: selected_grade.to_string(),
    };
    let outcome: RuleOutcome = apply_rules(base_amount, &context, rules);

    let selection: DiscountSelection = select_discount(outcome.subtotal, total_weight, discounts);
    let subtotal: f64 = outcome.subtotal - selection.amount;

    let price_per_kg: f64 = if total_weight > 0.0 {
        subtotal / total_weight
    } else {
        0.0
    };

    PriceBreakdown {
        base_price,
        base_amount,
        adjustments: outcome.adjustments,
        bulk_discount: selection.amount,
        applied_discount: selection.applied,
        subtotal,
        total: subtotal,
        price_per_kg,
    }
}
