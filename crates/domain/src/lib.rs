// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod breakdown;
mod bulk_discount;
mod catalog;
mod defaults;
mod error;
mod numeric;
mod pricing_rule;
mod rule_evaluator;
mod types;
mod validation;
mod weight;

#[cfg(test)]
mod tests;

pub use breakdown::{PriceBreakdown, compute_breakdown};
pub use bulk_discount::{
    BulkDiscount, BulkDiscountRecord, DiscountDraft, DiscountSelection, best_tier,
    select_discount, validate_tier,
};
pub use catalog::{
    FALLBACK_BASE_PRICE, GradePrice, Product, default_product, find_product, products,
};
pub use defaults::{default_discounts, default_rules};
pub use error::DomainError;
pub use numeric::{LooseValue, finite_or_zero, non_negative, number_or_zero, parse_or_zero};
pub use pricing_rule::{
    Adjustment, AdjustmentType, Condition, ConditionKind, Operator, PricingRule,
    InertCondition, PricingRuleRecord, QuantityTest, RuleDraft, Threshold,
};
pub use rule_evaluator::{AppliedAdjustment, RuleContext, RuleOutcome, apply_rules, rule_applies};
pub use types::{DimensionField, Dimensions, ShapeFamily};
pub use validation::{validate_discount_draft, validate_id_unique, validate_rule_draft};
pub use weight::{STEEL_DENSITY_KG_PER_M3, compute_weight, compute_weight_by_name, unit_volume_m3};
