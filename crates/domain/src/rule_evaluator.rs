// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Sequential evaluation of pricing rules.
//!
//! ## Evaluation Order (Authoritative)
//!
//! - Inactive rules are skipped
//! - Active rules run in collection order, never sorted
//! - Each rule sees the running subtotal produced by the rules before it
//! - A matching rule's amount is added to the running subtotal immediately
//!
//! Reordering rules can therefore change both which rules match (for
//! `Total` conditions) and the size of percentage adjustments.

use crate::numeric::finite_or_zero;
use crate::pricing_rule::{AdjustmentType, Condition, PricingRule};
use serde::{Deserialize, Serialize};

/// Per-quote facts that rule conditions are evaluated against.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleContext {
    /// Number of pieces.
    pub quantity: f64,
    /// Total weight in kilograms.
    pub total_weight: f64,
    /// Selected material grade.
    pub selected_grade: String,
}

/// A rule adjustment that was applied, as shown in a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedAdjustment {
    /// Name of the rule that produced the adjustment.
    pub name: String,
    /// Signed amount added to the subtotal.
    pub amount: f64,
    /// Whether the amount came from a percentage or a fixed value.
    #[serde(rename = "type")]
    pub kind: AdjustmentType,
}

/// The outcome of evaluating a rule collection.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    /// The subtotal after every matching rule has been applied.
    pub subtotal: f64,
    /// The applied adjustments in evaluation order.
    pub adjustments: Vec<AppliedAdjustment>,
}

/// Returns whether `rule`'s condition holds for the given context and
/// running subtotal.
#[must_use]
pub fn rule_applies(rule: &PricingRule, context: &RuleContext, running_subtotal: f64) -> bool {
    match &rule.condition {
        Condition::Quantity(test) => test.matches(context.quantity),
        Condition::Weight(threshold) => threshold.matches(context.total_weight),
        Condition::Total(threshold) => threshold.matches(running_subtotal),
        Condition::Grade(grade) => *grade == context.selected_grade,
        Condition::Inert(_) => false,
    }
}

/// Applies active rules to `subtotal_seed` in collection order.
///
/// # Arguments
///
/// * `subtotal_seed` - The starting amount (base amount of the quote)
/// * `context` - Quantity, weight and grade of the quote
/// * `rules` - The full rule collection in stored order
///
/// # Returns
///
/// The adjusted subtotal and the list of adjustments that applied.
#[must_use]
pub fn apply_rules(
    subtotal_seed: f64,
    context: &RuleContext,
    rules: &[PricingRule],
) -> RuleOutcome {
    let mut subtotal: f64 = finite_or_zero(subtotal_seed);
    let mut adjustments: Vec<AppliedAdjustment> = Vec::new();

    for rule in rules.iter().filter(|rule| rule.active) {
        if !rule_applies(rule, context, subtotal) {
            continue;
        }

        let amount: f64 = finite_or_zero(rule.adjustment.amount_for(subtotal));
        adjustments.push(AppliedAdjustment {
            name: rule.name.clone(),
            amount,
            kind: rule.adjustment.kind(),
        });
        subtotal += amount;
    }

    RuleOutcome {
        subtotal,
        adjustments,
    }
}
