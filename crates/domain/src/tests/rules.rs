// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::assert_close;
use crate::{
    Adjustment, AdjustmentType, Condition, LooseValue, PricingRule, QuantityTest, RuleContext,
    RuleOutcome, Threshold, apply_rules, default_rules, rule_applies,
};

fn rule(id: &str, condition: Condition, adjustment: Adjustment) -> PricingRule {
    PricingRule {
        id: id.to_string(),
        name: format!("Rule {id}"),
        condition,
        adjustment,
        active: true,
    }
}

fn context(quantity: f64, total_weight: f64, grade: &str) -> RuleContext {
    RuleContext {
        quantity,
        total_weight,
        selected_grade: grade.to_string(),
    }
}

#[test]
fn test_quantity_greater_than_is_strict() {
    let high_volume: PricingRule = rule(
        "1",
        Condition::Quantity(QuantityTest::GreaterThan(1000.0)),
        Adjustment::Percentage(-5.0),
    );
    assert!(!rule_applies(&high_volume, &context(1000.0, 0.0, "ms"), 0.0));
    assert!(rule_applies(&high_volume, &context(1001.0, 0.0, "ms"), 0.0));
}

#[test]
fn test_quantity_equals() {
    let exact: PricingRule = rule(
        "1",
        Condition::Quantity(QuantityTest::Equals(12.0)),
        Adjustment::Fixed(10.0),
    );
    assert!(rule_applies(&exact, &context(12.0, 0.0, "ms"), 0.0));
    assert!(!rule_applies(&exact, &context(13.0, 0.0, "ms"), 0.0));
}

#[test]
fn test_grade_condition_compares_exactly() {
    let premium: PricingRule = rule(
        "2",
        Condition::Grade(String::from("ss316")),
        Adjustment::Percentage(10.0),
    );
    assert!(rule_applies(&premium, &context(1.0, 1.0, "ss316"), 0.0));
    assert!(!rule_applies(&premium, &context(1.0, 1.0, "SS316"), 0.0));
    assert!(!rule_applies(&premium, &context(1.0, 1.0, "ss304"), 0.0));
}

#[test]
fn test_weight_condition_uses_total_weight() {
    let heavy: PricingRule = rule(
        "1",
        Condition::Weight(Threshold::GreaterThan(500.0)),
        Adjustment::Fixed(-100.0),
    );
    assert!(rule_applies(&heavy, &context(1.0, 600.0, "ms"), 0.0));
    assert!(!rule_applies(&heavy, &context(1.0, 500.0, "ms"), 0.0));
}

#[test]
fn test_seeded_rules_on_small_order() {
    // 10 kg of ss316 at 220/kg: surcharge first, then the small order fee.
    let outcome: RuleOutcome = apply_rules(2200.0, &context(1.0, 10.0, "ss316"), &default_rules());

    assert_eq!(outcome.adjustments.len(), 2);
    assert_eq!(outcome.adjustments[0].name, "Premium Grade Surcharge");
    assert_close(outcome.adjustments[0].amount, 220.0, 1e-9);
    assert_eq!(outcome.adjustments[0].kind, AdjustmentType::Percentage);
    assert_eq!(outcome.adjustments[1].name, "Small Order Fee");
    assert_close(outcome.adjustments[1].amount, 500.0, 1e-9);
    assert_eq!(outcome.adjustments[1].kind, AdjustmentType::Fixed);
    assert_close(outcome.subtotal, 2920.0, 1e-9);
}

#[test]
fn test_total_rule_sees_running_subtotal() {
    // Seed 4900: the first rule lifts the subtotal past 5000, so the
    // second rule no longer matches.
    let rules: Vec<PricingRule> = vec![
        rule(
            "a",
            Condition::Total(Threshold::LessThan(5000.0)),
            Adjustment::Fixed(200.0),
        ),
        rule(
            "b",
            Condition::Total(Threshold::LessThan(5000.0)),
            Adjustment::Fixed(300.0),
        ),
    ];
    let outcome: RuleOutcome = apply_rules(4900.0, &context(1.0, 1.0, "ms"), &rules);
    assert_eq!(outcome.adjustments.len(), 1);
    assert_close(outcome.subtotal, 5100.0, 1e-9);
}

#[test]
fn test_rule_order_changes_result() {
    // Seed 4900 sits between the two thresholds. Whichever rule runs first
    // decides whether the other one still matches.
    let small_order_fee: PricingRule = rule(
        "a",
        Condition::Total(Threshold::LessThan(5000.0)),
        Adjustment::Fixed(600.0),
    );
    let large_order_discount: PricingRule = rule(
        "b",
        Condition::Total(Threshold::GreaterThan(5000.0)),
        Adjustment::Percentage(-10.0),
    );
    let ctx: RuleContext = context(1.0, 1.0, "ms");

    let fee_first: RuleOutcome = apply_rules(
        4900.0,
        &ctx,
        &[small_order_fee.clone(), large_order_discount.clone()],
    );
    let discount_first: RuleOutcome =
        apply_rules(4900.0, &ctx, &[large_order_discount, small_order_fee]);

    let fee_first_names: Vec<&str> = fee_first
        .adjustments
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    let discount_first_names: Vec<&str> = discount_first
        .adjustments
        .iter()
        .map(|a| a.name.as_str())
        .collect();

    assert_eq!(fee_first_names, vec!["Rule a", "Rule b"]);
    assert_eq!(discount_first_names, vec!["Rule a"]);
    assert_ne!(fee_first_names, discount_first_names);
    assert_close(fee_first.subtotal, 4950.0, 1e-9);
    assert_close(discount_first.subtotal, 5500.0, 1e-9);
}

#[test]
fn test_inert_rule_never_applies() {
    let broken: PricingRule = rule(
        "x",
        Condition::from_record_parts("grade", "greater_than", &LooseValue::from("ms")),
        Adjustment::Fixed(1000.0),
    );
    assert!(matches!(broken.condition, Condition::Inert(_)));
    assert!(!rule_applies(&broken, &context(5000.0, 5000.0, "ms"), 5000.0));

    let outcome: RuleOutcome = apply_rules(100.0, &context(1.0, 1.0, "ms"), &[broken]);
    assert!(outcome.adjustments.is_empty());
    assert_close(outcome.subtotal, 100.0, 1e-9);
}

#[test]
fn test_inactive_rules_are_skipped() {
    let mut fee: PricingRule = rule(
        "a",
        Condition::Total(Threshold::LessThan(5000.0)),
        Adjustment::Fixed(500.0),
    );
    fee.active = false;
    let outcome: RuleOutcome = apply_rules(100.0, &context(1.0, 1.0, "ms"), &[fee]);
    assert!(outcome.adjustments.is_empty());
    assert_close(outcome.subtotal, 100.0, 1e-9);
}

#[test]
fn test_empty_rule_set_returns_seed() {
    let outcome: RuleOutcome = apply_rules(123.0, &context(1.0, 1.0, "ms"), &[]);
    assert!(outcome.adjustments.is_empty());
    assert_close(outcome.subtotal, 123.0, 1e-9);
}

#[test]
fn test_condition_display() {
    let condition: Condition = Condition::Quantity(QuantityTest::GreaterThan(1000.0));
    assert_eq!(condition.to_string(), "quantity greater than 1000");
    assert_eq!(Adjustment::Percentage(10.0).to_string(), "+10%");
    assert_eq!(Adjustment::Percentage(-5.0).to_string(), "-5%");
}
