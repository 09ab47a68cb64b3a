// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_test_discount_draft, create_test_rule_draft};
use crate::{Collection, Command, CoreError, PricingConfig, TransitionResult, apply};
use steelcalc_domain::{Condition, DomainError, RuleDraft};

#[test]
fn test_add_rule_appends_to_end() {
    let config: PricingConfig = PricingConfig::seeded();
    let result: TransitionResult = apply(
        &config,
        Command::AddRule {
            id: String::from("new"),
            draft: create_test_rule_draft("Heavy order credit"),
        },
    )
    .unwrap();

    assert_eq!(result.changed, Collection::Rules);
    assert_eq!(result.entry_id, "new");
    assert_eq!(result.new_config.rules.len(), 4);
    assert_eq!(result.new_config.rules[3].id, "new");
    assert_eq!(result.new_config.rules[3].name, "Heavy order credit");
    assert_eq!(result.new_config.discounts, config.discounts);
}

#[test]
fn test_apply_does_not_modify_input() {
    let config: PricingConfig = PricingConfig::seeded();
    let before: PricingConfig = config.clone();
    let _ = apply(
        &config,
        Command::ToggleRule {
            id: String::from("1"),
        },
    )
    .unwrap();
    assert_eq!(config, before);
}

#[test]
fn test_add_rule_rejects_blank_name() {
    let config: PricingConfig = PricingConfig::seeded();
    let result: Result<TransitionResult, CoreError> = apply(
        &config,
        Command::AddRule {
            id: String::from("new"),
            draft: RuleDraft::default(),
        },
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::InvalidName(_)))
    ));
}

#[test]
fn test_add_rule_rejects_empty_grade() {
    let config: PricingConfig = PricingConfig::seeded();
    let draft: RuleDraft = RuleDraft {
        name: String::from("Grade"),
        condition: Condition::Grade(String::from(" ")),
        ..RuleDraft::default()
    };
    let result: Result<TransitionResult, CoreError> = apply(
        &config,
        Command::AddRule {
            id: String::from("new"),
            draft,
        },
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::EmptyGradeValue))
    );
}

#[test]
fn test_add_rule_rejects_duplicate_id() {
    let config: PricingConfig = PricingConfig::seeded();
    let result: Result<TransitionResult, CoreError> = apply(
        &config,
        Command::AddRule {
            id: String::from("2"),
            draft: create_test_rule_draft("Copy"),
        },
    );
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::DuplicateId(
            String::from("2")
        )))
    );
}

#[test]
fn test_toggle_rule_flips_only_target() {
    let config: PricingConfig = PricingConfig::seeded();
    let result: TransitionResult = apply(
        &config,
        Command::ToggleRule {
            id: String::from("2"),
        },
    )
    .unwrap();

    assert!(result.new_config.rules[0].active);
    assert!(!result.new_config.rules[1].active);
    assert!(result.new_config.rules[2].active);

    let again: TransitionResult = apply(
        &result.new_config,
        Command::ToggleRule {
            id: String::from("2"),
        },
    )
    .unwrap();
    assert_eq!(again.new_config, config);
}

#[test]
fn test_toggle_unknown_rule_is_not_found() {
    let result: Result<TransitionResult, CoreError> = apply(
        &PricingConfig::seeded(),
        Command::ToggleRule {
            id: String::from("missing"),
        },
    );
    assert_eq!(
        result,
        Err(CoreError::EntryNotFound {
            collection: Collection::Rules,
            id: String::from("missing"),
        })
    );
}

#[test]
fn test_delete_rule_preserves_order() {
    let result: TransitionResult = apply(
        &PricingConfig::seeded(),
        Command::DeleteRule {
            id: String::from("2"),
        },
    )
    .unwrap();
    let ids: Vec<&str> = result
        .new_config
        .rules
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_add_discount_validates_percentage() {
    let result: Result<TransitionResult, CoreError> = apply(
        &PricingConfig::seeded(),
        Command::AddDiscount {
            id: String::from("new"),
            draft: create_test_discount_draft("Too much", 100.0, 101.0),
        },
    );
    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::InvalidDiscountPercentage { .. }
        ))
    ));
}

#[test]
fn test_add_discount_appends() {
    let result: TransitionResult = apply(
        &PricingConfig::seeded(),
        Command::AddDiscount {
            id: String::from("new"),
            draft: create_test_discount_draft("Trade", 1000.0, 1.5),
        },
    )
    .unwrap();
    assert_eq!(result.changed, Collection::Discounts);
    assert_eq!(result.new_config.discounts.len(), 5);
    assert_eq!(result.new_config.discounts[4].discount_percentage, 1.5);
}

#[test]
fn test_toggle_and_delete_discount() {
    let toggled: TransitionResult = apply(
        &PricingConfig::seeded(),
        Command::ToggleDiscount {
            id: String::from("4"),
        },
    )
    .unwrap();
    assert!(!toggled.new_config.discounts[3].active);

    let deleted: TransitionResult = apply(
        &toggled.new_config,
        Command::DeleteDiscount {
            id: String::from("1"),
        },
    )
    .unwrap();
    assert_eq!(deleted.new_config.discounts.len(), 3);
    assert_eq!(deleted.new_config.discounts[0].id, "2");
}

#[test]
fn test_delete_unknown_discount_is_not_found() {
    let result: Result<TransitionResult, CoreError> = apply(
        &PricingConfig::seeded(),
        Command::DeleteDiscount {
            id: String::from("99"),
        },
    );
    assert!(matches!(
        result,
        Err(CoreError::EntryNotFound {
            collection: Collection::Discounts,
            ..
        })
    ));
}

#[test]
fn test_entry_not_found_display() {
    let err: CoreError = CoreError::EntryNotFound {
        collection: Collection::Discounts,
        id: String::from("99"),
    };
    assert_eq!(err.to_string(), "No bulk discount with id '99'");
}
