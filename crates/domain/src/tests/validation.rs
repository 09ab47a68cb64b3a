// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Condition, DiscountDraft, DomainError, LooseValue, RuleDraft, validate_discount_draft,
    validate_id_unique, validate_rule_draft, validate_tier,
};

#[test]
fn test_validate_rule_draft_accepts_named_rule() {
    let draft: RuleDraft = RuleDraft {
        name: String::from("Rush fee"),
        ..RuleDraft::default()
    };
    assert!(validate_rule_draft(&draft).is_ok());
}

#[test]
fn test_validate_rule_draft_rejects_blank_name() {
    let draft: RuleDraft = RuleDraft {
        name: String::from("   "),
        ..RuleDraft::default()
    };
    assert!(matches!(
        validate_rule_draft(&draft),
        Err(DomainError::InvalidName(_))
    ));
}

#[test]
fn test_validate_rule_draft_rejects_empty_grade() {
    let draft: RuleDraft = RuleDraft {
        name: String::from("Grade"),
        condition: Condition::Grade(String::new()),
        ..RuleDraft::default()
    };
    assert_eq!(
        validate_rule_draft(&draft),
        Err(DomainError::EmptyGradeValue)
    );
}

#[test]
fn test_validate_rule_draft_rejects_inert_condition() {
    let draft: RuleDraft = RuleDraft {
        name: String::from("Broken"),
        condition: Condition::from_record_parts("weight", "equals", &LooseValue::Number(10.0)),
        ..RuleDraft::default()
    };
    assert_eq!(
        validate_rule_draft(&draft),
        Err(DomainError::UnsupportedOperator {
            condition: String::from("weight"),
            operator: String::from("equals"),
        })
    );
}

#[test]
fn test_validate_discount_draft() {
    let mut draft: DiscountDraft = DiscountDraft {
        name: String::from("Trade"),
        min_quantity: 500.0,
        discount_percentage: 2.0,
        active: true,
    };
    assert!(validate_discount_draft(&draft).is_ok());

    draft.min_quantity = -1.0;
    assert!(matches!(
        validate_discount_draft(&draft),
        Err(DomainError::InvalidMinQuantity { .. })
    ));

    draft.min_quantity = 0.0;
    draft.discount_percentage = 100.5;
    assert!(matches!(
        validate_discount_draft(&draft),
        Err(DomainError::InvalidDiscountPercentage { .. })
    ));
}

#[test]
fn test_validate_tier_bounds_are_inclusive() {
    assert!(validate_tier(0.0, 0.0).is_ok());
    assert!(validate_tier(0.0, 100.0).is_ok());
    assert!(validate_tier(f64::INFINITY, 5.0).is_err());
    assert!(validate_tier(10.0, f64::NAN).is_err());
}

#[test]
fn test_validate_id_unique() {
    let existing: Vec<&str> = vec!["1", "2"];
    assert!(validate_id_unique("3", existing.iter().copied()).is_ok());
    assert_eq!(
        validate_id_unique("2", existing.iter().copied()),
        Err(DomainError::DuplicateId(String::from("2")))
    );
    assert!(matches!(
        validate_id_unique("", existing.iter().copied()),
        Err(DomainError::InvalidId(_))
    ));
}
