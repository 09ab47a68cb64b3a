// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bulk_discount::{DiscountDraft, validate_tier};
use crate::error::DomainError;
use crate::pricing_rule::{Condition, RuleDraft};

/// Validates the user-supplied fields of a new pricing rule.
///
/// Numeric values are expected to have been coerced already; this
/// function only enforces constraints that coercion cannot fix.
///
/// # Arguments
///
/// * `draft` - The rule draft to validate
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The condition is inert
/// - A grade condition has an empty grade
pub fn validate_rule_draft(draft: &RuleDraft) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if draft.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Rule name cannot be empty",
        )));
    }

    // Rule: new rules must carry a comparison that can match
    if let Condition::Inert(inert) = &draft.condition {
        return Err(DomainError::UnsupportedOperator {
            condition: inert.condition.clone(),
            operator: inert.operator.clone(),
        });
    }

    // Rule: grade conditions need a grade to compare with
    if let Condition::Grade(grade) = &draft.condition
        && grade.trim().is_empty()
    {
        return Err(DomainError::EmptyGradeValue);
    }

    Ok(())
}

/// Validates the user-supplied fields of a new bulk discount.
///
/// # Arguments
///
/// * `draft` - The discount draft to validate
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The minimum quantity is negative
/// - The percentage is outside `0..=100`
pub fn validate_discount_draft(draft: &DiscountDraft) -> Result<(), DomainError> {
    // Rule: name must not be empty
    if draft.name.trim().is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Discount name cannot be empty",
        )));
    }

    validate_tier(draft.min_quantity, draft.discount_percentage)
}

/// Validates that `new_id` is non-empty and not already used.
///
/// # Arguments
///
/// * `new_id` - The identifier about to be inserted
/// * `existing_ids` - Identifiers already present in the collection
///
/// # Errors
///
/// Returns an error if the id is empty or already present.
pub fn validate_id_unique<'a, I>(new_id: &str, existing_ids: I) -> Result<(), DomainError>
where
    I: IntoIterator<Item = &'a str>,
{
    if new_id.trim().is_empty() {
        return Err(DomainError::InvalidId(String::from("Id cannot be empty")));
    }

    // Rule: ids are unique within a collection
    if existing_ids.into_iter().any(|id| id == new_id) {
        return Err(DomainError::DuplicateId(new_id.to_string()));
    }

    Ok(())
}
