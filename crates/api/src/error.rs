// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use steelcalc::{CoreError, RepositoryError};
use steelcalc_domain::DomainError;
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

fn invalid(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::UnknownShapeFamily(_) => invalid("shape", &err),
        DomainError::UnknownProduct(_) => invalid("product", &err),
        DomainError::UnknownCondition(_) => invalid("condition", &err),
        DomainError::UnknownOperator(_) | DomainError::UnsupportedOperator { .. } => {
            invalid("operator", &err)
        }
        DomainError::UnknownAdjustmentType(_) => invalid("adjustmentType", &err),
        DomainError::EmptyGradeValue => invalid("value", &err),
        DomainError::InvalidName(msg) => ApiError::InvalidInput {
            field: String::from("name"),
            message: msg.clone(),
        },
        DomainError::InvalidId(msg) => ApiError::InvalidInput {
            field: String::from("id"),
            message: msg.clone(),
        },
        DomainError::InvalidMinQuantity { .. } => invalid("minQuantity", &err),
        DomainError::InvalidDiscountPercentage { .. } => invalid("discountPercentage", &err),
        DomainError::DuplicateId(_) => ApiError::DomainRuleViolation {
            rule: String::from("unique_id"),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::EntryNotFound { collection, id } => ApiError::ResourceNotFound {
            resource_type: capitalize(collection.entry_name()),
            message: format!("No {collection} with id '{id}'"),
        },
        CoreError::Repository(repo_err) => translate_repository_error(&repo_err),
    }
}

fn translate_repository_error(err: &RepositoryError) -> ApiError {
    ApiError::Internal {
        message: format!("Failed to access pricing configuration: {err}"),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
