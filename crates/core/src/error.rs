// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Collection;
use steelcalc_domain::DomainError;
use thiserror::Error;

/// Errors reported by a rule or discount repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store could not be read or written.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    /// A stored collection could not be decoded.
    #[error("Stored collection '{key}' is corrupt: {message}")]
    Corrupt {
        /// The collection key.
        key: String,
        /// The decoding failure.
        message: String,
    },
}

/// Errors that can occur during configuration transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// No entry with the given id exists.
    #[error("No {collection} with id '{id}'")]
    EntryNotFound {
        /// The collection that was searched.
        collection: Collection,
        /// The id that was not found.
        id: String,
    },
    /// The repository failed to load or save a collection.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
