// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use steelcalc::RepositoryError;
use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    DatabaseError(String),
    /// Database connection failed.
    #[error("Database connection failed: {0}")]
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),
    /// A stored collection could not be encoded or decoded.
    #[error("Serialization error in '{key}': {message}")]
    SerializationError {
        /// The collection key.
        key: String,
        /// The serializer message.
        message: String,
    },
    /// Initialization error.
    #[error("Initialization error: {0}")]
    InitializationError(String),
    /// A file could not be read or written.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<PersistenceError> for RepositoryError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::SerializationError { key, message } => {
                Self::Corrupt { key, message }
            }
            other => Self::Unavailable(other.to_string()),
        }
    }
}
