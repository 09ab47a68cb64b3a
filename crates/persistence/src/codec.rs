// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON encoding of stored collections.
//!
//! Collections are stored as JSON arrays of flat camelCase records, the same
//! shape earlier browser-stored data used, so existing payloads load as-is.

use crate::error::PersistenceError;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key of the pricing rule collection.
pub const RULES_KEY: &str = "steel-app-pricing-rules";

/// Storage key of the bulk discount collection.
pub const DISCOUNTS_KEY: &str = "steel-app-bulk-discounts";

/// Encodes a collection as a compact JSON array.
///
/// # Errors
///
/// Returns an error if an entry cannot be serialized.
pub fn encode_collection<T: Serialize>(key: &str, items: &[T]) -> Result<String, PersistenceError> {
    serde_json::to_string(items).map_err(|e| PersistenceError::SerializationError {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Encodes a collection as an indented JSON array for files meant to be
/// read by people.
///
/// # Errors
///
/// Returns an error if an entry cannot be serialized.
pub fn encode_collection_pretty<T: Serialize>(
    key: &str,
    items: &[T],
) -> Result<String, PersistenceError> {
    serde_json::to_string_pretty(items).map_err(|e| PersistenceError::SerializationError {
        key: key.to_string(),
        message: e.to_string(),
    })
}

/// Decodes a stored JSON array.
///
/// Entries are decoded leniently: numbers are coerced and a rule whose
/// condition cannot match loads as an inert rule. Only a payload that is
/// not a JSON array of records is rejected.
///
/// # Errors
///
/// Returns an error if the payload is not a valid collection.
pub fn decode_collection<T: DeserializeOwned>(
    key: &str,
    payload: &str,
) -> Result<Vec<T>, PersistenceError> {
    serde_json::from_str(payload).map_err(|e| PersistenceError::SerializationError {
        key: key.to_string(),
        message: e.to_string(),
    })
}
