// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stored collection queries.

use crate::data_models::StoredCollectionRow;
use crate::diesel_schema::stored_collections;
use crate::error::PersistenceError;
use diesel::SqliteConnection;
use diesel::prelude::*;

/// Query a stored collection by key.
///
/// Returns `None` if the collection has never been written.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_collection(
    conn: &mut SqliteConnection,
    key: &str,
) -> Result<Option<StoredCollectionRow>, PersistenceError> {
    stored_collections::table
        .filter(stored_collections::collection_key.eq(key))
        .select(StoredCollectionRow::as_select())
        .first::<StoredCollectionRow>(conn)
        .optional()
        .map_err(|e| PersistenceError::QueryFailed(format!("get_collection: {e}")))
}

/// List the keys of every stored collection in key order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_collection_keys(conn: &mut SqliteConnection) -> Result<Vec<String>, PersistenceError> {
    stored_collections::table
        .select(stored_collections::collection_key)
        .order(stored_collections::collection_key.asc())
        .load::<String>(conn)
        .map_err(|e| PersistenceError::QueryFailed(format!("list_collection_keys: {e}")))
}
