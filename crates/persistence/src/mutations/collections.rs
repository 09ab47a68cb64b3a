// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stored collection mutations.
//!
//! A collection is always written whole, replacing whatever was stored
//! under its key.

use crate::data_models::NewStoredCollection;
use crate::diesel_schema::stored_collections;
use crate::error::PersistenceError;
use diesel::SqliteConnection;
use diesel::prelude::*;

/// Insert or replace the payload stored under `key`.
///
/// # Errors
///
/// Returns an error if the database write fails.
pub fn upsert_collection(
    conn: &mut SqliteConnection,
    key: &str,
    payload_json: &str,
    updated_at: &str,
) -> Result<(), PersistenceError> {
    let record: NewStoredCollection<'_> = NewStoredCollection {
        collection_key: key,
        payload_json,
        updated_at,
    };

    diesel::insert_into(stored_collections::table)
        .values(&record)
        .on_conflict(stored_collections::collection_key)
        .do_update()
        .set(&record)
        .execute(conn)?;
    Ok(())
}
