// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::diesel_schema::stored_collections;
use diesel::prelude::*;

/// A stored collection row.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable)]
#[diesel(table_name = stored_collections)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StoredCollectionRow {
    pub collection_key: String,
    pub payload_json: String,
    pub updated_at: String,
}

/// Insertable form of a stored collection row.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = stored_collections)]
pub struct NewStoredCollection<'a> {
    pub collection_key: &'a str,
    pub payload_json: &'a str,
    pub updated_at: &'a str,
}
