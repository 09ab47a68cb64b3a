// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the steel price calculator.
//!
//! Two repositories implement the store's repository traits:
//!
//! - [`Persistence`] keeps each collection as one row of a `SQLite`
//!   key-value table, built on Diesel with embedded migrations
//! - [`JsonFileRepository`] keeps each collection in its own JSON file
//!
//! Both store a collection under a fixed key ([`RULES_KEY`],
//! [`DISCOUNTS_KEY`]) as a JSON array of flat records.
//!
//! ## Testing Philosophy
//!
//! - Tests run against isolated in-memory `SQLite` databases
//! - File-backed tests use temporary directories

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use diesel::SqliteConnection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use steelcalc::{DiscountRepository, RepositoryError, RuleRepository};
use steelcalc_domain::{BulkDiscount, PricingRule};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tracing::debug;

mod backend;
mod codec;
mod data_models;
mod diesel_schema;
mod error;
mod json_file;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use backend::sqlite::MIGRATIONS;
pub use codec::{
    DISCOUNTS_KEY, RULES_KEY, decode_collection, encode_collection, encode_collection_pretty,
};
pub use data_models::StoredCollectionRow;
pub use error::PersistenceError;
pub use json_file::JsonFileRepository;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` persistence adapter for the pricing configuration.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// so instances never see each other's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let shared_memory_url: String =
            format!("file:steelcalc_mem_{db_id}?mode=memory&cache=shared");

        let conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str: &str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InitializationError("Invalid database path".to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;

        // Enable WAL mode for better read concurrency
        backend::sqlite::enable_wal_mode(&mut conn)?;

        Ok(Self { conn })
    }

    /// Returns the raw JSON payload stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn load_payload(&mut self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(queries::get_collection(&mut self.conn, key)?.map(|row| row.payload_json))
    }

    /// Returns the full stored row for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn load_row(&mut self, key: &str) -> Result<Option<StoredCollectionRow>, PersistenceError> {
        queries::get_collection(&mut self.conn, key)
    }

    /// Replaces the raw JSON payload stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_payload(&mut self, key: &str, payload_json: &str) -> Result<(), PersistenceError> {
        let updated_at: String = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| PersistenceError::DatabaseError(format!("timestamp: {e}")))?;
        mutations::upsert_collection(&mut self.conn, key, payload_json, &updated_at)
    }

    /// Lists the keys of all stored collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn collection_keys(&mut self) -> Result<Vec<String>, PersistenceError> {
        queries::list_collection_keys(&mut self.conn)
    }

    fn load_collection<T: DeserializeOwned>(
        &mut self,
        key: &str,
    ) -> Result<Option<Vec<T>>, PersistenceError> {
        match self.load_payload(key)? {
            Some(payload) => decode_collection(key, &payload).map(Some),
            None => {
                debug!(key, "No stored collection");
                Ok(None)
            }
        }
    }

    fn save_collection<T: Serialize>(
        &mut self,
        key: &str,
        items: &[T],
    ) -> Result<(), PersistenceError> {
        let payload: String = encode_collection(key, items)?;
        self.save_payload(key, &payload)?;
        debug!(key, entries = items.len(), "Stored collection");
        Ok(())
    }
}

impl RuleRepository for Persistence {
    fn load_rules(&mut self) -> Result<Option<Vec<PricingRule>>, RepositoryError> {
        Ok(self.load_collection(RULES_KEY)?)
    }

    fn save_rules(&mut self, rules: &[PricingRule]) -> Result<(), RepositoryError> {
        Ok(self.save_collection(RULES_KEY, rules)?)
    }
}

impl DiscountRepository for Persistence {
    fn load_discounts(&mut self) -> Result<Option<Vec<BulkDiscount>>, RepositoryError> {
        Ok(self.load_collection(DISCOUNTS_KEY)?)
    }

    fn save_discounts(&mut self, discounts: &[BulkDiscount]) -> Result<(), RepositoryError> {
        Ok(self.save_collection(DISCOUNTS_KEY, discounts)?)
    }
}
