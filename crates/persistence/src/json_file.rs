// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A repository that keeps each collection in its own JSON file.

use crate::codec::{DISCOUNTS_KEY, RULES_KEY, decode_collection, encode_collection_pretty};
use crate::error::PersistenceError;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use steelcalc::{DiscountRepository, RepositoryError, RuleRepository};
use steelcalc_domain::{BulkDiscount, PricingRule};
use tracing::debug;

/// File-backed repository rooted at a directory.
///
/// Collections are written to `<dir>/<key>.json`. A write goes to a
/// temporary sibling first and is renamed into place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    /// Creates a repository rooted at `dir`. The directory is created on
    /// first write.
    #[must_use]
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Returns the file a collection is stored in.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn load_collection<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<Vec<T>>, PersistenceError> {
        let path: PathBuf = self.path_for(key);
        if !path.exists() {
            debug!(path = %path.display(), "No stored collection file");
            return Ok(None);
        }

        let payload: String = fs::read_to_string(&path)?;
        decode_collection(key, &payload).map(Some)
    }

    fn save_collection<T: Serialize>(
        &self,
        key: &str,
        items: &[T],
    ) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;

        let payload: String = encode_collection_pretty(key, items)?;
        let path: PathBuf = self.path_for(key);
        let staging: PathBuf = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&staging, payload)?;
        fs::rename(&staging, &path)?;

        debug!(path = %path.display(), entries = items.len(), "Wrote collection file");
        Ok(())
    }
}

impl RuleRepository for JsonFileRepository {
    fn load_rules(&mut self) -> Result<Option<Vec<PricingRule>>, RepositoryError> {
        Ok(self.load_collection(RULES_KEY)?)
    }

    fn save_rules(&mut self, rules: &[PricingRule]) -> Result<(), RepositoryError> {
        Ok(self.save_collection(RULES_KEY, rules)?)
    }
}

impl DiscountRepository for JsonFileRepository {
    fn load_discounts(&mut self) -> Result<Option<Vec<BulkDiscount>>, RepositoryError> {
        Ok(self.load_collection(DISCOUNTS_KEY)?)
    }

    fn save_discounts(&mut self, discounts: &[BulkDiscount]) -> Result<(), RepositoryError> {
        Ok(self.save_collection(DISCOUNTS_KEY, discounts)?)
    }
}
