// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage seams for the pricing configuration.
//!
//! A repository stores each collection as a whole. `load_*` returns
//! `Ok(None)` when nothing has ever been saved, which is the signal to seed
//! defaults. An empty collection that was saved deliberately is returned as
//! `Ok(Some(vec![]))` and is never reseeded.

use crate::error::RepositoryError;
use steelcalc_domain::{BulkDiscount, PricingRule};

/// Storage for the pricing rule collection.
pub trait RuleRepository {
    /// Loads the stored rules, or `None` if none were ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the stored data is
    /// invalid.
    fn load_rules(&mut self) -> Result<Option<Vec<PricingRule>>, RepositoryError>;

    /// Replaces the stored rules with `rules`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save_rules(&mut self, rules: &[PricingRule]) -> Result<(), RepositoryError>;
}

/// Storage for the bulk discount collection.
pub trait DiscountRepository {
    /// Loads the stored tiers, or `None` if none were ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or the stored data is
    /// invalid.
    fn load_discounts(&mut self) -> Result<Option<Vec<BulkDiscount>>, RepositoryError>;

    /// Replaces the stored tiers with `discounts`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn save_discounts(&mut self, discounts: &[BulkDiscount]) -> Result<(), RepositoryError>;
}

/// A repository that keeps both collections in process memory.
///
/// Used for tests and for sessions that should not outlive the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryRepository {
    rules: Option<Vec<PricingRule>>,
    discounts: Option<Vec<BulkDiscount>>,
    saves: usize,
}

impl InMemoryRepository {
    /// Creates an empty repository with nothing saved.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: None,
            discounts: None,
            saves: 0,
        }
    }

    /// Creates a repository that already holds the given collections.
    #[must_use]
    pub const fn with_collections(rules: Vec<PricingRule>, discounts: Vec<BulkDiscount>) -> Self {
        Self {
            rules: Some(rules),
            discounts: Some(discounts),
            saves: 0,
        }
    }

    /// Returns how many times either collection has been saved.
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.saves
    }
}

impl RuleRepository for InMemoryRepository {
    fn load_rules(&mut self) -> Result<Option<Vec<PricingRule>>, RepositoryError> {
        Ok(self.rules.clone())
    }

    fn save_rules(&mut self, rules: &[PricingRule]) -> Result<(), RepositoryError> {
        self.rules = Some(rules.to_vec());
        self.saves += 1;
        Ok(())
    }
}

impl DiscountRepository for InMemoryRepository {
    fn load_discounts(&mut self) -> Result<Option<Vec<BulkDiscount>>, RepositoryError> {
        Ok(self.discounts.clone())
    }

    fn save_discounts(&mut self, discounts: &[BulkDiscount]) -> Result<(), RepositoryError> {
        self.discounts = Some(discounts.to_vec());
        self.saves += 1;
        Ok(())
    }
}
