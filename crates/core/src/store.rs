// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persistence-backed rule and discount store.
//!
//! Every mutation is a read-modify-write of one whole collection: the
//! current configuration is loaded, the command is applied, and the changed
//! collection is written back before the call returns. There is no batching
//! and the last writer wins.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::ids::generate_id;
use crate::repository::{DiscountRepository, RuleRepository};
use crate::state::{Collection, PricingConfig, TransitionResult};
use steelcalc_domain::{
    BulkDiscount, DiscountDraft, PricingRule, RuleDraft, default_discounts, default_rules,
};
use tracing::{debug, info};

/// Rule and discount store over an injected repository.
#[derive(Debug)]
pub struct PricingStore<R> {
    repository: R,
}

impl<R> PricingStore<R>
where
    R: RuleRepository + DiscountRepository,
{
    /// Creates a store over `repository`.
    #[must_use]
    pub const fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the underlying repository.
    #[must_use]
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// Consumes the store, returning the underlying repository.
    #[must_use]
    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Loads both collections.
    ///
    /// A collection that has never been saved is seeded with its defaults
    /// and the seed is persisted immediately, so later loads read it back
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository cannot be read or written.
    pub fn load(&mut self) -> Result<PricingConfig, CoreError> {
        let rules: Vec<PricingRule> = if let Some(rules) = self.repository.load_rules()? {
            rules
        } else {
            let seeded: Vec<PricingRule> = default_rules();
            info!(count = seeded.len(), "Seeding default pricing rules");
            self.repository.save_rules(&seeded)?;
            seeded
        };

        let discounts: Vec<BulkDiscount> =
            if let Some(discounts) = self.repository.load_discounts()? {
                discounts
            } else {
                let seeded: Vec<BulkDiscount> = default_discounts();
                info!(count = seeded.len(), "Seeding default bulk discounts");
                self.repository.save_discounts(&seeded)?;
                seeded
            };

        debug!(
            rules = rules.len(),
            discounts = discounts.len(),
            "Loaded pricing configuration"
        );
        Ok(PricingConfig::new(rules, discounts))
    }

    /// Adds a pricing rule built from `draft` under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is invalid or persistence fails.
    pub fn add_rule(&mut self, draft: RuleDraft) -> Result<PricingRule, CoreError> {
        let result: TransitionResult = self.execute(Command::AddRule {
            id: generate_id(),
            draft,
        })?;
        changed_rule(&result)
    }

    /// Flips the active flag of the rule with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no such rule exists or persistence fails.
    pub fn toggle_rule(&mut self, id: &str) -> Result<PricingRule, CoreError> {
        let result: TransitionResult = self.execute(Command::ToggleRule { id: id.to_string() })?;
        changed_rule(&result)
    }

    /// Removes the rule with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no such rule exists or persistence fails.
    pub fn delete_rule(&mut self, id: &str) -> Result<PricingConfig, CoreError> {
        let result: TransitionResult = self.execute(Command::DeleteRule { id: id.to_string() })?;
        Ok(result.new_config)
    }

    /// Adds a bulk discount tier built from `draft` under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns an error if the draft is invalid or persistence fails.
    pub fn add_discount(&mut self, draft: DiscountDraft) -> Result<BulkDiscount, CoreError> {
        let result: TransitionResult = self.execute(Command::AddDiscount {
            id: generate_id(),
            draft,
        })?;
        changed_discount(&result)
    }

    /// Flips the active flag of the tier with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no such tier exists or persistence fails.
    pub fn toggle_discount(&mut self, id: &str) -> Result<BulkDiscount, CoreError> {
        let result: TransitionResult =
            self.execute(Command::ToggleDiscount { id: id.to_string() })?;
        changed_discount(&result)
    }

    /// Removes the tier with `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if no such tier exists or persistence fails.
    pub fn delete_discount(&mut self, id: &str) -> Result<PricingConfig, CoreError> {
        let result: TransitionResult =
            self.execute(Command::DeleteDiscount { id: id.to_string() })?;
        Ok(result.new_config)
    }

    /// Loads, applies `command` and persists the collection it changed.
    ///
    /// Nothing is written when the command is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if loading, applying or saving fails.
    pub fn execute(&mut self, command: Command) -> Result<TransitionResult, CoreError> {
        let current: PricingConfig = self.load()?;
        let name: &'static str = command.name();
        let result: TransitionResult = apply(&current, command)?;

        match result.changed {
            Collection::Rules => self.repository.save_rules(&result.new_config.rules)?,
            Collection::Discounts => self
                .repository
                .save_discounts(&result.new_config.discounts)?,
        }

        info!(
            command = name,
            id = %result.entry_id,
            "{}",
            result.summary
        );
        Ok(result)
    }
}

fn changed_rule(result: &TransitionResult) -> Result<PricingRule, CoreError> {
    result
        .new_config
        .rule(&result.entry_id)
        .cloned()
        .ok_or_else(|| CoreError::EntryNotFound {
            collection: Collection::Rules,
            id: result.entry_id.clone(),
        })
}

fn changed_discount(result: &TransitionResult) -> Result<BulkDiscount, CoreError> {
    result
        .new_config
        .discount(&result.entry_id)
        .cloned()
        .ok_or_else(|| CoreError::EntryNotFound {
            collection: Collection::Discounts,
            id: result.entry_id.clone(),
        })
}
