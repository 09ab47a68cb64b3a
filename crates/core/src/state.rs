// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use steelcalc_domain::{BulkDiscount, PricingRule, default_discounts, default_rules};

/// Which stored collection an operation touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    /// The pricing rule collection.
    Rules,
    /// The bulk discount collection.
    Discounts,
}

impl Collection {
    /// Returns a human-readable name for a single entry of this collection.
    #[must_use]
    pub const fn entry_name(&self) -> &'static str {
        match self {
            Self::Rules => "pricing rule",
            Self::Discounts => "bulk discount",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.entry_name())
    }
}

/// The complete pricing configuration of one installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Pricing rules in evaluation order.
    pub rules: Vec<PricingRule>,
    /// Bulk discount tiers in stored order.
    pub discounts: Vec<BulkDiscount>,
}

impl PricingConfig {
    /// Creates a configuration from explicit collections.
    #[must_use]
    pub const fn new(rules: Vec<PricingRule>, discounts: Vec<BulkDiscount>) -> Self {
        Self { rules, discounts }
    }

    /// Creates an empty configuration.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Creates the seeded configuration a new installation starts with.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(default_rules(), default_discounts())
    }

    /// Finds a rule by id.
    #[must_use]
    pub fn rule(&self, id: &str) -> Option<&PricingRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Finds a discount tier by id.
    #[must_use]
    pub fn discount(&self, id: &str) -> Option<&BulkDiscount> {
        self.discounts.iter().find(|d| d.id == id)
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self::seeded()
    }
}

/// The result of a successful configuration transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new configuration after the transition.
    pub new_config: PricingConfig,
    /// The collection that changed and must be persisted.
    pub changed: Collection,
    /// The id of the entry that was added, toggled or removed.
    pub entry_id: String,
    /// A short description of the change for log output.
    pub summary: String,
}
