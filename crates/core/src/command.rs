// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use steelcalc_domain::{DiscountDraft, RuleDraft};

/// A command represents user intent as data only.
///
/// Commands are the only way to request configuration changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a new pricing rule.
    AddRule {
        /// The identifier assigned to the new rule.
        id: String,
        /// The user-supplied rule fields.
        draft: RuleDraft,
    },
    /// Flip the active flag of a pricing rule.
    ToggleRule {
        /// The rule identifier.
        id: String,
    },
    /// Remove a pricing rule.
    DeleteRule {
        /// The rule identifier.
        id: String,
    },
    /// Append a new bulk discount tier.
    AddDiscount {
        /// The identifier assigned to the new tier.
        id: String,
        /// The user-supplied tier fields.
        draft: DiscountDraft,
    },
    /// Flip the active flag of a bulk discount tier.
    ToggleDiscount {
        /// The tier identifier.
        id: String,
    },
    /// Remove a bulk discount tier.
    DeleteDiscount {
        /// The tier identifier.
        id: String,
    },
}

impl Command {
    /// Returns the command name used in log output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddRule { .. } => "AddRule",
            Self::ToggleRule { .. } => "ToggleRule",
            Self::DeleteRule { .. } => "DeleteRule",
            Self::AddDiscount { .. } => "AddDiscount",
            Self::ToggleDiscount { .. } => "ToggleDiscount",
            Self::DeleteDiscount { .. } => "DeleteDiscount",
        }
    }
}
