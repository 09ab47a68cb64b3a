// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{Collection, PricingConfig, TransitionResult};
use steelcalc_domain::{
    BulkDiscount, PricingRule, validate_discount_draft, validate_id_unique, validate_rule_draft,
};

/// Applies a command to the configuration, producing a new configuration.
///
/// The input configuration is never modified. New entries are appended so
/// that rule evaluation order follows insertion order.
///
/// # Arguments
///
/// * `config` - The current configuration (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new configuration
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A new entry fails validation or reuses an existing id
/// - A toggle or delete names an id that does not exist
#[allow(clippy::too_many_lines)]
pub fn apply(config: &PricingConfig, command: Command) -> Result<TransitionResult, CoreError> {
    let mut new_config: PricingConfig = config.clone();

    match command {
        Command::AddRule { id, draft } => {
            validate_rule_draft(&draft)?;
            validate_id_unique(&id, config.rules.iter().map(|r| r.id.as_str()))?;

            let rule: PricingRule = PricingRule::from_draft(id.clone(), draft);
            let summary: String = format!(
                "Added rule '{}' ({} -> {})",
                rule.name, rule.condition, rule.adjustment
            );
            new_config.rules.push(rule);

            Ok(TransitionResult {
                new_config,
                changed: Collection::Rules,
                entry_id: id,
                summary,
            })
        }
        Command::ToggleRule { id } => {
            let rule: &mut PricingRule = new_config
                .rules
                .iter_mut()
                .find(|r| r.id == id)
                .ok_or_else(|| not_found(Collection::Rules, &id))?;
            rule.active = !rule.active;
            let summary: String = format!("Set rule '{}' active={}", rule.name, rule.active);

            Ok(TransitionResult {
                new_config,
                changed: Collection::Rules,
                entry_id: id,
                summary,
            })
        }
        Command::DeleteRule { id } => {
            let index: usize = config
                .rules
                .iter()
                .position(|r| r.id == id)
                .ok_or_else(|| not_found(Collection::Rules, &id))?;
            let removed: PricingRule = new_config.rules.remove(index);
            let summary: String = format!("Deleted rule '{}'", removed.name);

            Ok(TransitionResult {
                new_config,
                changed: Collection::Rules,
                entry_id: id,
                summary,
            })
        }
        Command::AddDiscount { id, draft } => {
            validate_discount_draft(&draft)?;
            validate_id_unique(&id, config.discounts.iter().map(|d| d.id.as_str()))?;

            let discount: BulkDiscount = BulkDiscount::from_draft(id.clone(), draft);
            let summary: String = format!(
                "Added discount '{}' ({}% from {} kg)",
                discount.name, discount.discount_percentage, discount.min_quantity
            );
            new_config.discounts.push(discount);

            Ok(TransitionResult {
                new_config,
                changed: Collection::Discounts,
                entry_id: id,
                summary,
            })
        }
        Command::ToggleDiscount { id } => {
            let discount: &mut BulkDiscount = new_config
                .discounts
                .iter_mut()
                .find(|d| d.id == id)
                .ok_or_else(|| not_found(Collection::Discounts, &id))?;
            discount.active = !discount.active;
            let summary: String = format!(
                "Set discount '{}' active={}",
                discount.name, discount.active
            );

            Ok(TransitionResult {
                new_config,
                changed: Collection::Discounts,
                entry_id: id,
                summary,
            })
        }
        Command::DeleteDiscount { id } => {
            let index: usize = config
                .discounts
                .iter()
                .position(|d| d.id == id)
                .ok_or_else(|| not_found(Collection::Discounts, &id))?;
            let removed: BulkDiscount = new_config.discounts.remove(index);
            let summary: String = format!("Deleted discount '{}'", removed.name);

            Ok(TransitionResult {
                new_config,
                changed: Collection::Discounts,
                entry_id: id,
                summary,
            })
        }
    }
}

fn not_found(collection: Collection, id: &str) -> CoreError {
    CoreError::EntryNotFound {
        collection,
        id: id.to_string(),
    }
}
