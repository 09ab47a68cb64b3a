// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommands and their dispatch onto the API layer.

use clap::{Args as ClapArgs, Subcommand};
use serde::Serialize;
use steelcalc::{DiscountRepository, PricingStore, RuleRepository};
use steelcalc_api::{
    AddDiscountRequest, AddRuleRequest, ApiError, QuoteRequest, add_discount, add_rule,
    calculate_quote, delete_discount, delete_rule, list_discounts, list_products, list_rules,
    toggle_discount, toggle_rule,
};
use steelcalc_domain::LooseValue;
use tracing::debug;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Price one order line
    Quote(QuoteArgs),
    /// List the product catalog
    Products,
    /// Manage pricing rules
    #[command(subcommand)]
    Rules(RuleCommand),
    /// Manage bulk discount tiers
    #[command(subcommand)]
    Discounts(DiscountCommand),
}

/// Quote inputs. Values are taken as typed; non-numeric text reads as zero.
#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct QuoteArgs {
    /// Catalog product key
    #[arg(short, long, default_value = "rebar")]
    pub product: String,
    /// Grade code; defaults to the product's first grade
    #[arg(short, long)]
    pub grade: Option<String>,
    /// Length in metres (millimetres for sheet)
    #[arg(long)]
    pub length: Option<String>,
    /// Width in millimetres
    #[arg(long)]
    pub width: Option<String>,
    /// Thickness in millimetres
    #[arg(long)]
    pub thickness: Option<String>,
    /// Diameter in millimetres
    #[arg(long)]
    pub diameter: Option<String>,
    /// Number of pieces
    #[arg(short, long)]
    pub quantity: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum RuleCommand {
    /// List rules in evaluation order
    List,
    /// Append a rule
    Add(AddRuleArgs),
    /// Enable or disable a rule
    Toggle {
        /// Rule id
        id: String,
    },
    /// Remove a rule
    Delete {
        /// Rule id
        id: String,
    },
}

#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct AddRuleArgs {
    /// Display name
    #[arg(long)]
    pub name: String,
    /// One of quantity, weight, total, grade
    #[arg(long)]
    pub condition: String,
    /// One of `greater_than`, `less_than`, `equals`
    #[arg(long, default_value = "greater_than")]
    pub operator: String,
    /// Comparison value
    #[arg(long, allow_hyphen_values = true)]
    pub value: String,
    /// One of percentage, fixed
    #[arg(long, default_value = "percentage")]
    pub adjustment_type: String,
    /// Percent or amount
    #[arg(long, allow_hyphen_values = true)]
    pub adjustment_value: String,
    /// Store the rule disabled
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DiscountCommand {
    /// List tiers in stored order
    List,
    /// Append a tier
    Add(AddDiscountArgs),
    /// Enable or disable a tier
    Toggle {
        /// Tier id
        id: String,
    },
    /// Remove a tier
    Delete {
        /// Tier id
        id: String,
    },
}

#[derive(ClapArgs, Debug, Clone, PartialEq, Eq)]
pub struct AddDiscountArgs {
    /// Display name
    #[arg(long)]
    pub name: String,
    /// Minimum total weight in kilograms
    #[arg(long, allow_hyphen_values = true)]
    pub min_quantity: String,
    /// Discount percentage
    #[arg(long, allow_hyphen_values = true)]
    pub percentage: String,
    /// Store the tier disabled
    #[arg(long)]
    pub inactive: bool,
}

fn loose(value: Option<&str>) -> Option<LooseValue> {
    value.map(LooseValue::from)
}

impl QuoteArgs {
    fn to_request(&self, density: Option<&str>) -> QuoteRequest {
        QuoteRequest {
            product: self.product.clone(),
            grade: self.grade.clone(),
            length: loose(self.length.as_deref()),
            width: loose(self.width.as_deref()),
            thickness: loose(self.thickness.as_deref()),
            diameter: loose(self.diameter.as_deref()),
            quantity: loose(self.quantity.as_deref()),
            density: loose(density),
        }
    }
}

impl From<&AddRuleArgs> for AddRuleRequest {
    fn from(args: &AddRuleArgs) -> Self {
        Self {
            name: args.name.clone(),
            condition: args.condition.clone(),
            operator: args.operator.clone(),
            value: LooseValue::from(args.value.as_str()),
            adjustment_type: args.adjustment_type.clone(),
            adjustment_value: LooseValue::from(args.adjustment_value.as_str()),
            active: Some(!args.inactive),
        }
    }
}

impl From<&AddDiscountArgs> for AddDiscountRequest {
    fn from(args: &AddDiscountArgs) -> Self {
        Self {
            name: args.name.clone(),
            min_quantity: LooseValue::from(args.min_quantity.as_str()),
            discount_percentage: LooseValue::from(args.percentage.as_str()),
            active: Some(!args.inactive),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Internal {
        message: format!("Failed to serialize response: {e}"),
    })
}

/// Runs one subcommand against the store and returns its JSON response.
///
/// # Errors
///
/// Returns an error if the underlying API operation fails.
pub fn run<R>(
    store: &mut PricingStore<R>,
    command: &Command,
    density: Option<&str>,
) -> Result<serde_json::Value, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    debug!(?command, "Dispatching command");
    match command {
        Command::Quote(args) => to_json(&calculate_quote(store, &args.to_request(density))?),
        Command::Products => to_json(&list_products()),
        Command::Rules(RuleCommand::List) => to_json(&list_rules(store)?),
        Command::Rules(RuleCommand::Add(args)) => {
            to_json(&add_rule(store, &AddRuleRequest::from(args))?)
        }
        Command::Rules(RuleCommand::Toggle { id }) => to_json(&toggle_rule(store, id)?),
        Command::Rules(RuleCommand::Delete { id }) => to_json(&delete_rule(store, id)?),
        Command::Discounts(DiscountCommand::List) => to_json(&list_discounts(store)?),
        Command::Discounts(DiscountCommand::Add(args)) => {
            to_json(&add_discount(store, &AddDiscountRequest::from(args))?)
        }
        Command::Discounts(DiscountCommand::Toggle { id }) => {
            to_json(&toggle_discount(store, id)?)
        }
        Command::Discounts(DiscountCommand::Delete { id }) => {
            to_json(&delete_discount(store, id)?)
        }
    }
}
