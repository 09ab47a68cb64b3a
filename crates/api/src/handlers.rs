// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operations exposed to the UI layer.
//!
//! Each operation translates a request into core calls and translates any
//! failure into an [`ApiError`].

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddDiscountRequest, AddRuleRequest, DeleteResponse, DiscountResponse, ListDiscountsResponse,
    ListProductsResponse, ListRulesResponse, ProductInfo, QuoteRequest, QuoteResponse,
    RuleResponse,
};
use steelcalc::{
    Calculator, DiscountRepository, PricingConfig, PricingStore, Quote, RuleRepository,
};
use steelcalc_domain::{
    Adjustment, AdjustmentType, BulkDiscount, Condition, ConditionKind, Dimensions,
    DiscountDraft, LooseValue, Operator, PricingRule, RuleDraft, STEEL_DENSITY_KG_PER_M3,
    number_or_zero, products,
};
use tracing::{debug, info};

/// Coerces an optional dimension input.
///
/// Absent fields stay absent; present fields are read as numbers.
fn dimension(value: Option<&LooseValue>) -> Option<f64> {
    value.map(LooseValue::to_number)
}

/// Prices one order line against the stored configuration.
///
/// # Arguments
///
/// * `store` - The pricing store supplying rules and discounts
/// * `request` - The product, grade and dimensions to price
///
/// # Errors
///
/// Returns an error if:
/// - The product key is not in the catalog
/// - The configuration cannot be loaded
pub fn calculate_quote<R>(
    store: &mut PricingStore<R>,
    request: &QuoteRequest,
) -> Result<QuoteResponse, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    let density: f64 = request
        .density
        .as_ref()
        .map_or(STEEL_DENSITY_KG_PER_M3, LooseValue::to_number);

    let mut calculator: Calculator = Calculator::new().with_density(density);
    calculator
        .select_product(&request.product)
        .map_err(translate_core_error)?;
    if let Some(grade) = &request.grade {
        calculator.select_grade(grade);
    }
    calculator.set_dimensions(Dimensions {
        length_m: dimension(request.length.as_ref()),
        width_mm: dimension(request.width.as_ref()),
        thickness_mm: dimension(request.thickness.as_ref()),
        diameter_mm: dimension(request.diameter.as_ref()),
        quantity: number_or_zero(request.quantity.as_ref()),
    });

    let config: PricingConfig = store.load().map_err(translate_core_error)?;
    let quote: Quote = calculator.recompute(&config);

    debug!(
        product = %quote.product,
        grade = %quote.grade,
        total_weight = quote.total_weight,
        total = quote.breakdown.total,
        "Computed quote"
    );

    Ok(QuoteResponse {
        product: quote.product,
        product_name: calculator.product().name.to_string(),
        shape: calculator.product().shape,
        grade: quote.grade,
        dimensions: quote.dimensions,
        total_weight: quote.total_weight,
        breakdown: quote.breakdown,
    })
}

/// Lists the product catalog.
#[must_use]
pub fn list_products() -> ListProductsResponse {
    ListProductsResponse {
        products: products().iter().map(ProductInfo::from).collect(),
    }
}

/// Lists pricing rules in evaluation order.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn list_rules<R>(store: &mut PricingStore<R>) -> Result<ListRulesResponse, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    let config: PricingConfig = store.load().map_err(translate_core_error)?;
    Ok(ListRulesResponse {
        rules: config.rules,
    })
}

/// Builds a rule draft from a request.
///
/// # Errors
///
/// Returns an error if the condition, operator or adjustment type is not
/// recognized, or the operator is not valid for the condition.
pub fn rule_draft_from_request(request: &AddRuleRequest) -> Result<RuleDraft, ApiError> {
    let kind: ConditionKind = request
        .condition
        .parse()
        .map_err(translate_domain_error)?;
    let operator: Operator = request.operator.parse().map_err(translate_domain_error)?;
    let condition: Condition =
        Condition::from_parts(kind, operator, &request.value).map_err(translate_domain_error)?;
    let adjustment_type: AdjustmentType = request
        .adjustment_type
        .parse()
        .map_err(translate_domain_error)?;

    Ok(RuleDraft {
        name: request.name.trim().to_string(),
        condition,
        adjustment: Adjustment::from_parts(adjustment_type, &request.adjustment_value),
        active: request.active.unwrap_or(true),
    })
}

/// Adds a pricing rule at the end of the evaluation order.
///
/// # Errors
///
/// Returns an error if:
/// - The request names an unknown condition, operator or adjustment type
/// - The operator is not valid for the condition
/// - The name is empty
/// - The configuration cannot be saved
pub fn add_rule<R>(
    store: &mut PricingStore<R>,
    request: &AddRuleRequest,
) -> Result<RuleResponse, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    let draft: RuleDraft = rule_draft_from_request(request)?;
    let rule: PricingRule = store.add_rule(draft).map_err(translate_core_error)?;

    info!(id = %rule.id, name = %rule.name, "Rule added");
    Ok(RuleResponse {
        message: format!("Added rule '{}'", rule.name),
        rule,
    })
}

/// Flips the active flag of a pricing rule.
///
/// # Errors
///
/// Returns an error if the rule does not exist or cannot be saved.
pub fn toggle_rule<R>(store: &mut PricingStore<R>, id: &str) -> Result<RuleResponse, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    let rule: PricingRule = store.toggle_rule(id).map_err(translate_core_error)?;
    let state: &str = if rule.active { "enabled" } else { "disabled" };
    Ok(RuleResponse {
        message: format!("Rule '{}' {state}", rule.name),
        rule,
    })
}

/// Deletes a pricing rule.
///
/// # Errors
///
/// Returns an error if the rule does not exist or cannot be saved.
pub fn delete_rule<R>(store: &mut PricingStore<R>, id: &str) -> Result<DeleteResponse, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    let config: PricingConfig = store.delete_rule(id).map_err(translate_core_error)?;
    Ok(DeleteResponse {
        id: id.to_string(),
        remaining: config.rules.len(),
        message: format!("Deleted rule '{id}'"),
    })
}

/// Lists bulk discount tiers in stored order.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn list_discounts<R>(store: &mut PricingStore<R>) -> Result<ListDiscountsResponse, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    let config: PricingConfig = store.load().map_err(translate_core_error)?;
    Ok(ListDiscountsResponse {
        discounts: config.discounts,
    })
}

/// Builds a discount draft from a request, coercing numeric text.
#[must_use]
pub fn discount_draft_from_request(request: &AddDiscountRequest) -> DiscountDraft {
    DiscountDraft {
        name: request.name.trim().to_string(),
        min_quantity: request.min_quantity.to_number(),
        discount_percentage: request.discount_percentage.to_number(),
        active: request.active.unwrap_or(true),
    }
}

/// Adds a bulk discount tier.
///
/// # Errors
///
/// Returns an error if:
/// - The name is empty
/// - The minimum quantity is negative
/// - The percentage is outside `0..=100`
/// - The configuration cannot be saved
pub fn add_discount<R>(
    store: &mut PricingStore<R>,
    request: &AddDiscountRequest,
) -> Result<DiscountResponse, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    let draft: DiscountDraft = discount_draft_from_request(request);
    let discount: BulkDiscount = store.add_discount(draft).map_err(translate_core_error)?;

    info!(id = %discount.id, name = %discount.name, "Discount added");
    Ok(DiscountResponse {
        message: format!("Added discount '{}'", discount.name),
        discount,
    })
}

/// Flips the active flag of a bulk discount tier.
///
/// # Errors
///
/// Returns an error if the tier does not exist or cannot be saved.
pub fn toggle_discount<R>(
    store: &mut PricingStore<R>,
    id: &str,
) -> Result<DiscountResponse, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    let discount: BulkDiscount = store.toggle_discount(id).map_err(translate_core_error)?;
    let state: &str = if discount.active {
        "enabled"
    } else {
        "disabled"
    };
    Ok(DiscountResponse {
        message: format!("Discount '{}' {state}", discount.name),
        discount,
    })
}

/// Deletes a bulk discount tier.
///
/// # Errors
///
/// Returns an error if the tier does not exist or cannot be saved.
pub fn delete_discount<R>(
    store: &mut PricingStore<R>,
    id: &str,
) -> Result<DeleteResponse, ApiError>
where
    R: RuleRepository + DiscountRepository,
{
    let config: PricingConfig = store.delete_discount(id).map_err(translate_core_error)?;
    Ok(DeleteResponse {
        id: id.to_string(),
        remaining: config.discounts.len(),
        message: format!("Deleted discount '{id}'"),
    })
}
