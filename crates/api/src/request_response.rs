// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Numeric request fields accept numbers or numeric text, the way form
//! inputs arrive. Text that is not a number is read as zero.

use serde::{Deserialize, Serialize};
use steelcalc_domain::{
    BulkDiscount, DimensionField, Dimensions, LooseValue, PriceBreakdown, PricingRule, Product,
    ShapeFamily,
};

/// API request to price one order line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// Catalog product key.
    pub product: String,
    /// Grade code; the product's first grade when omitted.
    #[serde(default)]
    pub grade: Option<String>,
    /// Length in metres (millimetres for sheet products).
    #[serde(default)]
    pub length: Option<LooseValue>,
    /// Width in millimetres.
    #[serde(default)]
    pub width: Option<LooseValue>,
    /// Thickness in millimetres.
    #[serde(default)]
    pub thickness: Option<LooseValue>,
    /// Diameter in millimetres.
    #[serde(default)]
    pub diameter: Option<LooseValue>,
    /// Number of pieces; zero when omitted.
    #[serde(default)]
    pub quantity: Option<LooseValue>,
    /// Material density in kg/m³; steel when omitted.
    #[serde(default)]
    pub density: Option<LooseValue>,
}

/// API response for a priced order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Catalog product key.
    pub product: String,
    /// Product display name.
    pub product_name: String,
    /// Weight formula family.
    pub shape: ShapeFamily,
    /// Grade the quote was priced at.
    pub grade: String,
    /// Dimensions after coercion.
    pub dimensions: Dimensions,
    /// Total weight in kilograms.
    pub total_weight: f64,
    /// The price breakdown.
    pub breakdown: PriceBreakdown,
}

/// API request to add a pricing rule.
///
/// Fields mirror the stored record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRuleRequest {
    /// Display name.
    pub name: String,
    /// One of `quantity`, `weight`, `total`, `grade`.
    pub condition: String,
    /// One of `greater_than`, `less_than`, `equals`.
    pub operator: String,
    /// Comparison value; text for grade rules.
    pub value: LooseValue,
    /// One of `percentage`, `fixed`.
    pub adjustment_type: String,
    /// Percent or amount.
    pub adjustment_value: LooseValue,
    /// Whether the rule starts active (default `true`).
    #[serde(default)]
    pub active: Option<bool>,
}

/// API request to add a bulk discount tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddDiscountRequest {
    /// Display name.
    pub name: String,
    /// Minimum total weight in kilograms.
    pub min_quantity: LooseValue,
    /// Discount percentage in `0..=100`.
    pub discount_percentage: LooseValue,
    /// Whether the tier starts active (default `true`).
    #[serde(default)]
    pub active: Option<bool>,
}

/// API response listing pricing rules in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRulesResponse {
    /// The rules.
    pub rules: Vec<PricingRule>,
}

/// API response listing bulk discount tiers in stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListDiscountsResponse {
    /// The tiers.
    pub discounts: Vec<BulkDiscount>,
}

/// API response for a rule that was added or toggled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResponse {
    /// The rule after the change.
    pub rule: PricingRule,
    /// A success message.
    pub message: String,
}

/// API response for a discount tier that was added or toggled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountResponse {
    /// The tier after the change.
    pub discount: BulkDiscount,
    /// A success message.
    pub message: String,
}

/// API response for a deleted entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// The id that was removed.
    pub id: String,
    /// Entries left in the collection.
    pub remaining: usize,
    /// A success message.
    pub message: String,
}

/// A grade and its base price as listed in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeInfo {
    /// Grade code.
    pub grade: String,
    /// Base price per kilogram.
    pub price_per_kg: f64,
}

/// A catalog product as listed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    /// Product key.
    pub key: String,
    /// Display name.
    pub name: String,
    /// Weight formula family.
    pub shape: ShapeFamily,
    /// Grades in display order; the first is the default.
    pub grades: Vec<GradeInfo>,
    /// Dimension fields the product needs.
    pub dimension_fields: Vec<DimensionField>,
}

impl From<&Product> for ProductInfo {
    fn from(product: &Product) -> Self {
        Self {
            key: product.key.to_string(),
            name: product.name.to_string(),
            shape: product.shape,
            grades: product
                .grades
                .iter()
                .map(|g| GradeInfo {
                    grade: g.grade.to_string(),
                    price_per_kg: g.price_per_kg,
                })
                .collect(),
            dimension_fields: product.dimension_fields().to_vec(),
        }
    }
}

/// API response listing the product catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListProductsResponse {
    /// Products in display order.
    pub products: Vec<ProductInfo>,
}
