// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary layer for the steel price calculator.
//!
//! Requests arrive as loosely typed data, are coerced and validated here,
//! and are forwarded to the pricing store and calculator. Domain and core
//! errors never cross this boundary untranslated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    add_discount, add_rule, calculate_quote, delete_discount, delete_rule,
    discount_draft_from_request, list_discounts, list_products, list_rules,
    rule_draft_from_request, toggle_discount, toggle_rule,
};
pub use request_response::{
    AddDiscountRequest, AddRuleRequest, DeleteResponse, DiscountResponse, GradeInfo,
    ListDiscountsResponse, ListProductsResponse, ListRulesResponse, ProductInfo, QuoteRequest,
    QuoteResponse, RuleResponse,
};
