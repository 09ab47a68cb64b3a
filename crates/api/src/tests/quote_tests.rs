// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{OfflineRepository, assert_close, create_test_store};
use crate::{
    ApiError, ListProductsResponse, QuoteRequest, QuoteResponse, calculate_quote, list_products,
};
use steelcalc::{InMemoryRepository, PricingStore};
use steelcalc_domain::{LooseValue, ShapeFamily};

fn sheet_request() -> QuoteRequest {
    QuoteRequest {
        product: String::from("sheet"),
        length: Some(LooseValue::from("2000")),
        width: Some(LooseValue::from(1000.0)),
        thickness: Some(LooseValue::from("5")),
        quantity: Some(LooseValue::from("2")),
        ..QuoteRequest::default()
    }
}

#[test]
fn test_quote_rebar_bundle_from_text_inputs() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let request: QuoteRequest = QuoteRequest {
        product: String::from("rebar"),
        length: Some(LooseValue::from("6")),
        diameter: Some(LooseValue::from("12")),
        quantity: Some(LooseValue::from("1000")),
        ..QuoteRequest::default()
    };

    let response: QuoteResponse = calculate_quote(&mut store, &request).unwrap();
    assert_eq!(response.product, "rebar");
    assert_eq!(response.product_name, "TMT Rebar");
    assert_eq!(response.shape, ShapeFamily::Circular);
    assert_eq!(response.grade, "fe415");
    assert_close(response.total_weight, 5326.8845, 1e-3);
    assert_close(response.breakdown.bulk_discount, 7670.714, 1e-2);
    assert_close(response.breakdown.total, 248_019.742, 1e-2);
}

#[test]
fn test_quote_sheet_uses_first_grade_when_omitted() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();

    let response: QuoteResponse = calculate_quote(&mut store, &sheet_request()).unwrap();
    assert_eq!(response.grade, "ms");
    assert_close(response.total_weight, 157.0, 1e-9);
    // 157 kg at 62/kg; no rule or tier applies.
    assert!(response.breakdown.adjustments.is_empty());
    assert_close(response.breakdown.total, 9734.0, 1e-6);
}

#[test]
fn test_quote_premium_grade_small_order() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let request: QuoteRequest = QuoteRequest {
        product: String::from("structural"),
        grade: Some(String::from("ss316")),
        length: Some(LooseValue::from(6.0)),
        width: Some(LooseValue::from(50.0)),
        thickness: Some(LooseValue::from(5.0)),
        quantity: Some(LooseValue::from(1.0)),
        ..QuoteRequest::default()
    };

    let response: QuoteResponse = calculate_quote(&mut store, &request).unwrap();
    assert_close(response.total_weight, 11.775, 1e-9);
    assert_close(response.breakdown.base_amount, 2590.5, 1e-6);
    assert_eq!(response.breakdown.adjustments.len(), 2);
    assert_close(response.breakdown.total, 3349.55, 1e-6);
}

#[test]
fn test_quote_density_override() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let request: QuoteRequest = QuoteRequest {
        density: Some(LooseValue::from("7800")),
        ..sheet_request()
    };

    let response: QuoteResponse = calculate_quote(&mut store, &request).unwrap();
    assert_close(response.total_weight, 156.0, 1e-9);
}

#[test]
fn test_quote_missing_quantity_is_zero() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let request: QuoteRequest = QuoteRequest {
        quantity: None,
        ..sheet_request()
    };

    let response: QuoteResponse = calculate_quote(&mut store, &request).unwrap();
    assert_eq!(response.total_weight, 0.0);
    assert_eq!(response.breakdown.price_per_kg, 0.0);
    // The small order fee still applies to a zero subtotal.
    assert_close(response.breakdown.total, 500.0, 1e-9);
}

#[test]
fn test_quote_non_numeric_text_reads_as_zero() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let request: QuoteRequest = QuoteRequest {
        width: Some(LooseValue::from("wide")),
        ..sheet_request()
    };

    let response: QuoteResponse = calculate_quote(&mut store, &request).unwrap();
    assert_eq!(response.dimensions.width_mm, Some(0.0));
    assert_eq!(response.total_weight, 0.0);
}

#[test]
fn test_quote_unknown_product_is_invalid_input() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let request: QuoteRequest = QuoteRequest {
        product: String::from("girder"),
        ..QuoteRequest::default()
    };

    let result: Result<QuoteResponse, ApiError> = calculate_quote(&mut store, &request);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "product"
    ));
}

#[test]
fn test_quote_storage_failure_is_internal() {
    let mut store: PricingStore<OfflineRepository> = PricingStore::new(OfflineRepository);

    let result: Result<QuoteResponse, ApiError> = calculate_quote(&mut store, &sheet_request());
    assert!(matches!(result, Err(ApiError::Internal { .. })));
}

#[test]
fn test_quote_request_accepts_camel_case_json() {
    let request: QuoteRequest = serde_json::from_str(
        r#"{"product":"pipe","diameter":"50","thickness":5,"length":6,"quantity":"1"}"#,
    )
    .unwrap();
    assert_eq!(request.grade, None);
    assert_eq!(request.width, None);

    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let response: QuoteResponse = calculate_quote(&mut store, &request).unwrap();
    assert_close(response.total_weight, 33.293_028, 1e-5);
}

#[test]
fn test_list_products_matches_catalog() {
    let response: ListProductsResponse = list_products();
    assert_eq!(response.products.len(), 8);

    let angle = response
        .products
        .iter()
        .find(|p| p.key == "angle")
        .unwrap();
    assert_eq!(angle.shape, ShapeFamily::Angle);
    assert_eq!(angle.grades.len(), 2);
    assert_eq!(angle.grades[0].grade, "ms");
    assert_eq!(angle.grades[0].price_per_kg, 55.0);
}
