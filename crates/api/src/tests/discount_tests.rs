// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{OfflineRepository, create_add_discount_request, create_test_store};
use crate::{
    AddDiscountRequest, ApiError, DeleteResponse, DiscountResponse, ListDiscountsResponse,
    add_discount, delete_discount, discount_draft_from_request, list_discounts, toggle_discount,
};
use steelcalc::{InMemoryRepository, PricingStore};
use steelcalc_domain::{DiscountDraft, LooseValue};

#[test]
fn test_list_discounts_returns_seed() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let response: ListDiscountsResponse = list_discounts(&mut store).unwrap();
    assert_eq!(response.discounts.len(), 4);
    assert_eq!(response.discounts[0].name, "5+ tonnes");
}

#[test]
fn test_discount_draft_coerces_text() {
    let draft: DiscountDraft = discount_draft_from_request(&create_add_discount_request("2t"));
    assert_eq!(draft.min_quantity, 2000.0);
    assert_eq!(draft.discount_percentage, 2.0);
    assert!(draft.active);
}

#[test]
fn test_add_discount_appends() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let response: DiscountResponse =
        add_discount(&mut store, &create_add_discount_request("2+ tonnes")).unwrap();
    assert_eq!(response.discount.min_quantity, 2000.0);
    assert_eq!(response.message, "Added discount '2+ tonnes'");
    assert_eq!(list_discounts(&mut store).unwrap().discounts.len(), 5);
}

#[test]
fn test_add_discount_rejects_percentage_over_100() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let request: AddDiscountRequest = AddDiscountRequest {
        discount_percentage: LooseValue::from("150"),
        ..create_add_discount_request("Too generous")
    };

    let result: Result<DiscountResponse, ApiError> = add_discount(&mut store, &request);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "discountPercentage"
    ));
    assert_eq!(list_discounts(&mut store).unwrap().discounts.len(), 4);
}

#[test]
fn test_add_discount_rejects_negative_minimum() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let request: AddDiscountRequest = AddDiscountRequest {
        min_quantity: LooseValue::from(-1.0),
        ..create_add_discount_request("Negative")
    };

    let result: Result<DiscountResponse, ApiError> = add_discount(&mut store, &request);
    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "minQuantity"
    ));
}

#[test]
fn test_toggle_discount_flips_flag() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let response: DiscountResponse = toggle_discount(&mut store, "1").unwrap();
    assert!(!response.discount.active);
    assert_eq!(response.message, "Discount '5+ tonnes' disabled");
}

#[test]
fn test_delete_discount_reports_remaining() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    let response: DeleteResponse = delete_discount(&mut store, "4").unwrap();
    assert_eq!(response.remaining, 3);

    let result: Result<DeleteResponse, ApiError> = delete_discount(&mut store, "4");
    assert_eq!(
        result,
        Err(ApiError::ResourceNotFound {
            resource_type: String::from("Bulk discount"),
            message: String::from("No bulk discount with id '4'"),
        })
    );
}

#[test]
fn test_add_discount_storage_failure_is_internal() {
    let mut store: PricingStore<OfflineRepository> = PricingStore::new(OfflineRepository);
    let result: Result<DiscountResponse, ApiError> =
        add_discount(&mut store, &create_add_discount_request("Offline"));
    assert!(matches!(result, Err(ApiError::Internal { .. })));
}
