// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::{AddDiscountRequest, AddRuleRequest};
use steelcalc::{
    DiscountRepository, InMemoryRepository, PricingStore, RepositoryError, RuleRepository,
};
use steelcalc_domain::{BulkDiscount, LooseValue, PricingRule};

pub fn create_test_store() -> PricingStore<InMemoryRepository> {
    PricingStore::new(InMemoryRepository::new())
}

pub fn create_add_rule_request(name: &str) -> AddRuleRequest {
    AddRuleRequest {
        name: name.to_string(),
        condition: String::from("quantity"),
        operator: String::from("greater_than"),
        value: LooseValue::from("1500"),
        adjustment_type: String::from("percentage"),
        adjustment_value: LooseValue::from("-2"),
        active: None,
    }
}

pub fn create_add_discount_request(name: &str) -> AddDiscountRequest {
    AddDiscountRequest {
        name: name.to_string(),
        min_quantity: LooseValue::from("2000"),
        discount_percentage: LooseValue::from("2"),
        active: None,
    }
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

/// A repository whose storage is never reachable.
pub struct OfflineRepository;

impl RuleRepository for OfflineRepository {
    fn load_rules(&mut self) -> Result<Option<Vec<PricingRule>>, RepositoryError> {
        Err(RepositoryError::Unavailable(String::from("offline")))
    }

    fn save_rules(&mut self, _rules: &[PricingRule]) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable(String::from("offline")))
    }
}

impl DiscountRepository for OfflineRepository {
    fn load_discounts(&mut self) -> Result<Option<Vec<BulkDiscount>>, RepositoryError> {
        Err(RepositoryError::Unavailable(String::from("offline")))
    }

    fn save_discounts(&mut self, _discounts: &[BulkDiscount]) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable(String::from("offline")))
    }
}
