// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{InMemoryRepository, PricingStore};
use steelcalc_domain::{
    Adjustment, Condition, DiscountDraft, QuantityTest, RuleDraft, Threshold,
};

pub fn create_test_rule_draft(name: &str) -> RuleDraft {
    RuleDraft {
        name: name.to_string(),
        condition: Condition::Weight(Threshold::GreaterThan(100.0)),
        adjustment: Adjustment::Fixed(-25.0),
        active: true,
    }
}

pub fn create_quantity_rule_draft(name: &str, quantity: f64, percent: f64) -> RuleDraft {
    RuleDraft {
        name: name.to_string(),
        condition: Condition::Quantity(QuantityTest::Equals(quantity)),
        adjustment: Adjustment::Percentage(percent),
        active: true,
    }
}

pub fn create_test_discount_draft(name: &str, min_quantity: f64, percent: f64) -> DiscountDraft {
    DiscountDraft {
        name: name.to_string(),
        min_quantity,
        discount_percentage: percent,
        active: true,
    }
}

pub fn create_test_store() -> PricingStore<InMemoryRepository> {
    PricingStore::new(InMemoryRepository::new())
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}
