// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed configuration written the first time a store is read.

use crate::bulk_discount::BulkDiscount;
use crate::pricing_rule::{Adjustment, Condition, PricingRule, QuantityTest, Threshold};

/// Returns the pricing rules a new installation starts with.
#[must_use]
pub fn default_rules() -> Vec<PricingRule> {
    vec![
        PricingRule {
            id: String::from("1"),
            name: String::from("High Volume Discount"),
            condition: Condition::Quantity(QuantityTest::GreaterThan(1000.0)),
            adjustment: Adjustment::Percentage(-5.0),
            active: true,
        },
        PricingRule {
            id: String::from("2"),
            name: String::from("Premium Grade Surcharge"),
            condition: Condition::Grade(String::from("ss316")),
            adjustment: Adjustment::Percentage(10.0),
            active: true,
        },
        PricingRule {
            id: String::from("3"),
            name: String::from("Small Order Fee"),
            condition: Condition::Total(Threshold::LessThan(5000.0)),
            adjustment: Adjustment::Fixed(500.0),
            active: true,
        },
    ]
}

/// Returns the bulk discount tiers a new installation starts with.
#[must_use]
pub fn default_discounts() -> Vec<BulkDiscount> {
    [
        ("1", "5+ tonnes", 5000.0, 3.0),
        ("2", "10+ tonnes", 10000.0, 5.0),
        ("3", "25+ tonnes", 25000.0, 8.0),
        ("4", "50+ tonnes", 50000.0, 12.0),
    ]
    .into_iter()
    .map(|(id, name, min_quantity, discount_percentage)| BulkDiscount {
        id: id.to_string(),
        name: name.to_string(),
        min_quantity,
        discount_percentage,
        active: true,
    })
    .collect()
}
