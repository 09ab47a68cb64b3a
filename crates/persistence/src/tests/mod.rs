// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use steelcalc_domain::{Adjustment, Condition, RuleDraft, Threshold};

pub fn create_test_rule_draft(name: &str) -> RuleDraft {
    RuleDraft {
        name: name.to_string(),
        condition: Condition::Total(Threshold::GreaterThan(100_000.0)),
        adjustment: Adjustment::Percentage(-2.0),
        active: true,
    }
}

/// A stored rules payload holding a weight rule with the `equals` operator,
/// which can never match, followed by a valid quantity rule.
pub const MIXED_RULES_PAYLOAD: &str = r#"[
    {"id":"1","name":"Exact weight","condition":"weight","operator":"equals","value":500,"adjustmentType":"fixed","adjustmentValue":25,"active":true},
    {"id":"2","name":"Bulk","condition":"quantity","operator":"greater_than","value":10,"adjustmentType":"percentage","adjustmentValue":-3,"active":true}
]"#;
