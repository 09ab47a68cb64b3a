// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{assert_close, create_quantity_rule_draft, create_test_store};
use crate::{Calculator, CoreError, InMemoryRepository, PricingConfig, PricingStore, Quote};
use steelcalc_domain::{DimensionField, Dimensions, DomainError};

#[test]
fn test_new_session_defaults() {
    let calculator: Calculator = Calculator::new();
    assert_eq!(calculator.product().key, "rebar");
    assert_eq!(calculator.grade(), "fe415");
    assert_eq!(*calculator.dimensions(), Dimensions::session_defaults());
    assert_eq!(calculator.density(), 7850.0);
}

#[test]
fn test_select_product_resets_grade() {
    let mut calculator: Calculator = Calculator::new();
    calculator.select_grade("fe550");
    calculator.select_product("structural").unwrap();
    assert_eq!(calculator.grade(), "ms");
    assert_eq!(calculator.base_price(), 55.0);
}

#[test]
fn test_select_unknown_product_keeps_session() {
    let mut calculator: Calculator = Calculator::new();
    let result: Result<(), CoreError> = calculator.select_product("girder");
    assert_eq!(
        result,
        Err(CoreError::DomainViolation(DomainError::UnknownProduct(
            String::from("girder")
        )))
    );
    assert_eq!(calculator.product().key, "rebar");
}

#[test]
fn test_recompute_rebar_bundle() {
    let mut calculator: Calculator = Calculator::new();
    calculator.set_dimension(DimensionField::Length, Some(6.0));
    calculator.set_quantity(1000.0);

    let quote: Quote = calculator.recompute(&PricingConfig::seeded());
    assert_eq!(quote.product, "rebar");
    assert_eq!(quote.grade, "fe415");
    assert_close(quote.total_weight, 5326.8845, 1e-3);
    assert_close(quote.breakdown.total, 248_019.742, 1e-2);
}

#[test]
fn test_recompute_reflects_store_changes() {
    let mut store: PricingStore<InMemoryRepository> = create_test_store();
    store
        .add_rule(create_quantity_rule_draft("Exactly ten", 10.0, 20.0))
        .unwrap();
    let config: PricingConfig = store.load().unwrap();

    let mut calculator: Calculator = Calculator::new();
    calculator.select_product("flat").unwrap();
    calculator.set_dimensions(Dimensions {
        length_m: Some(6.0),
        width_mm: Some(50.0),
        thickness_mm: Some(10.0),
        diameter_mm: None,
        quantity: 10.0,
    });

    let quote: Quote = calculator.recompute(&config);
    // 6 * 0.05 * 0.01 * 7850 * 10 = 235.5 kg at 54/kg = 12,717.
    assert_close(quote.total_weight, 235.5, 1e-9);
    assert_close(quote.breakdown.base_amount, 12_717.0, 1e-6);
    assert_eq!(quote.breakdown.adjustments.len(), 1);
    assert_close(quote.breakdown.total, 15_260.4, 1e-6);
}

#[test]
fn test_missing_dimension_gives_zero_quote() {
    let mut calculator: Calculator = Calculator::new();
    calculator.set_dimension(DimensionField::Diameter, None);

    let quote: Quote = calculator.recompute(&PricingConfig::empty());
    assert_eq!(quote.total_weight, 0.0);
    assert_eq!(quote.breakdown.total, 0.0);
    assert_eq!(quote.breakdown.price_per_kg, 0.0);
}

#[test]
fn test_density_override() {
    let calculator: Calculator = Calculator::new().with_density(7850.0 * 2.0);
    let baseline: Calculator = Calculator::new();
    assert_close(
        calculator.total_weight(),
        baseline.total_weight() * 2.0,
        1e-9,
    );
}

#[test]
fn test_quote_serializes_camel_case() {
    let quote: Quote = Calculator::new().recompute(&PricingConfig::empty());
    let json: serde_json::Value = serde_json::to_value(&quote).unwrap();
    assert!(json.get("totalWeight").is_some());
    assert!(json["breakdown"].get("pricePerKg").is_some());
    assert_eq!(json["dimensions"]["lengthM"], 12.0);
}
