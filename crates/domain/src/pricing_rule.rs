// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pricing rule definitions.
//!
//! A rule pairs a [`Condition`] with an [`Adjustment`]. Each condition
//! variant carries only the comparisons that make sense for it, so a
//! combination such as "grade greater than" cannot be constructed.
//!
//! Rules are stored in a flat record shape
//! (`condition`/`operator`/`value`/`adjustmentType`/`adjustmentValue`).
//! [`PricingRuleRecord`] is that wire form; conversion into [`PricingRule`]
//! coerces numeric text and rejects illegal combinations.

use crate::error::DomainError;
use crate::numeric::{LooseValue, finite_or_zero};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Comparison operator as named in stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    /// Strictly greater than.
    GreaterThan,
    /// Strictly less than.
    LessThan,
    /// Exactly equal.
    Equals,
}

impl Operator {
    /// Converts this operator to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::GreaterThan => "greater_than",
            Self::LessThan => "less_than",
            Self::Equals => "equals",
        }
    }
}

impl FromStr for Operator {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greater_than" => Ok(Self::GreaterThan),
            "less_than" => Ok(Self::LessThan),
            "equals" => Ok(Self::Equals),
            _ => Err(DomainError::UnknownOperator(s.to_string())),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The quantity a condition inspects, as named in stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKind {
    /// Piece count.
    Quantity,
    /// Total weight in kilograms.
    Weight,
    /// Running subtotal.
    Total,
    /// Selected material grade.
    Grade,
}

impl ConditionKind {
    /// Converts this condition kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quantity => "quantity",
            Self::Weight => "weight",
            Self::Total => "total",
            Self::Grade => "grade",
        }
    }
}

impl FromStr for ConditionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quantity" => Ok(Self::Quantity),
            "weight" => Ok(Self::Weight),
            "total" => Ok(Self::Total),
            "grade" => Ok(Self::Grade),
            _ => Err(DomainError::UnknownCondition(s.to_string())),
        }
    }
}

/// An ordering comparison against a numeric threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Threshold {
    /// Matches values strictly above the threshold.
    GreaterThan(f64),
    /// Matches values strictly below the threshold.
    LessThan(f64),
}

impl Threshold {
    /// Returns whether `observed` satisfies this threshold.
    #[must_use]
    pub fn matches(&self, observed: f64) -> bool {
        match *self {
            Self::GreaterThan(limit) => observed > limit,
            Self::LessThan(limit) => observed < limit,
        }
    }

    /// Returns the operator used by this threshold.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        match self {
            Self::GreaterThan(_) => Operator::GreaterThan,
            Self::LessThan(_) => Operator::LessThan,
        }
    }

    /// Returns the threshold value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match *self {
            Self::GreaterThan(limit) | Self::LessThan(limit) => limit,
        }
    }

    fn from_parts(
        kind: ConditionKind,
        operator: Operator,
        value: f64,
    ) -> Result<Self, DomainError> {
        match operator {
            Operator::GreaterThan => Ok(Self::GreaterThan(value)),
            Operator::LessThan => Ok(Self::LessThan(value)),
            Operator::Equals => Err(DomainError::UnsupportedOperator {
                condition: kind.as_str().to_string(),
                operator: operator.as_str().to_string(),
            }),
        }
    }
}

/// A comparison against a piece count. Equality is allowed here because
/// piece counts are whole numbers entered by hand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QuantityTest {
    /// Matches counts strictly above the value.
    GreaterThan(f64),
    /// Matches counts strictly below the value.
    LessThan(f64),
    /// Matches counts exactly equal to the value.
    Equals(f64),
}

impl QuantityTest {
    /// Returns whether `quantity` satisfies this test.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn matches(&self, quantity: f64) -> bool {
        match *self {
            Self::GreaterThan(limit) => quantity > limit,
            Self::LessThan(limit) => quantity < limit,
            Self::Equals(expected) => quantity == expected,
        }
    }

    /// Returns the operator used by this test.
    #[must_use]
    pub const fn operator(&self) -> Operator {
        match self {
            Self::GreaterThan(_) => Operator::GreaterThan,
            Self::LessThan(_) => Operator::LessThan,
            Self::Equals(_) => Operator::Equals,
        }
    }

    /// Returns the comparison value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match *self {
            Self::GreaterThan(v) | Self::LessThan(v) | Self::Equals(v) => v,
        }
    }
}

/// The predicate of a pricing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// Compares the piece count.
    Quantity(QuantityTest),
    /// Compares the total weight in kilograms.
    Weight(Threshold),
    /// Compares the running subtotal at the point the rule is evaluated.
    Total(Threshold),
    /// Matches when the selected grade equals this value.
    Grade(String),
    /// A stored condition whose parts do not form a valid comparison.
    /// It never matches.
    Inert(InertCondition),
}

/// The raw parts of a stored condition that could not be interpreted, such
/// as `grade` with `greater_than`, an empty grade or an unknown condition
/// name. They are kept verbatim so the record is written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InertCondition {
    /// Condition name as stored.
    pub condition: String,
    /// Operator name as stored.
    pub operator: String,
    /// Comparison value as stored.
    pub value: LooseValue,
}

impl Condition {
    /// Builds a condition from typed parts.
    ///
    /// Numeric conditions coerce `value` to a number (non-numeric text
    /// becomes `0`). Grade conditions take `value` as text.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The operator is not valid for the condition kind
    /// - A grade condition has an empty grade value
    pub fn from_parts(
        kind: ConditionKind,
        operator: Operator,
        value: &LooseValue,
    ) -> Result<Self, DomainError> {
        match kind {
            ConditionKind::Quantity => {
                let value: f64 = value.to_number();
                Ok(Self::Quantity(match operator {
                    Operator::GreaterThan => QuantityTest::GreaterThan(value),
                    Operator::LessThan => QuantityTest::LessThan(value),
                    Operator::Equals => QuantityTest::Equals(value),
                }))
            }
            ConditionKind::Weight => Ok(Self::Weight(Threshold::from_parts(
                kind,
                operator,
                value.to_number(),
            )?)),
            ConditionKind::Total => Ok(Self::Total(Threshold::from_parts(
                kind,
                operator,
                value.to_number(),
            )?)),
            ConditionKind::Grade => {
                if operator != Operator::Equals {
                    return Err(DomainError::UnsupportedOperator {
                        condition: kind.as_str().to_string(),
                        operator: operator.as_str().to_string(),
                    });
                }
                let grade: String = value.to_text().trim().to_string();
                if grade.is_empty() {
                    return Err(DomainError::EmptyGradeValue);
                }
                Ok(Self::Grade(grade))
            }
        }
    }

    /// Builds a condition from the strings of a stored record.
    ///
    /// Parts that do not form a valid comparison produce
    /// [`Condition::Inert`] instead of an error, so one bad record never
    /// makes a stored collection unreadable.
    #[must_use]
    pub fn from_record_parts(condition: &str, operator: &str, value: &LooseValue) -> Self {
        Self::parse_record_parts(condition, operator, value).unwrap_or_else(|_| {
            Self::Inert(InertCondition {
                condition: condition.to_string(),
                operator: operator.to_string(),
                value: value.clone(),
            })
        })
    }

    fn parse_record_parts(
        condition: &str,
        operator: &str,
        value: &LooseValue,
    ) -> Result<Self, DomainError> {
        let kind: ConditionKind = condition.parse()?;
        let operator: Operator = operator.parse()?;
        Self::from_parts(kind, operator, value)
    }

    /// Returns the kind of quantity this condition inspects, or `None` for
    /// an inert condition.
    #[must_use]
    pub const fn kind(&self) -> Option<ConditionKind> {
        match self {
            Self::Quantity(_) => Some(ConditionKind::Quantity),
            Self::Weight(_) => Some(ConditionKind::Weight),
            Self::Total(_) => Some(ConditionKind::Total),
            Self::Grade(_) => Some(ConditionKind::Grade),
            Self::Inert(_) => None,
        }
    }

    /// Returns the comparison operator, or `None` for an inert condition.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Quantity(test) => Some(test.operator()),
            Self::Weight(threshold) | Self::Total(threshold) => Some(threshold.operator()),
            Self::Grade(_) => Some(Operator::Equals),
            Self::Inert(_) => None,
        }
    }

    /// Returns the condition and operator names as stored.
    fn record_names(&self) -> (String, String) {
        let (kind, operator): (ConditionKind, Operator) = match self {
            Self::Inert(inert) => return (inert.condition.clone(), inert.operator.clone()),
            Self::Quantity(test) => (ConditionKind::Quantity, test.operator()),
            Self::Weight(threshold) => (ConditionKind::Weight, threshold.operator()),
            Self::Total(threshold) => (ConditionKind::Total, threshold.operator()),
            Self::Grade(_) => (ConditionKind::Grade, Operator::Equals),
        };
        (kind.as_str().to_string(), operator.as_str().to_string())
    }

    /// Returns the comparison value in its stored form.
    #[must_use]
    pub fn value(&self) -> LooseValue {
        match self {
            Self::Quantity(test) => LooseValue::Number(test.value()),
            Self::Weight(threshold) | Self::Total(threshold) => {
                LooseValue::Number(threshold.value())
            }
            Self::Grade(grade) => LooseValue::Text(grade.clone()),
            Self::Inert(inert) => inert.value.clone(),
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (condition, operator): (String, String) = self.record_names();
        let operator: String = operator.replace('_', " ");
        write!(f, "{condition} {operator} {}", self.value().to_text())?;
        if matches!(self, Self::Inert(_)) {
            f.write_str(" (never matches)")?;
        }
        Ok(())
    }
}

/// How an adjustment amount is derived, as named in stored records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    /// A percentage of the running subtotal.
    Percentage,
    /// A fixed amount.
    Fixed,
}

impl AdjustmentType {
    /// Converts this adjustment type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }
}

impl FromStr for AdjustmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "percentage" => Ok(Self::Percentage),
            "fixed" => Ok(Self::Fixed),
            _ => Err(DomainError::UnknownAdjustmentType(s.to_string())),
        }
    }
}

/// The effect of a matching rule on the running subtotal.
///
/// Negative values are discounts, positive values are surcharges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Adjustment {
    /// Percentage of the running subtotal (`-5.0` means 5% off).
    Percentage(f64),
    /// Fixed monetary amount.
    Fixed(f64),
}

impl Adjustment {
    /// Builds an adjustment from its stored parts, coercing the value.
    #[must_use]
    pub fn from_parts(kind: AdjustmentType, value: &LooseValue) -> Self {
        match kind {
            AdjustmentType::Percentage => Self::Percentage(value.to_number()),
            AdjustmentType::Fixed => Self::Fixed(value.to_number()),
        }
    }

    /// Returns the adjustment type.
    #[must_use]
    pub const fn kind(&self) -> AdjustmentType {
        match self {
            Self::Percentage(_) => AdjustmentType::Percentage,
            Self::Fixed(_) => AdjustmentType::Fixed,
        }
    }

    /// Returns the configured value (percent or amount).
    #[must_use]
    pub const fn value(&self) -> f64 {
        match *self {
            Self::Percentage(v) | Self::Fixed(v) => v,
        }
    }

    /// Computes the signed amount this adjustment adds to `subtotal`.
    #[must_use]
    pub fn amount_for(&self, subtotal: f64) -> f64 {
        match *self {
            Self::Percentage(percent) => subtotal * (finite_or_zero(percent) / 100.0),
            Self::Fixed(amount) => finite_or_zero(amount),
        }
    }
}

impl std::fmt::Display for Adjustment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign: &str = if self.value() > 0.0 { "+" } else { "" };
        match self {
            Self::Percentage(v) => write!(f, "{sign}{v}%"),
            Self::Fixed(v) => write!(f, "{sign}{v}"),
        }
    }
}

/// The user-supplied parts of a new pricing rule, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleDraft {
    /// Display name.
    pub name: String,
    /// When the rule applies.
    pub condition: Condition,
    /// What the rule does when it applies.
    pub adjustment: Adjustment,
    /// Whether the rule takes part in evaluation.
    pub active: bool,
}

impl Default for RuleDraft {
    /// The blank template the add-rule form opens with.
    fn default() -> Self {
        Self {
            name: String::new(),
            condition: Condition::Quantity(QuantityTest::GreaterThan(0.0)),
            adjustment: Adjustment::Percentage(0.0),
            active: true,
        }
    }
}

/// A user-defined conditional price adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "PricingRuleRecord", into = "PricingRuleRecord")]
pub struct PricingRule {
    /// Unique identifier within the collection.
    pub id: String,
    /// Display name, also used as the adjustment label in a breakdown.
    pub name: String,
    /// When the rule applies.
    pub condition: Condition,
    /// What the rule does when it applies.
    pub adjustment: Adjustment,
    /// Whether the rule takes part in evaluation.
    pub active: bool,
}

impl PricingRule {
    /// Creates a rule from a draft and a freshly assigned id.
    #[must_use]
    pub fn from_draft(id: String, draft: RuleDraft) -> Self {
        Self {
            id,
            name: draft.name,
            condition: draft.condition,
            adjustment: draft.adjustment,
            active: draft.active,
        }
    }
}

/// Flat, stored form of a [`PricingRule`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRuleRecord {
    pub id: String,
    pub name: String,
    pub condition: String,
    pub operator: String,
    pub value: LooseValue,
    pub adjustment_type: String,
    pub adjustment_value: LooseValue,
    pub active: bool,
}

impl From<PricingRuleRecord> for PricingRule {
    /// Reads a stored record. This never fails: an uninterpretable
    /// condition loads as [`Condition::Inert`] and any adjustment type
    /// other than `percentage` is a fixed amount.
    fn from(record: PricingRuleRecord) -> Self {
        let condition: Condition =
            Condition::from_record_parts(&record.condition, &record.operator, &record.value);
        let adjustment_type: AdjustmentType = record
            .adjustment_type
            .parse()
            .unwrap_or(AdjustmentType::Fixed);

        Self {
            id: record.id,
            name: record.name,
            condition,
            adjustment: Adjustment::from_parts(adjustment_type, &record.adjustment_value),
            active: record.active,
        }
    }
}

impl From<PricingRule> for PricingRuleRecord {
    fn from(rule: PricingRule) -> Self {
        let (condition, operator): (String, String) = rule.condition.record_names();
        Self {
            id: rule.id,
            name: rule.name,
            condition,
            operator,
            value: rule.condition.value(),
            adjustment_type: rule.adjustment.kind().as_str().to_string(),
            adjustment_value: LooseValue::Number(rule.adjustment.value()),
            active: rule.active,
        }
    }
}
