// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Safe-default numeric coercion.
//!
//! Every number that enters the pricing pipeline passes through these
//! helpers so that partially typed input degrades to zero instead of
//! propagating `NaN` or infinities into a breakdown.

use serde::{Deserialize, Serialize};

/// Returns `value` when it is finite, otherwise `0.0`.
#[must_use]
pub const fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Returns `value` when it is finite and not negative, otherwise `0.0`.
#[must_use]
pub fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

/// Treats a dimension the way a live form does: absent, zero and
/// non-finite values all count as "not entered yet".
#[must_use]
pub fn entered(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite() && *v != 0.0)
}

/// Parses free-form numeric text, falling back to `0.0`.
///
/// Surrounding whitespace is ignored. Empty or non-numeric text, and text
/// that parses to a non-finite value, all become zero.
#[must_use]
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().map_or(0.0, finite_or_zero)
}

/// A loosely typed scalar as it arrives from a form or a stored record.
///
/// Form fields may carry numbers, numeric text, booleans or free text
/// depending on which input produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    /// A JSON number.
    Number(f64),
    /// A JSON boolean.
    Flag(bool),
    /// A JSON string.
    Text(String),
    /// A JSON `null`, which is how a `NaN` form value is stored.
    Empty,
}

impl LooseValue {
    /// Coerces the value to a finite number, falling back to `0.0`.
    ///
    /// Booleans follow the usual form convention of `true = 1`.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => finite_or_zero(*n),
            Self::Flag(b) => f64::from(u8::from(*b)),
            Self::Text(s) => parse_or_zero(s),
            Self::Empty => 0.0,
        }
    }

    /// Renders the value as text.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Flag(b) => b.to_string(),
            Self::Text(s) => s.clone(),
            Self::Empty => String::new(),
        }
    }
}

impl From<f64> for LooseValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Coerces an optional loose value, treating absence as `0.0`.
#[must_use]
pub fn number_or_zero(value: Option<&LooseValue>) -> f64 {
    value.map_or(0.0, LooseValue::to_number)
}
