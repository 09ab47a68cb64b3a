// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The geometric category of a steel product.
///
/// The family decides which dimension fields are required and which
/// volume formula is used to derive weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFamily {
    /// Solid round section: rebar, round bar, wire.
    Circular,
    /// Solid rectangular section with length in metres: structural, flat bar.
    Rectangular,
    /// Rectangular section with length in millimetres.
    Sheet,
    /// Hollow round section.
    Pipe,
    /// L-section approximated as two legs minus their overlap.
    Angle,
}

impl ShapeFamily {
    /// All shape families in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Circular,
        Self::Rectangular,
        Self::Sheet,
        Self::Pipe,
        Self::Angle,
    ];

    /// Converts this shape family to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Circular => "circular",
            Self::Rectangular => "rectangular",
            Self::Sheet => "sheet",
            Self::Pipe => "pipe",
            Self::Angle => "angle",
        }
    }

    /// Returns the dimension fields a form must collect for this family.
    #[must_use]
    pub const fn required_fields(&self) -> &'static [DimensionField] {
        match self {
            Self::Circular => &[DimensionField::Diameter, DimensionField::Length],
            Self::Pipe => &[
                DimensionField::Diameter,
                DimensionField::Thickness,
                DimensionField::Length,
            ],
            Self::Rectangular | Self::Sheet | Self::Angle => &[
                DimensionField::Length,
                DimensionField::Width,
                DimensionField::Thickness,
            ],
        }
    }
}

impl FromStr for ShapeFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "circular" => Ok(Self::Circular),
            "rectangular" => Ok(Self::Rectangular),
            "sheet" => Ok(Self::Sheet),
            "pipe" => Ok(Self::Pipe),
            "angle" => Ok(Self::Angle),
            _ => Err(DomainError::UnknownShapeFamily(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single input field of the dimensions form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DimensionField {
    /// Outer diameter in millimetres.
    Diameter,
    /// Length; metres for most families, millimetres for sheets.
    Length,
    /// Width in millimetres.
    Width,
    /// Wall or plate thickness in millimetres.
    Thickness,
}

/// Physical dimensions and piece count entered for a quote.
///
/// Every measurement is optional because the form is evaluated while the
/// user is still typing. A missing required field simply yields zero weight.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dimensions {
    /// Length in metres (millimetres for the sheet family).
    pub length_m: Option<f64>,
    /// Width in millimetres.
    pub width_mm: Option<f64>,
    /// Thickness in millimetres.
    pub thickness_mm: Option<f64>,
    /// Diameter in millimetres.
    pub diameter_mm: Option<f64>,
    /// Number of pieces.
    pub quantity: f64,
}

impl Dimensions {
    /// Creates dimensions with only a piece count set.
    #[must_use]
    pub const fn with_quantity(quantity: f64) -> Self {
        Self {
            length_m: None,
            width_mm: None,
            thickness_mm: None,
            diameter_mm: None,
            quantity,
        }
    }

    /// Dimensions a fresh calculator session starts with.
    #[must_use]
    pub const fn session_defaults() -> Self {
        Self {
            length_m: Some(12.0),
            width_mm: None,
            thickness_mm: None,
            diameter_mm: Some(12.0),
            quantity: 1.0,
        }
    }

    /// Returns the value of one field.
    #[must_use]
    pub const fn field(&self, field: DimensionField) -> Option<f64> {
        match field {
            DimensionField::Diameter => self.diameter_mm,
            DimensionField::Length => self.length_m,
            DimensionField::Width => self.width_mm,
            DimensionField::Thickness => self.thickness_mm,
        }
    }

    /// Sets one field, leaving the others untouched.
    pub const fn set_field(&mut self, field: DimensionField, value: Option<f64>) {
        match field {
            DimensionField::Diameter => self.diameter_mm = value,
            DimensionField::Length => self.length_m = value,
            DimensionField::Width => self.width_mm = value,
            DimensionField::Thickness => self.thickness_mm = value,
        }
    }
}
