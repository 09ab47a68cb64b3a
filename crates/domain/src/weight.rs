// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weight calculation by product shape.
//!
//! Per-unit volume is derived from the shape-specific formula, then
//! multiplied by the material density and the piece count.
//!
//! ## Units
//!
//! - Diameter, width and thickness are always millimetres.
//! - Length is metres, except for [`ShapeFamily::Sheet`] where the form
//!   collects it in millimetres. Sheet length is therefore divided by 1000
//!   while rectangular length is not.
//!
//! ## Partial input
//!
//! A required field that is absent, zero or non-finite makes the per-unit
//! volume zero. The calculator never rejects input; a negative or non-finite
//! result is reported as zero.

use crate::numeric::{entered, finite_or_zero, non_negative};
use crate::types::{Dimensions, ShapeFamily};
use std::f64::consts::PI;

/// Density of carbon steel in kg/m³.
pub const STEEL_DENSITY_KG_PER_M3: f64 = 7850.0;

const MM_PER_M: f64 = 1000.0;

/// Computes the volume of a single piece in cubic metres.
#[must_use]
pub fn unit_volume_m3(shape: ShapeFamily, dimensions: &Dimensions) -> f64 {
    let length = entered(dimensions.length_m);
    let width = entered(dimensions.width_mm);
    let thickness = entered(dimensions.thickness_mm);
    let diameter = entered(dimensions.diameter_mm);

    let volume = match shape {
        ShapeFamily::Circular => match (diameter, length) {
            (Some(diameter_mm), Some(length_m)) => {
                let radius_m = diameter_mm / MM_PER_M / 2.0;
                PI * radius_m * radius_m * length_m
            }
            _ => 0.0,
        },
        ShapeFamily::Rectangular => match (length, width, thickness) {
            (Some(length_m), Some(width_mm), Some(thickness_mm)) => {
                length_m * (width_mm / MM_PER_M) * (thickness_mm / MM_PER_M)
            }
            _ => 0.0,
        },
        ShapeFamily::Sheet => match (length, width, thickness) {
            (Some(length_mm), Some(width_mm), Some(thickness_mm)) => {
                (length_mm / MM_PER_M) * (width_mm / MM_PER_M) * (thickness_mm / MM_PER_M)
            }
            _ => 0.0,
        },
        ShapeFamily::Pipe => match (diameter, thickness, length) {
            (Some(diameter_mm), Some(thickness_mm), Some(length_m)) => {
                let outer_m = diameter_mm / MM_PER_M / 2.0;
                let inner_m = outer_m - thickness_mm / MM_PER_M;
                PI * (outer_m * outer_m - inner_m * inner_m) * length_m
            }
            _ => 0.0,
        },
        ShapeFamily::Angle => match (length, width, thickness) {
            (Some(length_m), Some(width_mm), Some(thickness_mm)) => {
                let width_m = width_mm / MM_PER_M;
                let thickness_m = thickness_mm / MM_PER_M;
                length_m * thickness_m * (2.0 * width_m - thickness_m)
            }
            _ => 0.0,
        },
    };

    non_negative(volume)
}

/// Computes the total weight in kilograms for `dimensions.quantity` pieces.
///
/// # Arguments
///
/// * `shape` - The shape family selecting the volume formula
/// * `dimensions` - The entered dimensions and piece count
/// * `density_kg_per_m3` - Material density
///
/// # Returns
///
/// The total weight, never negative and never `NaN`.
#[must_use]
pub fn compute_weight(shape: ShapeFamily, dimensions: &Dimensions, density_kg_per_m3: f64) -> f64 {
    let per_unit = unit_volume_m3(shape, dimensions) * finite_or_zero(density_kg_per_m3);
    non_negative(per_unit * finite_or_zero(dimensions.quantity))
}

/// Computes total weight for a shape given by name.
///
/// Unrecognized names contribute zero weight, matching how the live form
/// behaves before a valid product has been chosen.
#[must_use]
pub fn compute_weight_by_name(shape: &str, dimensions: &Dimensions, density_kg_per_m3: f64) -> f64 {
    shape
        .parse::<ShapeFamily>()
        .map_or(0.0, |family| compute_weight(family, dimensions, density_kg_per_m3))
}
