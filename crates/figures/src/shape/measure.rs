//! Area and perimeter formulas, dispatched on the geometry variant.

use std::f64::consts::PI;

use super::types::{Geometry, Shape};
use super::validate::{validate, ValidationError};

/// Area and perimeter of a validated shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measures {
    pub area: f64,
    pub perimeter: f64,
}

impl Geometry {
    /// Pre: dimensions validated. Post: non-negative, never NaN for finite input;
    /// may be `inf` when the true area exceeds `f64::MAX` (see `evaluate`).
    #[inline]
    pub fn area(&self) -> f64 {
        match *self {
            Geometry::Rectangle { width, height } => width * height,
            Geometry::Triangle {
                side_a,
                side_b,
                side_c,
            } => {
                // Heron, split into two square roots so the radicand cannot
                // overflow before the area does. Factors are <= 0 only for
                // degenerate sides.
                let s = (side_a + side_b + side_c) / 2.0;
                let outer = (s * (s - side_a)).max(0.0).sqrt();
                let inner = ((s - side_b) * (s - side_c)).max(0.0).sqrt();
                outer * inner
            }
            Geometry::Circle { radius } => PI * radius * radius,
        }
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        match *self {
            Geometry::Rectangle { width, height } => 2.0 * (width + height),
            Geometry::Triangle {
                side_a,
                side_b,
                side_c,
            } => side_a + side_b + side_c,
            Geometry::Circle { radius } => 2.0 * PI * radius,
        }
    }
}

/// Area of `shape`. Trust the result only after `validate` succeeded.
#[inline]
pub fn area(shape: &Shape) -> f64 {
    shape.geometry.area()
}

/// Perimeter of `shape`. Trust the result only after `validate` succeeded.
#[inline]
pub fn perimeter(shape: &Shape) -> f64 {
    shape.geometry.perimeter()
}

/// Validate, then compute both measures.
///
/// Post: both measures are finite. Dimensions whose area or perimeter
/// overflows `f64` are reported as `InvalidDimension`.
pub fn evaluate(shape: &Shape) -> Result<Measures, ValidationError> {
    validate(shape)?;
    let m = Measures {
        area: area(shape),
        perimeter: perimeter(shape),
    };
    if !m.area.is_finite() {
        return Err(ValidationError::dimension("area", "measure overflows"));
    }
    if !m.perimeter.is_finite() {
        return Err(ValidationError::dimension("perimeter", "measure overflows"));
    }
    Ok(m)
}

/// Sum of `area` over `shapes` in order (0 for an empty slice).
pub fn total_area(shapes: &[Shape]) -> f64 {
    shapes.iter().map(area).sum()
}
