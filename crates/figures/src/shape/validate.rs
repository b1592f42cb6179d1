use std::fmt;

use super::types::{Geometry, Shape};

/// Reasons a shape (or a raw submission) is rejected.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// A dimension is missing, non-numeric, non-finite, zero, or negative.
    InvalidDimension { field: &'static str, reason: String },
    /// The three sides fail the strict triangle inequality.
    InvalidTriangle { side_a: f64, side_b: f64, side_c: f64 },
    /// No shape kind was selected.
    MissingKind,
    /// The shape kind is not one of rectangle, triangle, circle.
    UnknownKind { raw: String },
}

impl ValidationError {
    pub(crate) fn dimension(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { field, reason } => {
                write!(f, "invalid dimension `{field}`: {reason}")
            }
            Self::InvalidTriangle {
                side_a,
                side_b,
                side_c,
            } => write!(
                f,
                "sides {side_a}, {side_b}, {side_c} do not form a triangle: \
                 the sum of any two sides must exceed the third"
            ),
            Self::MissingKind => write!(f, "no shape kind selected"),
            Self::UnknownKind { raw } => write!(
                f,
                "unknown shape kind `{raw}` (expected rectangle, triangle, or circle)"
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a single dimension: finite and strictly positive.
pub(crate) fn check_dimension(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::dimension(
            field,
            format!("{value} is not a finite number"),
        ));
    }
    if value <= 0.0 {
        return Err(ValidationError::dimension(
            field,
            format!("{value} must be greater than zero"),
        ));
    }
    Ok(())
}

/// Validate a shape before its measures are used.
///
/// Post: `Ok(())` iff every dimension is finite and strictly positive and, for
/// triangles, `a+b>c`, `a+c>b`, `b+c>a`. Dimensions are checked in
/// declaration order; the first offending field is reported.
pub fn validate(shape: &Shape) -> Result<(), ValidationError> {
    for (field, value) in shape.geometry.dimensions() {
        check_dimension(field, value)?;
    }
    if let Geometry::Triangle {
        side_a,
        side_b,
        side_c,
    } = shape.geometry
    {
        let ok = side_a + side_b > side_c && side_a + side_c > side_b && side_b + side_c > side_a;
        if !ok {
            return Err(ValidationError::InvalidTriangle {
                side_a,
                side_b,
                side_c,
            });
        }
    }
    Ok(())
}
