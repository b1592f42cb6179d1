//! Raw, form-like submissions and their conversion into validated shapes.
//!
//! A submission carries the selected kind, a color string, and untyped field
//! values keyed by name. Parsing owns every input-presence and numeric check so
//! presentation layers only forward what the user typed.

use std::collections::BTreeMap;

use super::types::{Geometry, Shape, ShapeKind, DEFAULT_COLOR};
use super::measure::evaluate;
use super::validate::{check_dimension, ValidationError};

/// Untyped submission as received from a form, CLI flags, or a CSV row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawShape {
    pub kind: Option<String>,
    pub color: String,
    pub fields: BTreeMap<String, String>,
}

impl RawShape {
    pub fn new(kind: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            color: color.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insert; later values replace earlier ones.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    fn number(&self, field: &'static str) -> Result<f64, ValidationError> {
        let raw = self
            .fields
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ValidationError::dimension(field, "value is missing"))?;
        let value: f64 = raw
            .parse()
            .map_err(|_| ValidationError::dimension(field, format!("`{raw}` is not a number")))?;
        check_dimension(field, value)?;
        Ok(value)
    }
}

/// Parse and validate a raw submission.
///
/// Post: the returned shape already passed `evaluate` (valid, finite measures). Fields not recognised for
/// the selected kind are ignored; an empty color falls back to `DEFAULT_COLOR`.
pub fn parse_shape(raw: &RawShape) -> Result<Shape, ValidationError> {
    let kind: ShapeKind = raw
        .kind
        .as_deref()
        .ok_or(ValidationError::MissingKind)?
        .parse()?;
    let geometry = match kind {
        ShapeKind::Rectangle => Geometry::Rectangle {
            width: raw.number("width")?,
            height: raw.number("height")?,
        },
        ShapeKind::Triangle => Geometry::Triangle {
            side_a: raw.number("side_a")?,
            side_b: raw.number("side_b")?,
            side_c: raw.number("side_c")?,
        },
        ShapeKind::Circle => Geometry::Circle {
            radius: raw.number("radius")?,
        },
    };
    let color = match raw.color.trim() {
        "" => DEFAULT_COLOR.to_string(),
        c => c.to_string(),
    };
    let shape = Shape::new(color, geometry);
    evaluate(&shape)?;
    Ok(shape)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_triangle_with_spanish_kind() {
        let raw = RawShape::new("Triángulo", "#A0522D")
            .with_field("side_a", "3")
            .with_field("side_b", " 4 ")
            .with_field("side_c", "5");
        let s = parse_shape(&raw).unwrap();
        assert_eq!(s, Shape::triangle("#A0522D", 3.0, 4.0, 5.0));
    }

    #[test]
    fn missing_and_unknown_kind() {
        let raw = RawShape::default();
        assert_eq!(parse_shape(&raw), Err(ValidationError::MissingKind));
        let raw = RawShape::new("  ", "");
        assert_eq!(parse_shape(&raw), Err(ValidationError::MissingKind));
        let raw = RawShape::new("hexagon", "");
        assert!(matches!(
            parse_shape(&raw),
            Err(ValidationError::UnknownKind { raw }) if raw == "hexagon"
        ));
    }

    #[test]
    fn non_numeric_and_non_positive_fields() {
        let raw = RawShape::new("circle", "").with_field("radius", "abc");
        assert!(matches!(
            parse_shape(&raw),
            Err(ValidationError::InvalidDimension { field: "radius", .. })
        ));
        let raw = RawShape::new("circle", "").with_field("radius", "-1");
        assert!(matches!(
            parse_shape(&raw),
            Err(ValidationError::InvalidDimension { field: "radius", .. })
        ));
        let raw = RawShape::new("circle", "").with_field("radius", "NaN");
        assert!(matches!(
            parse_shape(&raw),
            Err(ValidationError::InvalidDimension { field: "radius", .. })
        ));
    }

    #[test]
    fn degenerate_triangle_is_rejected_after_parsing() {
        let raw = RawShape::new("triangle", "")
            .with_field("side_a", "1")
            .with_field("side_b", "1")
            .with_field("side_c", "3");
        assert!(matches!(
            parse_shape(&raw),
            Err(ValidationError::InvalidTriangle { .. })
        ));
    }

    #[test]
    fn overflowing_rectangle_is_rejected() {
        let raw = RawShape::new("rectangle", "")
            .with_field("width", "1e200")
            .with_field("height", "1e200");
        assert!(matches!(
            parse_shape(&raw),
            Err(ValidationError::InvalidDimension { field: "area", .. })
        ));
    }

    #[test]
    fn empty_color_uses_default_and_extra_fields_are_ignored() {
        let raw = RawShape::new("rectangle", " ")
            .with_field("width", "5")
            .with_field("height", "3")
            .with_field("radius", "junk");
        let s = parse_shape(&raw).unwrap();
        assert_eq!(s.color, DEFAULT_COLOR);
        assert_eq!(s.geometry, Geometry::Rectangle { width: 5.0, height: 3.0 });
    }
}
