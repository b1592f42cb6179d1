//! Basic shape types.
//!
//! - `Geometry`: the tagged variant holding the dimensions.
//! - `Shape`: a geometry plus its display color.
//! - `ShapeKind`: the variant tag alone, as selected on an input form.

use std::fmt;
use std::str::FromStr;

use super::validate::ValidationError;

/// Color used when the caller supplies none.
pub const DEFAULT_COLOR: &str = "#800020";

/// Dimensions of a figure, tagged by kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    Rectangle { width: f64, height: f64 },
    Triangle { side_a: f64, side_b: f64, side_c: f64 },
    Circle { radius: f64 },
}

impl Geometry {
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Geometry::Rectangle { .. } => ShapeKind::Rectangle,
            Geometry::Triangle { .. } => ShapeKind::Triangle,
            Geometry::Circle { .. } => ShapeKind::Circle,
        }
    }

    /// Named dimensions in declaration order.
    pub fn dimensions(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Geometry::Rectangle { width, height } => vec![("width", width), ("height", height)],
            Geometry::Triangle {
                side_a,
                side_b,
                side_c,
            } => vec![("side_a", side_a), ("side_b", side_b), ("side_c", side_c)],
            Geometry::Circle { radius } => vec![("radius", radius)],
        }
    }
}

/// Immutable figure value: geometry plus an opaque display color.
///
/// Constructors do not validate; run `validate` (or use `evaluate`) before
/// trusting measures.
#[derive(Clone, Debug, PartialEq)]
pub struct Shape {
    pub color: String,
    pub geometry: Geometry,
}

impl Shape {
    #[inline]
    pub fn new(color: impl Into<String>, geometry: Geometry) -> Self {
        Self {
            color: color.into(),
            geometry,
        }
    }
    #[inline]
    pub fn rectangle(color: impl Into<String>, width: f64, height: f64) -> Self {
        Self::new(color, Geometry::Rectangle { width, height })
    }
    #[inline]
    pub fn triangle(color: impl Into<String>, side_a: f64, side_b: f64, side_c: f64) -> Self {
        Self::new(
            color,
            Geometry::Triangle {
                side_a,
                side_b,
                side_c,
            },
        )
    }
    #[inline]
    pub fn circle(color: impl Into<String>, radius: f64) -> Self {
        Self::new(color, Geometry::Circle { radius })
    }
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.geometry.kind()
    }
}

/// Variant tag of a `Geometry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Rectangle,
    Triangle,
    Circle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Triangle, ShapeKind::Circle];

    /// Display label ("Rectangle", "Triangle", "Circle").
    pub fn label(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Circle => "Circle",
        }
    }

    /// Input field names recognised for this kind, in order.
    pub fn field_names(self) -> &'static [&'static str] {
        match self {
            ShapeKind::Rectangle => &["width", "height"],
            ShapeKind::Triangle => &["side_a", "side_b", "side_c"],
            ShapeKind::Circle => &["radius"],
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShapeKind {
    type Err = ValidationError;

    /// Accepts the English names and the Spanish form values
    /// (`rectangulo`, `triangulo`, `circulo`), case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        match key.as_str() {
            "" => Err(ValidationError::MissingKind),
            "rectangle" | "rectangulo" | "rectángulo" => Ok(ShapeKind::Rectangle),
            "triangle" | "triangulo" | "triángulo" => Ok(ShapeKind::Triangle),
            "circle" | "circulo" | "círculo" => Ok(ShapeKind::Circle),
            _ => Err(ValidationError::UnknownKind { raw: s.to_string() }),
        }
    }
}
