//! Plane outlines and SVG fragments for shapes.
//!
//! Purpose
//! - Give every shape a concrete drawing in pixel space through the
//!   `Drawable` trait, with fixed per-kind pixel scales.
//! - Lay triangles out from their three sides alone: side `c` on the x-axis,
//!   apex placed by the law of cosines.
//!
//! Outlines carry their own area (shoelace or πr²), which must agree with the
//! shape's measured area times `scale²`.

use std::f64::consts::PI;

use nalgebra::Vector2;

use super::types::{Geometry, Shape};

/// Pixel scale per unit length, per kind.
#[derive(Clone, Copy, Debug)]
pub struct DrawCfg {
    pub rectangle_px: f64,
    pub triangle_px: f64,
    /// Pixels per unit of radius (the page drew a 40 px box per unit radius).
    pub circle_px: f64,
    /// Empty border around the figure in `svg_document`.
    pub margin_px: f64,
}

impl Default for DrawCfg {
    fn default() -> Self {
        Self {
            rectangle_px: 30.0,
            triangle_px: 20.0,
            circle_px: 20.0,
            margin_px: 10.0,
        }
    }
}

impl DrawCfg {
    #[inline]
    pub fn scale_for(&self, geometry: &Geometry) -> f64 {
        match geometry {
            Geometry::Rectangle { .. } => self.rectangle_px,
            Geometry::Triangle { .. } => self.triangle_px,
            Geometry::Circle { .. } => self.circle_px,
        }
    }
}

/// Outline in pixel space (y grows upward; SVG output flips it).
#[derive(Clone, Debug, PartialEq)]
pub enum Outline {
    /// Counter-clockwise vertices.
    Polygon(Vec<Vector2<f64>>),
    Circle { center: Vector2<f64>, radius: f64 },
}

impl Outline {
    /// Enclosed area (shoelace for polygons).
    pub fn area(&self) -> f64 {
        match self {
            Outline::Polygon(vs) => {
                let n = vs.len();
                let twice: f64 = (0..n)
                    .map(|k| {
                        let p = vs[k];
                        let q = vs[(k + 1) % n];
                        p.x * q.y - p.y * q.x
                    })
                    .sum();
                twice.abs() / 2.0
            }
            Outline::Circle { radius, .. } => PI * radius * radius,
        }
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> (Vector2<f64>, Vector2<f64>) {
        match self {
            Outline::Polygon(vs) => {
                let mut lo = Vector2::new(f64::INFINITY, f64::INFINITY);
                let mut hi = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
                for v in vs {
                    lo = lo.inf(v);
                    hi = hi.sup(v);
                }
                (lo, hi)
            }
            Outline::Circle { center, radius } => {
                let r = Vector2::new(*radius, *radius);
                (center - r, center + r)
            }
        }
    }

    /// Single SVG element filled with `color`, translated by `offset` and
    /// flipped so that y grows downward inside a viewport of `height` px.
    pub fn to_svg(&self, color: &str, offset: Vector2<f64>, height: f64) -> String {
        let place = |p: &Vector2<f64>| {
            let q = p + offset;
            (q.x, height - q.y)
        };
        match self {
            Outline::Polygon(vs) => {
                let points = vs
                    .iter()
                    .map(|v| {
                        let (x, y) = place(v);
                        format!("{x:.2},{y:.2}")
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                format!(r#"<polygon points="{points}" fill="{color}"/>"#)
            }
            Outline::Circle { center, radius } => {
                let (cx, cy) = place(center);
                format!(r#"<circle cx="{cx:.2}" cy="{cy:.2}" r="{radius:.2}" fill="{color}"/>"#)
            }
        }
    }
}

/// Something that can be laid out in the plane.
pub trait Drawable {
    fn outline(&self, cfg: &DrawCfg) -> Outline;
}

impl Drawable for Shape {
    /// Pre: validated shape (degenerate triangles collapse onto the x-axis).
    fn outline(&self, cfg: &DrawCfg) -> Outline {
        let k = cfg.scale_for(&self.geometry);
        match self.geometry {
            Geometry::Rectangle { width, height } => {
                let (w, h) = (width * k, height * k);
                Outline::Polygon(vec![
                    Vector2::new(0.0, 0.0),
                    Vector2::new(w, 0.0),
                    Vector2::new(w, h),
                    Vector2::new(0.0, h),
                ])
            }
            Geometry::Triangle {
                side_a,
                side_b,
                side_c,
            } => {
                let (a, b, c) = (side_a * k, side_b * k, side_c * k);
                // A=(0,0), B=(c,0); |AC|=b, |BC|=a.
                let x = (b * b + c * c - a * a) / (2.0 * c);
                let y = (b * b - x * x).max(0.0).sqrt();
                Outline::Polygon(vec![
                    Vector2::new(0.0, 0.0),
                    Vector2::new(c, 0.0),
                    Vector2::new(x, y),
                ])
            }
            Geometry::Circle { radius } => {
                let r = radius * k;
                Outline::Circle {
                    center: Vector2::new(r, r),
                    radius: r,
                }
            }
        }
    }
}

/// Standalone SVG document sized to the outline plus `cfg.margin_px`.
pub fn svg_document(shape: &Shape, cfg: &DrawCfg) -> String {
    let outline = shape.outline(cfg);
    let (lo, hi) = outline.bounds();
    let m = cfg.margin_px.max(0.0);
    let size = hi - lo + Vector2::new(2.0 * m, 2.0 * m);
    let offset = Vector2::new(m, m) - lo;
    let body = outline.to_svg(&shape.color, offset, size.y);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.2}" height="{:.2}" viewBox="0 0 {:.2} {:.2}">{}</svg>"#,
        size.x, size.y, size.x, size.y, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::area;

    #[test]
    fn triangle_outline_matches_side_lengths() {
        let s = Shape::triangle("#A0522D", 3.0, 4.0, 5.0);
        let cfg = DrawCfg::default();
        let Outline::Polygon(vs) = s.outline(&cfg) else {
            panic!("expected polygon");
        };
        let k = cfg.triangle_px;
        assert!(((vs[1] - vs[0]).norm() - 5.0 * k).abs() < 1e-9);
        assert!(((vs[2] - vs[0]).norm() - 4.0 * k).abs() < 1e-9);
        assert!(((vs[2] - vs[1]).norm() - 3.0 * k).abs() < 1e-9);
    }

    #[test]
    fn outline_area_agrees_with_measure() {
        let cfg = DrawCfg::default();
        for s in [
            Shape::rectangle("#800020", 5.0, 3.0),
            Shape::triangle("#A0522D", 4.0, 4.0, 4.0),
            Shape::triangle("#A0522D", 2.0, 3.5, 4.0),
            Shape::circle("#8B0000", 4.0),
        ] {
            let k = cfg.scale_for(&s.geometry);
            let expected = area(&s) * k * k;
            let got = s.outline(&cfg).area();
            assert!((got - expected).abs() < 1e-6 * expected, "{s:?}");
        }
    }

    #[test]
    fn svg_document_sizes_and_fills() {
        let s = Shape::rectangle("#800020", 2.0, 1.0);
        let svg = svg_document(&s, &DrawCfg::default());
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="80.00" height="50.00""#));
        assert!(svg.contains(r##"fill="#800020""##));
        assert!(svg.contains("<polygon points=\"10.00,40.00 70.00,40.00 70.00,10.00 10.00,10.00\""));
    }

    #[test]
    fn circle_svg_is_centered() {
        let s = Shape::circle("#8B0000", 1.0);
        let svg = svg_document(&s, &DrawCfg::default());
        assert!(svg.contains(r#"<circle cx="30.00" cy="30.00" r="20.00""#));
    }
}
