//! Reference figures shown as worked examples.
//!
//! The gallery is fixed: a 5×3 rectangle, a 3-4-5 right triangle, and a circle
//! of radius 4, in burgundy tones. Downstream smoke tests rely on its total
//! area (≈ 71.27).

use crate::shape::Shape;

/// The example figures, in display order.
pub fn reference_gallery() -> Vec<Shape> {
    vec![
        Shape::rectangle("#800020", 5.0, 3.0),
        Shape::triangle("#A0522D", 3.0, 4.0, 5.0),
        Shape::circle("#8B0000", 4.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{evaluate, total_area, validate};

    #[test]
    fn gallery_is_valid() {
        for s in reference_gallery() {
            assert!(validate(&s).is_ok(), "{s:?}");
        }
    }

    #[test]
    fn gallery_measures() {
        let g = reference_gallery();
        let m: Vec<_> = g.iter().map(|s| evaluate(s).unwrap()).collect();
        assert!((m[0].area - 15.0).abs() < 1e-12 && (m[0].perimeter - 16.0).abs() < 1e-12);
        assert!((m[1].area - 6.0).abs() < 1e-12 && (m[1].perimeter - 12.0).abs() < 1e-12);
        assert!((m[2].area - 50.27).abs() < 0.01);
        assert!((total_area(&g) - 71.27).abs() < 0.01);
    }
}
