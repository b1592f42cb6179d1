//! Curated internal API for callers outside this crate (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI and the
//!   Python bindings. Breaking changes are allowed and expected.
//! - Prefer these re-exports for consistency across presentation surfaces.

// Shape model
pub use crate::shape::{
    area, describe, evaluate, fixed2, parse_shape, perimeter, total_area, validate, Geometry,
    Measures, RawShape, Shape, ShapeKind, ValidationError, DEFAULT_COLOR,
};
// Rendering
pub use crate::shape::{svg_document, DrawCfg, Drawable, Outline};
// Listings and fixtures
pub use crate::special::reference_gallery;
pub use crate::summary::{AreaSummary, SummaryRow};
// Random shapes
pub use crate::rand::{draw_many, draw_shape, KindChoice, ReplayToken, SampleCfg};

/// Measure a raw form submission in one call.
///
/// Pre: `raw` carries a kind and the dimension fields for that kind.
/// Post: returns the validated shape together with its measures.
pub fn measure_raw(raw: &RawShape) -> Result<(Shape, Measures), ValidationError> {
    let shape = parse_shape(raw)?;
    let measures = evaluate(&shape)?;
    Ok((shape, measures))
}
