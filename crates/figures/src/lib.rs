//! Geometric figures: validation, measures, and rendering helpers.
//!
//! One shape model is shared by every surface built on top of it (CLI,
//! Python bindings, batch summaries). The core is pure and synchronous; it
//! performs no I/O and holds no state between calls.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API.
//! - Prefer `api` or `prelude` re-exports over deep module paths in callers.

pub mod api;
pub mod rand;
pub mod shape;
pub mod special;
pub mod summary;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use shape::{
    area, describe, evaluate, perimeter, total_area, validate, Geometry, Measures, Shape,
    ShapeKind, ValidationError,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::rand::{draw_shape, KindChoice, ReplayToken, SampleCfg};
    pub use crate::shape::{
        area, describe, evaluate, parse_shape, perimeter, svg_document, total_area, validate,
        DrawCfg, Drawable, Geometry, Measures, Outline, RawShape, Shape, ShapeKind,
        ValidationError,
    };
    pub use crate::special::reference_gallery;
    pub use crate::summary::AreaSummary;
}
