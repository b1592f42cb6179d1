//! Shape model: one sum type, pure measures, explicit validation.
//!
//! Purpose
//! - Represent rectangles, triangles, and circles as immutable values and
//!   compute area/perimeter by dispatching on the variant.
//! - Keep validation explicit: `validate` (or `evaluate`) must accept a shape
//!   before its measures are trusted.
//!
//! Why a sum type
//! - The variants share no mutable state and differ only in their formulas, so
//!   a `match` per operation replaces any base-class hierarchy.
//! - `Drawable` is the only trait seam; it is where renderers plug in.
//!
//! Code cross-refs: `Shape`, `Geometry`, `validate`, `evaluate`, `describe`,
//! `parse_shape`, `Drawable`

mod describe;
mod draw;
mod input;
mod measure;
mod types;
mod validate;

pub use describe::{describe, fixed2};
pub use draw::{svg_document, DrawCfg, Drawable, Outline};
pub use input::{parse_shape, RawShape};
pub use measure::{area, evaluate, perimeter, total_area, Measures};
pub use types::{Geometry, Shape, ShapeKind, DEFAULT_COLOR};
pub use validate::{validate, ValidationError};
