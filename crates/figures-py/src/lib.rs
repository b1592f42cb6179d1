//! PyO3 bindings for the `figures` shape model.
//!
//! Notes
//! - Keep bindings thin and predictable: kinds and field values cross the
//!   boundary as plain strings, exactly like a form submission, and all parsing
//!   and validation happens in the Rust model.
//! - Validation failures surface as `ValueError` with the model's message.

use pyo3::prelude::*;

mod common;
mod shapes;

#[pymodule]
fn figures_native(_py: Python, m: &PyModule) -> PyResult<()> {
    shapes::register(m)?;
    m.add("__version__", figures::VERSION)?;
    Ok(())
}
