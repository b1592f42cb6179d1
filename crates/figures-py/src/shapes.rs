//! Shape-model bindings (kept separate so `lib.rs` stays tiny).

use std::collections::HashMap;

use crate::common::{map_validation_err, raw_from_py};
use figures::api::{describe, measure_raw, parse_shape, total_area as model_total_area};
use pyo3::prelude::*;

/// Validate a figure and return its one-line description.
#[pyfunction]
pub fn describe_shape(kind: &str, color: &str, fields: HashMap<String, String>) -> PyResult<String> {
    let shape = parse_shape(&raw_from_py(kind, color, fields)).map_err(map_validation_err)?;
    Ok(describe(&shape))
}

/// Validate a figure and return `(area, perimeter)`.
#[pyfunction]
pub fn measure_shape(kind: &str, fields: HashMap<String, String>) -> PyResult<(f64, f64)> {
    let (_, m) = measure_raw(&raw_from_py(kind, "", fields)).map_err(map_validation_err)?;
    Ok((m.area, m.perimeter))
}

/// Sum of areas over `[(kind, fields), ...]`; the first invalid entry raises.
#[pyfunction]
pub fn total_area(shapes: Vec<(String, HashMap<String, String>)>) -> PyResult<f64> {
    let parsed = shapes
        .into_iter()
        .map(|(kind, fields)| parse_shape(&raw_from_py(&kind, "", fields)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(map_validation_err)?;
    Ok(model_total_area(&parsed))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(describe_shape, m)?)?;
    m.add_function(wrap_pyfunction!(measure_shape, m)?)?;
    m.add_function(wrap_pyfunction!(total_area, m)?)?;
    Ok(())
}
