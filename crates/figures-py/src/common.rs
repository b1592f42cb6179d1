use std::collections::{BTreeMap, HashMap};

use figures::api::{RawShape, ValidationError};
use pyo3::exceptions::PyValueError;
use pyo3::PyErr;

pub fn raw_from_py(kind: &str, color: &str, fields: HashMap<String, String>) -> RawShape {
    RawShape {
        kind: Some(kind.to_string()),
        color: color.to_string(),
        fields: fields.into_iter().collect::<BTreeMap<_, _>>(),
    }
}

pub fn map_validation_err(err: ValidationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
