//! CSV batch input.
//!
//! Every cell is read as text (schema inference disabled) so numeric and
//! presence errors are reported by the shape parser with the field name,
//! rather than surfacing as CSV type errors.

use anyhow::{bail, Context, Result};
use figures::api::{parse_shape, RawShape, Shape, ValidationError};
use polars::prelude::*;
use std::path::Path;

/// Recognised header names. Unknown columns are ignored.
pub const COLUMNS: [&str; 8] = [
    "kind", "color", "width", "height", "side_a", "side_b", "side_c", "radius",
];

/// Parse outcome of one data row (1-based, header excluded).
#[derive(Debug)]
pub struct RowOutcome {
    pub row: usize,
    pub result: std::result::Result<Shape, ValidationError>,
}

pub fn load_csv(path: &Path) -> Result<Vec<RowOutcome>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    let rows = raw_rows(&df)?;
    Ok(rows
        .iter()
        .enumerate()
        .map(|(i, raw)| RowOutcome {
            row: i + 1,
            result: parse_shape(raw),
        })
        .collect())
}

fn raw_rows(df: &DataFrame) -> Result<Vec<RawShape>> {
    if df.column("kind").is_err() {
        bail!("missing required column `kind`");
    }
    let mut rows = vec![RawShape::default(); df.height()];
    for name in COLUMNS {
        let Ok(col) = df.column(name) else {
            continue;
        };
        let values = col
            .str()
            .with_context(|| format!("column `{name}` is not text"))?;
        for (raw, value) in rows.iter_mut().zip(values.into_iter()) {
            let Some(value) = value else {
                continue;
            };
            match name {
                "kind" => raw.kind = Some(value.to_string()),
                "color" => raw.color = value.to_string(),
                field => {
                    raw.fields.insert(field.to_string(), value.to_string());
                }
            }
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figures::api::ShapeKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn loads_valid_and_rejected_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shapes.csv");
        fs::write(
            &path,
            "kind,color,width,height,side_a,side_b,side_c,radius\n\
             rectangle,#800020,5,3,,,,\n\
             triangle,#A0522D,,,3,4,5,\n\
             circle,#8B0000,,,,,,4\n\
             triangle,#000000,,,1,1,3,\n\
             circle,#000000,,,,,,abc\n",
        )
        .unwrap();
        let out = load_csv(&path).unwrap();
        assert_eq!(out.len(), 5);
        let kinds: Vec<_> = out
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|s| s.kind()))
            .collect();
        assert_eq!(
            kinds,
            vec![ShapeKind::Rectangle, ShapeKind::Triangle, ShapeKind::Circle]
        );
        assert_eq!(out[3].row, 4);
        assert!(matches!(
            out[3].result,
            Err(ValidationError::InvalidTriangle { .. })
        ));
        assert!(matches!(
            out[4].result,
            Err(ValidationError::InvalidDimension { field: "radius", .. })
        ));
    }

    #[test]
    fn missing_kind_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "color,radius\n#fff,2\n").unwrap();
        let err = load_csv(&path).unwrap_err();
        assert!(err.to_string().contains("kind"));
    }
}
