use figures::api::{fixed2, perimeter, AreaSummary, Shape};
use serde::Serialize;

/// JSON report written by `summary --out`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub rows: Vec<ReportRow>,
    pub total_area: f64,
    pub total_area_display: String,
    pub rejected: Vec<Rejected>,
}

#[derive(Debug, Serialize)]
pub struct ReportRow {
    pub label: String,
    pub color: String,
    pub area: f64,
    pub perimeter: f64,
    pub area_display: String,
}

/// A CSV row that failed validation.
#[derive(Debug, Serialize)]
pub struct Rejected {
    pub row: usize,
    pub error: String,
}

impl Report {
    /// Pre: `shapes` is the slice `summary` was built from.
    pub fn new(summary: &AreaSummary, shapes: &[Shape], rejected: Vec<Rejected>) -> Self {
        let rows = summary
            .rows
            .iter()
            .zip(shapes)
            .map(|(row, shape)| ReportRow {
                label: row.label.clone(),
                color: row.color.clone(),
                area: row.area,
                perimeter: perimeter(shape),
                area_display: fixed2(row.area),
            })
            .collect();
        Self {
            rows,
            total_area: summary.total,
            total_area_display: fixed2(summary.total),
            rejected,
        }
    }
}
