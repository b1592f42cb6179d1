//! Ordered area listing with a running total.
//!
//! Rows are numbered per listing (1-based) and labelled with the shape kind,
//! e.g. `Rectangle 1`, `Circle 3`. The total always equals `total_area` over
//! the same shapes.

use std::fmt;

use crate::shape::{area, fixed2, total_area, Shape};

/// One listing row.
#[derive(Clone, Debug, PartialEq)]
pub struct SummaryRow {
    pub label: String,
    pub color: String,
    pub area: f64,
}

/// Area summary of an ordered sequence of shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaSummary {
    pub rows: Vec<SummaryRow>,
    pub total: f64,
}

impl AreaSummary {
    /// Pre: every shape validated (see `crate::shape::validate`).
    pub fn from_shapes(shapes: &[Shape]) -> Self {
        let rows = shapes
            .iter()
            .enumerate()
            .map(|(i, s)| SummaryRow {
                label: format!("{} {}", s.kind(), i + 1),
                color: s.color.clone(),
                area: area(s),
            })
            .collect();
        Self {
            rows,
            total: total_area(shapes),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for AreaSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            return writeln!(f, "No figures yet.");
        }
        for row in &self.rows {
            writeln!(f, "{}: {} u²", row.label, fixed2(row.area))?;
        }
        writeln!(f, "TOTAL: {} u²", fixed2(self.total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::special::reference_gallery;

    #[test]
    fn gallery_summary_renders_rows_and_total() {
        let summary = AreaSummary::from_shapes(&reference_gallery());
        assert_eq!(summary.rows.len(), 3);
        assert_eq!(
            summary.to_string(),
            "Rectangle 1: 15.00 u²\nTriangle 2: 6.00 u²\nCircle 3: 50.27 u²\nTOTAL: 71.27 u²\n"
        );
    }

    #[test]
    fn empty_summary() {
        let summary = AreaSummary::from_shapes(&[]);
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.to_string(), "No figures yet.\n");
    }
}
