use super::measure::{area, perimeter};
use super::types::Shape;

/// Fixed-point rendering with exactly two decimals.
///
/// Rounds half away from zero after pre-rounding the scaled value to 15
/// significant digits, so decimal ties such as `1.005` round up even though
/// their binary value lies just below the tie. Uses `.` as the decimal point
/// and never inserts thousands separators. Negative zero prints as `0.00`.
pub fn fixed2(x: f64) -> String {
    if !x.is_finite() {
        return x.to_string();
    }
    let scaled = x * 100.0;
    let pre: f64 = format!("{scaled:.14e}").parse().unwrap_or(scaled);
    // Adding 0.0 folds -0.0 into +0.0.
    let rounded = pre.round() / 100.0 + 0.0;
    format!("{rounded:.2}")
}

/// Deterministic one-line summary of a shape.
///
/// Format: `<Kind> (<color>): <name> <value>, ...; area <A>, perimeter <P>`
/// where `A` and `P` come from `fixed2` and dimensions use the shortest
/// round-trip form (`5`, `2.5`).
pub fn describe(shape: &Shape) -> String {
    let dims = shape
        .geometry
        .dimensions()
        .into_iter()
        .map(|(name, value)| format!("{name} {value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{} ({}): {}; area {}, perimeter {}",
        shape.kind(),
        shape.color,
        dims,
        fixed2(area(shape)),
        fixed2(perimeter(shape))
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed2_rounds_half_away_from_zero() {
        assert_eq!(fixed2(0.125), "0.13");
        assert_eq!(fixed2(2.675_000_001), "2.68");
        assert_eq!(fixed2(15.0), "15.00");
        assert_eq!(fixed2(-0.001), "0.00");
    }

    #[test]
    fn fixed2_rounds_decimal_ties_up() {
        // Binary values sit just below the tie; the decimal literal decides.
        assert_eq!(fixed2(1.005), "1.01");
        assert_eq!(fixed2(0.285), "0.29");
        assert_eq!(fixed2(2.675), "2.68");
        assert_eq!(fixed2(-1.005), "-1.01");
        assert_eq!(fixed2(1.004), "1.00");
    }

    #[test]
    fn fixed2_has_no_thousands_separator() {
        assert_eq!(fixed2(1_234_567.891), "1234567.89");
    }

    #[test]
    fn describe_rectangle() {
        let s = Shape::rectangle("#800020", 5.0, 3.0);
        assert_eq!(
            describe(&s),
            "Rectangle (#800020): width 5, height 3; area 15.00, perimeter 16.00"
        );
    }

    #[test]
    fn describe_circle_rounds_measures() {
        let s = Shape::circle("#8B0000", 4.0);
        assert_eq!(
            describe(&s),
            "Circle (#8B0000): radius 4; area 50.27, perimeter 25.13"
        );
    }
}
