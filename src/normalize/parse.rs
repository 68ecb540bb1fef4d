//! Parsing of user-entered decimal numbers.
//!
//! Both `.` and `,` are accepted as decimal separator. Anything that does not
//! parse becomes NaN so that validation reports it like any other bad value.

use crate::domain::RawInputs;

/// Parse a decimal number, accepting a comma as decimal separator.
///
/// Empty or non-numeric text yields `f64::NAN`.
pub fn parse_decimal(text: &str) -> f64 {
    let normalized = text.trim().replace(',', ".");
    if normalized.is_empty() {
        return f64::NAN;
    }
    normalized.parse::<f64>().unwrap_or(f64::NAN)
}

impl RawInputs {
    /// Build raw inputs from the four text fields (weight, speed, grade, duration).
    pub fn parse(weight: &str, speed: &str, grade: &str, duration: &str) -> Self {
        RawInputs {
            weight_kg: parse_decimal(weight),
            speed_kmh: parse_decimal(speed),
            grade_percent: parse_decimal(grade),
            duration_min: parse_decimal(duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_period_and_comma() {
        assert_eq!(parse_decimal("4.5"), 4.5);
        assert_eq!(parse_decimal("4,5"), 4.5);
        assert_eq!(parse_decimal("  70 "), 70.0);
        assert_eq!(parse_decimal("-5"), -5.0);
    }

    #[test]
    fn garbage_becomes_nan() {
        assert!(parse_decimal("").is_nan());
        assert!(parse_decimal("   ").is_nan());
        assert!(parse_decimal("abc").is_nan());
        assert!(parse_decimal("4,5,6").is_nan());
    }

    #[test]
    fn parse_raw_inputs() {
        let raw = RawInputs::parse("70", "5,0", "", "30");
        assert_eq!(raw.weight_kg, 70.0);
        assert_eq!(raw.speed_kmh, 5.0);
        assert!(raw.grade_percent.is_nan());
        assert_eq!(raw.duration_min, 30.0);
    }
}
