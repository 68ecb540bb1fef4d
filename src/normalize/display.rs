//! Redisplay of normalized inputs.
//!
//! After a successful run the front ends write the values that were actually
//! used back into the input fields, rounded per field (see
//! [`Field::display_decimals`]).

use serde::Serialize;

use crate::domain::{Field, NormalizedInputs};

/// Round `value` to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Normalized inputs rounded for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DisplayedInputs {
    pub weight_kg: f64,
    pub speed_kmh: f64,
    pub grade_percent: f64,
    pub duration_min: f64,
}

impl DisplayedInputs {
    pub fn get(&self, field: Field) -> f64 {
        match field {
            Field::Weight => self.weight_kg,
            Field::Speed => self.speed_kmh,
            Field::Grade => self.grade_percent,
            Field::Duration => self.duration_min,
        }
    }

    /// Text to put back into the input field.
    pub fn text(&self, field: Field) -> String {
        format!("{:.*}", field.display_decimals(), self.get(field))
    }
}

impl From<&NormalizedInputs> for DisplayedInputs {
    fn from(value: &NormalizedInputs) -> Self {
        let r = |field: Field| round_to(field.value(value), field.display_decimals());
        DisplayedInputs {
            weight_kg: r(Field::Weight),
            speed_kmh: r(Field::Speed),
            grade_percent: r(Field::Grade),
            duration_min: r(Field::Duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawInputs;
    use crate::normalize::normalize;

    #[test]
    fn rounds_per_field_precision() {
        let n = normalize(&RawInputs {
            weight_kg: 72.46,
            speed_kmh: 4.44,
            grade_percent: 12.34,
            duration_min: 29.5,
        })
        .unwrap();
        let shown = DisplayedInputs::from(&n);
        assert_eq!(shown.text(Field::Weight), "72.5");
        assert_eq!(shown.text(Field::Speed), "4.4");
        assert_eq!(shown.text(Field::Duration), "30");
        assert_eq!(shown.text(Field::Grade), "12.3");
    }

    #[test]
    fn clamped_values_are_redisplayed() {
        let n = normalize(&RawInputs {
            weight_kg: 300.0,
            speed_kmh: 0.2,
            grade_percent: 31.0,
            duration_min: 0.4,
        })
        .unwrap();
        let shown = DisplayedInputs::from(&n);
        assert_eq!(shown.text(Field::Weight), "250.0");
        assert_eq!(shown.text(Field::Speed), "0.5");
        assert_eq!(shown.text(Field::Grade), "30.0");
        assert_eq!(shown.text(Field::Duration), "1");
    }

    #[test]
    fn round_to_basic() {
        assert_eq!(round_to(2.25, 0), 2.0);
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(9.391_666, 1), 9.4);
    }
}
