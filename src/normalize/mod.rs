//! Input validation and clamping.
//!
//! Raw values go through two stages:
//!
//! 1. validation: every field is checked, and all failures are collected in field order
//! 2. clamping: only when validation passed, each value is pulled into its
//!    supported range
//!
//! Clamping never produces an error. A finite, positive value outside the
//! domain of the walking equation is moved to the nearest boundary instead.

use thiserror::Error;

use crate::domain::{Field, NormalizedInputs, RawInputs};

pub mod display;
pub mod parse;

pub use display::DisplayedInputs;
pub use parse::parse_decimal;

/// A single rejected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("invalid weight")]
    InvalidWeight,
    #[error("invalid speed")]
    InvalidSpeed,
    #[error("invalid grade")]
    InvalidGrade,
    #[error("invalid duration")]
    InvalidDuration,
}

impl FieldError {
    pub fn field(self) -> Field {
        match self {
            FieldError::InvalidWeight => Field::Weight,
            FieldError::InvalidSpeed => Field::Speed,
            FieldError::InvalidGrade => Field::Grade,
            FieldError::InvalidDuration => Field::Duration,
        }
    }

    fn for_field(field: Field) -> Self {
        match field {
            Field::Weight => FieldError::InvalidWeight,
            Field::Speed => FieldError::InvalidSpeed,
            Field::Grade => FieldError::InvalidGrade,
            Field::Duration => FieldError::InvalidDuration,
        }
    }
}

/// Every field that failed validation, in `Field::ALL` order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input: {}", join_errors(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.iter().map(|e| e.field())
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    let parts: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    parts.join(", ")
}

/// Whether `value` is acceptable for `field` before clamping.
fn is_valid(field: Field, value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    match field {
        Field::Grade => value >= 0.0,
        Field::Weight | Field::Speed | Field::Duration => value > 0.0,
    }
}

/// Validate all four fields, then clamp them into their supported ranges.
///
/// On failure nothing is clamped and every failing field is reported.
pub fn normalize(raw: &RawInputs) -> Result<NormalizedInputs, ValidationErrors> {
    let errors: Vec<FieldError> = Field::ALL
        .iter()
        .copied()
        .filter(|&field| !is_valid(field, field.raw_value(raw)))
        .map(FieldError::for_field)
        .collect();

    if !errors.is_empty() {
        tracing::debug!(?errors, "input validation failed");
        return Err(ValidationErrors { errors });
    }

    Ok(NormalizedInputs {
        weight_kg: Field::Weight.range().clamp(raw.weight_kg),
        speed_kmh: Field::Speed.range().clamp(raw.speed_kmh),
        grade_percent: Field::Grade.range().clamp(raw.grade_percent),
        duration_min: Field::Duration.range().clamp(raw.duration_min),
    })
}

/// Fields whose value was changed by clamping.
pub fn adjusted_fields(raw: &RawInputs, normalized: &NormalizedInputs) -> Vec<Field> {
    Field::ALL
        .iter()
        .copied()
        .filter(|&field| field.raw_value(raw) != field.value(normalized))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(w: f64, s: f64, g: f64, d: f64) -> RawInputs {
        RawInputs {
            weight_kg: w,
            speed_kmh: s,
            grade_percent: g,
            duration_min: d,
        }
    }

    #[test]
    fn reports_every_invalid_field_in_order() {
        let err = normalize(&raw(-1.0, f64::NAN, -5.0, 0.0)).unwrap_err();
        assert_eq!(
            err.errors(),
            &[
                FieldError::InvalidWeight,
                FieldError::InvalidSpeed,
                FieldError::InvalidGrade,
                FieldError::InvalidDuration,
            ]
        );
    }

    #[test]
    fn reports_only_failing_fields() {
        let err = normalize(&raw(70.0, f64::INFINITY, 10.0, f64::NEG_INFINITY)).unwrap_err();
        assert_eq!(err.errors(), &[FieldError::InvalidSpeed, FieldError::InvalidDuration]);
        assert_eq!(err.fields().collect::<Vec<_>>(), vec![Field::Speed, Field::Duration]);
    }

    #[test]
    fn zero_grade_is_valid_but_zero_speed_is_not() {
        assert!(normalize(&raw(70.0, 5.0, 0.0, 30.0)).is_ok());
        let err = normalize(&raw(70.0, 0.0, 0.0, 30.0)).unwrap_err();
        assert_eq!(err.errors(), &[FieldError::InvalidSpeed]);
    }

    #[test]
    fn clamps_out_of_range_values_silently() {
        let n = normalize(&raw(300.0, 12.0, 45.0, 1000.0)).unwrap();
        assert_eq!(n.weight_kg(), 250.0);
        assert_eq!(n.speed_kmh(), 9.0);
        assert_eq!(n.grade_percent(), 30.0);
        assert_eq!(n.duration_min(), 600.0);

        let n = normalize(&raw(5.0, 0.1, 0.0, 0.2)).unwrap();
        assert_eq!(n.weight_kg(), 20.0);
        assert_eq!(n.speed_kmh(), 0.5);
        assert_eq!(n.grade_percent(), 0.0);
        assert_eq!(n.duration_min(), 1.0);
    }

    #[test]
    fn boundary_values_are_kept() {
        let n = normalize(&raw(250.0, 9.0, 30.0, 600.0)).unwrap();
        assert_eq!(RawInputs::from(n), raw(250.0, 9.0, 30.0, 600.0));
        let n = normalize(&raw(20.0, 0.5, 0.0, 1.0)).unwrap();
        assert_eq!(RawInputs::from(n), raw(20.0, 0.5, 0.0, 1.0));
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            raw(70.0, 5.0, 10.0, 30.0),
            raw(300.0, 12.0, 45.0, 1000.0),
            raw(0.5, 0.01, 0.0, 0.001),
            raw(250.0, 9.0, 30.0, 600.0),
            raw(81.3, 4.45, 12.5, 47.0),
        ];
        for sample in samples {
            let once = normalize(&sample).unwrap();
            let twice = normalize(&RawInputs::from(once)).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn adjusted_fields_lists_clamped_fields() {
        let input = raw(300.0, 5.0, 10.0, 0.5);
        let n = normalize(&input).unwrap();
        assert_eq!(adjusted_fields(&input, &n), vec![Field::Weight, Field::Duration]);

        let input = raw(70.0, 5.0, 10.0, 30.0);
        let n = normalize(&input).unwrap();
        assert!(adjusted_fields(&input, &n).is_empty());
    }

    #[test]
    fn validation_errors_display_lists_fields() {
        let err = normalize(&raw(-1.0, 5.0, -1.0, 30.0)).unwrap_err();
        assert_eq!(err.to_string(), "invalid input: invalid weight, invalid grade");
    }
}
