//! Shared domain types.
//!
//! These types are kept small and `Copy` so they can be passed by value between
//! the normalizer, the estimator and the front ends without any shared state.

use clap::ValueEnum;
use serde::Serialize;

/// One of the four user-facing input fields.
///
/// The declaration order is the order in which fields are validated, reported
/// and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Weight,
    Speed,
    Grade,
    Duration,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Weight, Field::Speed, Field::Grade, Field::Duration];

    /// Supported physiological domain for this field.
    pub fn range(self) -> FieldRange {
        match self {
            Field::Weight => FieldRange::new(20.0, 250.0),
            Field::Speed => FieldRange::new(0.5, 9.0),
            Field::Grade => FieldRange::new(0.0, 30.0),
            Field::Duration => FieldRange::new(1.0, 600.0),
        }
    }

    /// Number of decimals used when a normalized value is shown back to the user.
    pub fn display_decimals(self) -> usize {
        match self {
            Field::Weight | Field::Speed | Field::Grade => 1,
            Field::Duration => 0,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Field::Weight => "kg",
            Field::Speed => "km/h",
            Field::Grade => "%",
            Field::Duration => "min",
        }
    }

    /// Read this field out of raw inputs.
    pub fn raw_value(self, raw: &RawInputs) -> f64 {
        match self {
            Field::Weight => raw.weight_kg,
            Field::Speed => raw.speed_kmh,
            Field::Grade => raw.grade_percent,
            Field::Duration => raw.duration_min,
        }
    }

    /// Read this field out of normalized inputs.
    pub fn value(self, input: &NormalizedInputs) -> f64 {
        match self {
            Field::Weight => input.weight_kg,
            Field::Speed => input.speed_kmh,
            Field::Grade => input.grade_percent,
            Field::Duration => input.duration_min,
        }
    }
}

/// Inclusive `[min, max]` interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `min(max(n, self.min), self.max)`.
    ///
    /// Callers must pass a finite value; NaN is rejected by validation before
    /// clamping ever runs.
    pub fn clamp(self, n: f64) -> f64 {
        n.max(self.min).min(self.max)
    }
}

/// Values exactly as entered by the user. No invariants hold yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInputs {
    pub weight_kg: f64,
    pub speed_kmh: f64,
    pub grade_percent: f64,
    pub duration_min: f64,
}

/// Inputs that passed validation and were clamped into their supported ranges.
///
/// Only [`crate::normalize::normalize`] can build one, so every instance is
/// finite and in range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedInputs {
    pub(crate) weight_kg: f64,
    pub(crate) speed_kmh: f64,
    pub(crate) grade_percent: f64,
    pub(crate) duration_min: f64,
}

impl NormalizedInputs {
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn grade_percent(&self) -> f64 {
        self.grade_percent
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }
}

impl From<NormalizedInputs> for RawInputs {
    fn from(value: NormalizedInputs) -> Self {
        RawInputs {
            weight_kg: value.weight_kg,
            speed_kmh: value.speed_kmh,
            grade_percent: value.grade_percent,
            duration_min: value.duration_min,
        }
    }
}

/// Output of one estimator run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateResult {
    /// Oxygen uptake in ml/kg/min.
    pub vo2: f64,
    pub kcal_per_min: f64,
    pub total_kcal: f64,
}

/// Language used for user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    /// Parse a locale tag such as `fr`, `en`, `en_US.UTF-8` or `fr-CA`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let lang = tag
            .trim()
            .split(['_', '-', '.'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match lang.as_str() {
            "fr" => Some(Locale::Fr),
            "en" => Some(Locale::En),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ranges_match_supported_domain() {
        assert_eq!(Field::Weight.range(), FieldRange::new(20.0, 250.0));
        assert_eq!(Field::Speed.range(), FieldRange::new(0.5, 9.0));
        assert_eq!(Field::Grade.range(), FieldRange::new(0.0, 30.0));
        assert_eq!(Field::Duration.range(), FieldRange::new(1.0, 600.0));
    }

    #[test]
    fn clamp_keeps_boundaries_and_inner_values() {
        let r = Field::Speed.range();
        assert_eq!(r.clamp(9.0), 9.0);
        assert_eq!(r.clamp(0.5), 0.5);
        assert_eq!(r.clamp(4.2), 4.2);
        assert_eq!(r.clamp(12.0), 9.0);
        assert_eq!(r.clamp(0.1), 0.5);
    }

    #[test]
    fn locale_from_tag() {
        assert_eq!(Locale::from_tag("fr"), Some(Locale::Fr));
        assert_eq!(Locale::from_tag("en_US.UTF-8"), Some(Locale::En));
        assert_eq!(Locale::from_tag("FR-ca"), Some(Locale::Fr));
        assert_eq!(Locale::from_tag("de"), None);
        assert_eq!(Locale::from_tag(""), None);
    }
}
