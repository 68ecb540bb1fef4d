//! Energy expenditure estimation with the ACSM walking equation.
//!
//! The estimator works on [`NormalizedInputs`] only. Normalization already
//! guarantees finite, in-range values, so nothing here can fail.
//!
//! ```text
//! speed (m/min) = km/h × 1000 / 60
//! VO2 (ml/kg/min) = 0.1 × speed + 1.8 × speed × grade + 3.5
//! kcal/min = VO2 × weight / 1000 × 5
//! ```

use crate::domain::{EstimateResult, NormalizedInputs};

pub mod grid;

pub use grid::{GridCell, estimate_grid};

/// Oxygen cost of horizontal walking, ml/kg per metre.
pub const HORIZONTAL_COST: f64 = 0.1;
/// Oxygen cost of vertical work, ml/kg per metre of travel per unit grade.
pub const VERTICAL_COST: f64 = 1.8;
/// Resting oxygen uptake (1 MET), ml/kg/min.
pub const RESTING_VO2: f64 = 3.5;
/// Energy released per litre of oxygen consumed.
pub const KCAL_PER_LITRE_O2: f64 = 5.0;

/// km/h to m/min.
pub fn speed_m_per_min(speed_kmh: f64) -> f64 {
    speed_kmh * 1000.0 / 60.0
}

/// Percent to fraction.
pub fn grade_fraction(grade_percent: f64) -> f64 {
    grade_percent / 100.0
}

/// Gross oxygen uptake in ml/kg/min.
pub fn walking_vo2(speed_kmh: f64, grade_percent: f64) -> f64 {
    let speed = speed_m_per_min(speed_kmh);
    let grade = grade_fraction(grade_percent);
    HORIZONTAL_COST * speed + VERTICAL_COST * speed * grade + RESTING_VO2
}

/// Whole-body kcal/min for a per-kg VO2.
pub fn kcal_per_min(vo2: f64, weight_kg: f64) -> f64 {
    (vo2 * weight_kg / 1000.0) * KCAL_PER_LITRE_O2
}

/// Run the estimator on validated inputs.
pub fn estimate(input: &NormalizedInputs) -> EstimateResult {
    let vo2 = walking_vo2(input.speed_kmh(), input.grade_percent());
    let kcal_per_min = kcal_per_min(vo2, input.weight_kg());
    EstimateResult {
        vo2,
        kcal_per_min,
        total_kcal: kcal_per_min * input.duration_min(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawInputs;
    use crate::normalize::normalize;

    fn run(w: f64, s: f64, g: f64, d: f64) -> EstimateResult {
        let n = normalize(&RawInputs {
            weight_kg: w,
            speed_kmh: s,
            grade_percent: g,
            duration_min: d,
        })
        .unwrap();
        estimate(&n)
    }

    #[test]
    fn reference_scenario() {
        let r = run(70.0, 5.0, 10.0, 30.0);
        assert!((speed_m_per_min(5.0) - 83.333_333).abs() < 1e-5);
        assert!((r.vo2 - 26.833_333).abs() < 1e-5);
        assert!((r.kcal_per_min - 9.391_666).abs() < 1e-5);
        assert!((r.total_kcal - 281.75).abs() < 1e-9);
        assert_eq!(r.total_kcal.round(), 282.0);
    }

    #[test]
    fn flat_walk_uses_horizontal_and_resting_terms_only() {
        let r = run(80.0, 6.0, 0.0, 60.0);
        // 100 m/min -> 10 + 3.5
        assert!((r.vo2 - 13.5).abs() < 1e-12);
        assert!((r.kcal_per_min - 5.4).abs() < 1e-12);
        assert!((r.total_kcal - 324.0).abs() < 1e-9);
    }

    #[test]
    fn clamped_weight_matches_boundary_weight() {
        assert_eq!(run(300.0, 5.0, 10.0, 30.0), run(250.0, 5.0, 10.0, 30.0));
        assert_eq!(run(70.0, 15.0, 10.0, 30.0), run(70.0, 9.0, 10.0, 30.0));
    }

    #[test]
    fn strictly_increasing_in_speed() {
        let mut prev = run(70.0, 0.5, 8.0, 30.0).total_kcal;
        let mut s = 0.5;
        while s < 9.0 {
            s += 0.25;
            let next = run(70.0, s, 8.0, 30.0).total_kcal;
            assert!(next > prev, "speed {s}: {next} <= {prev}");
            prev = next;
        }
    }

    #[test]
    fn strictly_increasing_in_grade() {
        let mut prev = run(70.0, 4.0, 0.0, 30.0).total_kcal;
        for g in 1..=30 {
            let next = run(70.0, 4.0, g as f64, 30.0).total_kcal;
            assert!(next > prev, "grade {g}: {next} <= {prev}");
            prev = next;
        }
    }

    #[test]
    fn linear_in_duration() {
        for d in [1.0, 7.5, 30.0, 45.0, 300.0] {
            let single = run(70.0, 5.0, 10.0, d).total_kcal;
            let double = run(70.0, 5.0, 10.0, 2.0 * d).total_kcal;
            assert_eq!(double, 2.0 * single);
        }
    }

    #[test]
    fn results_are_positive_across_domain() {
        let r = run(20.0, 0.5, 0.0, 1.0);
        assert!(r.vo2 > 0.0 && r.kcal_per_min > 0.0 && r.total_kcal > 0.0);
    }
}
