//! Speed × grade sweeps.
//!
//! Each cell is normalized and estimated independently, so the sweep runs in
//! parallel with rayon. Output order is row-major (speed outer, grade inner)
//! regardless of scheduling.

use rayon::prelude::*;

use crate::domain::{EstimateResult, NormalizedInputs, RawInputs};
use crate::normalize::{ValidationErrors, normalize};

/// One evaluated point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    /// Inputs after clamping.
    pub inputs: NormalizedInputs,
    pub result: EstimateResult,
}

/// Evaluate every `(speed, grade)` pair with weight and duration taken from `base`.
///
/// Fails if any pair does not pass validation.
pub fn estimate_grid(
    base: &NormalizedInputs,
    speeds: &[f64],
    grades: &[f64],
) -> Result<Vec<GridCell>, ValidationErrors> {
    let pairs: Vec<(f64, f64)> = speeds
        .iter()
        .flat_map(|&s| grades.iter().map(move |&g| (s, g)))
        .collect();

    tracing::info!(
        speeds = speeds.len(),
        grades = grades.len(),
        cells = pairs.len(),
        "estimating grid"
    );

    pairs
        .par_iter()
        .map(|&(speed_kmh, grade_percent)| -> Result<GridCell, ValidationErrors> {
            let raw = RawInputs {
                weight_kg: base.weight_kg(),
                speed_kmh,
                grade_percent,
                duration_min: base.duration_min(),
            };
            let inputs = normalize(&raw)?;
            Ok(GridCell {
                inputs,
                result: super::estimate(&inputs),
            })
        })
        .collect()
}

/// `steps` evenly spaced values from `min` to `max` inclusive.
pub fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (steps as f64 - 1.0);
            (0..steps).map(|i| min + step * i as f64).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::estimate;

    fn base() -> NormalizedInputs {
        normalize(&RawInputs {
            weight_kg: 70.0,
            speed_kmh: 5.0,
            grade_percent: 0.0,
            duration_min: 30.0,
        })
        .unwrap()
    }

    #[test]
    fn grid_is_row_major_and_matches_single_estimates() {
        let speeds = [3.0, 5.0];
        let grades = [0.0, 10.0, 20.0];
        let cells = estimate_grid(&base(), &speeds, &grades).unwrap();
        assert_eq!(cells.len(), 6);

        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.inputs.speed_kmh(), speeds[i / grades.len()]);
            assert_eq!(cell.inputs.grade_percent(), grades[i % grades.len()]);
            assert_eq!(cell.result, estimate(&cell.inputs));
        }

        let reference = &cells[4];
        assert!((reference.result.total_kcal - 281.75).abs() < 1e-9);
    }

    #[test]
    fn grid_points_are_clamped() {
        let cells = estimate_grid(&base(), &[12.0], &[40.0]).unwrap();
        assert_eq!(cells[0].inputs.speed_kmh(), 9.0);
        assert_eq!(cells[0].inputs.grade_percent(), 30.0);
    }

    #[test]
    fn grid_rejects_invalid_points() {
        let err = estimate_grid(&base(), &[5.0], &[-1.0]).unwrap_err();
        assert_eq!(err.errors(), &[crate::normalize::FieldError::InvalidGrade]);
    }

    #[test]
    fn linspace_inclusive() {
        assert_eq!(linspace(0.0, 30.0, 4), vec![0.0, 10.0, 20.0, 30.0]);
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
        assert!(linspace(0.0, 1.0, 0).is_empty());
    }
}
