//! Shared estimate pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! parse -> validate/clamp -> estimate -> round for display
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use crate::domain::{EstimateResult, Field, NormalizedInputs, RawInputs};
use crate::estimate::estimate;
use crate::normalize::{DisplayedInputs, ValidationErrors, adjusted_fields, normalize};

/// All computed outputs of a single calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutput {
    pub inputs: NormalizedInputs,
    pub shown: DisplayedInputs,
    pub result: EstimateResult,
    /// Fields moved to a range boundary by clamping.
    pub adjusted: Vec<Field>,
}

/// Run the pipeline on already-parsed values.
pub fn run_estimate(raw: &RawInputs) -> Result<RunOutput, ValidationErrors> {
    let inputs = normalize(raw)?;

    let adjusted = adjusted_fields(raw, &inputs);
    if !adjusted.is_empty() {
        tracing::debug!(?adjusted, ?raw, ?inputs, "inputs clamped to supported range");
    }

    let result = estimate(&inputs);
    tracing::debug!(
        vo2 = result.vo2,
        kcal_per_min = result.kcal_per_min,
        total_kcal = result.total_kcal,
        "estimate computed"
    );

    Ok(RunOutput {
        inputs,
        shown: DisplayedInputs::from(&inputs),
        result,
        adjusted,
    })
}

/// Run the pipeline on the four text fields (weight, speed, grade, duration).
pub fn run_estimate_text(
    weight: &str,
    speed: &str,
    grade: &str,
    duration: &str,
) -> Result<RunOutput, ValidationErrors> {
    run_estimate(&RawInputs::parse(weight, speed, grade, duration))
}
