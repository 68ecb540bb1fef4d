//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the input fields and their supported ranges (`Field`, `FieldRange`)
//! - raw and normalized inputs (`RawInputs`, `NormalizedInputs`)
//! - estimator output (`EstimateResult`)
//! - the output language (`Locale`)

pub mod types;

pub use types::*;
