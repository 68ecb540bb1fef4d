//! Reporting: localized text, terminal formatting, and JSON output.

use serde::Serialize;

use crate::domain::{EstimateResult, Field};
use crate::normalize::{DisplayedInputs, ValidationErrors};

pub mod format;
pub mod text;

pub use format::*;

/// JSON document printed by `walkcal calc --json`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum JsonReport<'a> {
    Ok {
        inputs: &'a DisplayedInputs,
        result: &'a EstimateResult,
        adjusted: &'a [Field],
    },
    Invalid {
        errors: Vec<Field>,
    },
}

impl<'a> JsonReport<'a> {
    pub fn invalid(errors: &ValidationErrors) -> Self {
        JsonReport::Invalid {
            errors: errors.fields().collect(),
        }
    }
}
