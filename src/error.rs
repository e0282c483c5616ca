//! Assessment errors.

use thiserror::Error;

/// Errors that can occur while scoring an assessment or loading its inputs.
#[derive(Debug, Error)]
pub enum AssessmentError {
    /// A selection does not belong to the catalog entry it is scored against.
    #[error("Invalid selection in {catalog} catalog for '{question_id}': {reason}")]
    InvalidSelection {
        catalog: &'static str,
        question_id: String,
        reason: String,
    },

    /// A raw trait score lies outside the accepted 0–100 / 0–1 scales.
    #[error("Trait '{name}' out of range: {value} (expected 0-100 or 0.0-1.0)")]
    InvalidTraitRange { name: &'static str, value: f64 },

    /// A unit-interval input (accelerator, brake, career centrality) is out of range.
    #[error("Value for '{field}' out of range: {value} (expected 0.0-1.0)")]
    OutOfRange { field: &'static str, value: f64 },

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parsing or serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssessmentError {
    pub(crate) fn invalid_selection(
        catalog: &'static str,
        question_id: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidSelection {
            catalog,
            question_id: question_id.into(),
            reason: reason.into(),
        }
    }
}

/// Check that a unit-interval input lies in `[0.0, 1.0]`.
pub(crate) fn ensure_unit(field: &'static str, value: f64) -> Result<f64, AssessmentError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(AssessmentError::OutOfRange { field, value })
    }
}
