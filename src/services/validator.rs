// src/services/validator.rs

//! Submit-time required-field check.
//!
//! Presence only: an empty string is missing, anything else (whitespace
//! included) is present. No format or range checks are made.

use crate::error::SubmissionError;
use crate::models::IntakeForm;

/// Check the required fields of a form snapshot.
pub fn validate<F: IntakeForm>(form: &F) -> Result<(), SubmissionError> {
    let missing = form.missing_required();
    if missing.is_empty() {
        return Ok(());
    }

    log::debug!("{} is missing required fields: {}", F::KIND, missing.join(", "));
    Err(SubmissionError::Validation(F::MISSING_MESSAGE.to_string()))
}
