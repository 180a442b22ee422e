// src/pipeline/intake.rs

//! Intake submission pipeline.

use crate::error::Result;
use crate::models::{Config, IntakeForm, find_district};
use crate::services::{ApiClient, FormSession, Notice, SubmitOutcome, encode_payload, validate};

/// Fill a form from `fields` and submit it once.
///
/// With `dry_run` the record is validated and its payload printed instead
/// of sent.
pub async fn run_intake<F: IntakeForm>(
    config: &Config,
    fields: Vec<F::Field>,
    dry_run: bool,
) -> Result<()> {
    let session = FormSession::<F>::new();
    for field in fields {
        session.set(field);
    }

    if dry_run {
        let record = session.snapshot();
        validate(record.as_ref())?;
        let payload: serde_json::Value = serde_json::from_slice(&encode_payload(record.as_ref())?)?;
        println!("{}", serde_json::to_string_pretty(&payload)?);
        log::info!("Dry run: {} not sent", F::KIND);
        return Ok(());
    }

    let client = ApiClient::from_config(&config.api)?;
    log::info!("Sending {} to {}", F::KIND, client.base_url());

    match session.submit(&client).await {
        SubmitOutcome::Accepted(ack) => {
            if let Some(Notice::Success(message)) = session.notice() {
                log::info!("{}", message);
            }
            if let Some(body) = ack.body {
                log::info!("Server acknowledgement: {}", body);
            }
            Ok(())
        }
        SubmitOutcome::Failed(e) => {
            if let Some(Notice::Error(message)) = session.notice() {
                log::error!("{}", message);
            }
            Err(e.into())
        }
        SubmitOutcome::Busy => Ok(()),
    }
}

/// Warn about a district outside the known list. The set stays open.
pub fn check_district(name: &str) {
    if !name.is_empty() && find_district(name).is_none() {
        log::warn!("District '{}' is not a known district; sending as typed", name);
    }
}
