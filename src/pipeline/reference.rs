// src/pipeline/reference.rs

//! Read-only views: relief camps, district hazards, districts, stored SOS
//! requests and backend health.

use crate::error::Result;
use crate::models::{
    Config, DISTRICTS, HazardFilter, ReliefCamp, RequestStatus, STATUS_TIME_FORMAT,
    StaticReference, latest_update,
};
use crate::services::{ApiClient, filter_camps, filter_statuses};

/// Reference data from the configured file, or the built-in set.
pub fn load_reference(config: &Config) -> StaticReference {
    match &config.reference.path {
        Some(path) => StaticReference::load_or_default(path),
        None => StaticReference::default(),
    }
}

/// List relief camps, optionally restricted to one district.
pub async fn run_camps(config: &Config, district: Option<&str>, live: bool) -> Result<()> {
    let camps: Vec<ReliefCamp> = if live {
        let client = ApiClient::from_config(&config.api)?;
        client.relief_camps().await?
    } else {
        load_reference(config).camps
    };

    let shown = filter_camps(&camps, district);
    log::info!("Relief camps ({} of {})", shown.len(), camps.len());
    for camp in shown {
        log::info!(
            "{} [{}] {} | {}% full ({} / {} people)",
            camp.name,
            camp.district,
            camp.location,
            camp.occupancy_percent(),
            camp.currently_sheltered,
            camp.capacity
        );
        if !camp.needs.is_empty() {
            log::info!("    Needs: {}", camp.needs.join(", "));
        }
        if let Some(updated_at) = camp.updated_at {
            log::info!("    Updated: {}", updated_at.format("%Y-%m-%d %H:%M UTC"));
        }
    }
    Ok(())
}

/// List district hazard statuses matching `filter`.
pub fn run_hazards(config: &Config, filter: HazardFilter) {
    let data = load_reference(config);
    let shown = filter_statuses(&data.statuses, filter);

    log::info!("District alerts: {} ({})", filter.label(), shown.len());
    if let Some(as_of) = latest_update(&data.statuses) {
        log::info!("As of {}", as_of.format(STATUS_TIME_FORMAT));
    }
    for status in shown {
        log::info!(
            "{} | {} | {} people affected | {}",
            status.district,
            status.severity_label,
            status.people_affected,
            status.last_updated
        );
        log::info!("    {}", status.description);
    }
}

/// List the known districts.
pub fn run_districts() {
    for district in &DISTRICTS {
        log::info!("{:<14} {}", district.key, district.name);
    }
}

/// List SOS requests stored by the backend, newest first.
pub async fn run_requests(
    config: &Config,
    district: Option<&str>,
    status: Option<RequestStatus>,
) -> Result<()> {
    let client = ApiClient::from_config(&config.api)?;
    let records = client.sos_requests(district, status).await?;

    log::info!("SOS requests ({})", records.len());
    for record in &records {
        let kind = record
            .emergency_type()
            .map(|kind| kind.label())
            .unwrap_or("Unspecified");
        log::info!(
            "#{} {} | {} | {} | {} people | {}",
            record.id,
            record.created_at.format("%Y-%m-%d %H:%M UTC"),
            record.district,
            kind,
            record.number_of_people,
            record.status.label()
        );
        log::info!("    {} {}", record.full_name, record.phone_number);
        if let Some(level) = record.water_level() {
            log::info!("    Water: {}", level.label());
        }
        if record.has_vulnerable() {
            log::info!("    Vulnerable people in group");
        }
    }
    Ok(())
}

/// Check that the backend answers.
pub async fn run_health(config: &Config) -> Result<()> {
    let client = ApiClient::from_config(&config.api)?;
    let health = client.health().await?;
    log::info!(
        "Backend at {}: {} {}",
        client.base_url(),
        health.status,
        health.message
    );
    Ok(())
}
