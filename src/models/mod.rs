// src/models/mod.rs

//! Domain models for the intake client.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod camp;
mod config;
pub mod district;
mod form;
mod hazard;
mod offer;
mod payload;
mod reference;
mod report;
mod request;

// Re-export all public types
pub use camp::{ApiReliefCamp, ReliefCamp};
pub use config::{ApiConfig, BASE_URL_ENV, Config, ReferenceConfig};
pub use district::{DISTRICTS, District, find_district, normalize_district};
pub use form::IntakeForm;
pub use hazard::{
    DistrictStatus, HazardCategory, HazardFilter, HazardKind, STATUS_TIME_FORMAT, latest_update,
};
pub use offer::{HelpOffer, OfferField};
pub use payload::{HelpOfferPayload, SosRequestPayload, coerce_number};
pub use reference::StaticReference;
pub use report::{EmergencyReport, EmergencyType, ReportField, WaterLevel, gps_location_from};
pub use request::{RequestStatus, SosRequestRecord};

/// Health answer of `GET /health/`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: String,
}
