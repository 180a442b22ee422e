// src/models/request.rs

//! SOS requests as stored by the coordination backend.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{EmergencyType, WaterLevel};

/// Rescue workflow state of a stored request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    New,
    Verified,
    InProgress,
    Resolved,
    Dismissed,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 5] = [
        RequestStatus::New,
        RequestStatus::Verified,
        RequestStatus::InProgress,
        RequestStatus::Resolved,
        RequestStatus::Dismissed,
    ];

    /// Wire value, also used for the `status` query filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::New => "new",
            RequestStatus::Verified => "verified",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Resolved => "resolved",
            RequestStatus::Dismissed => "dismissed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RequestStatus::New => "New",
            RequestStatus::Verified => "Verified",
            RequestStatus::InProgress => "In progress",
            RequestStatus::Resolved => "Resolved",
            RequestStatus::Dismissed => "Dismissed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == wanted)
            .ok_or_else(|| AppError::validation(format!("unknown request status '{s}'")))
    }
}

/// One entry of `GET /sos-requests/list/`.
///
/// Choice fields stay as the stored text because the backend allows them
/// to be blank; use [`SosRequestRecord::water_level`] and
/// [`SosRequestRecord::emergency_type`] for the typed values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SosRequestRecord {
    pub id: u64,
    pub full_name: String,
    pub phone_number: String,
    #[serde(default)]
    pub alternate_phone_number: Option<String>,

    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub landmark: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub gps_location: String,

    #[serde(default, rename = "water_level")]
    pub water_level_text: String,
    #[serde(default)]
    pub safe_hours: String,
    #[serde(default)]
    pub floor_level: String,
    #[serde(default)]
    pub additional_info: String,

    #[serde(default)]
    pub needs_food: bool,
    #[serde(default)]
    pub needs_medicine: bool,
    #[serde(default)]
    pub need_power: bool,
    #[serde(default)]
    pub need_water: bool,
    #[serde(default)]
    pub phone_battery_percentage: Option<u32>,

    #[serde(default, rename = "emergency_type")]
    pub emergency_type_text: String,
    #[serde(default = "default_people")]
    pub number_of_people: u32,
    #[serde(default)]
    pub has_children: bool,
    #[serde(default)]
    pub has_elderly: bool,
    #[serde(default)]
    pub has_disabled: bool,
    #[serde(default)]
    pub has_medical: bool,

    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: RequestStatus,
}

fn default_people() -> u32 {
    1
}

impl SosRequestRecord {
    pub fn water_level(&self) -> Option<WaterLevel> {
        self.water_level_text.parse().ok()
    }

    pub fn emergency_type(&self) -> Option<EmergencyType> {
        self.emergency_type_text.parse().ok()
    }

    /// Whether anyone in the group needs special care.
    pub fn has_vulnerable(&self) -> bool {
        self.has_children || self.has_elderly || self.has_disabled || self.has_medical
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn stored_request_deserializes() {
        let record: SosRequestRecord = serde_json::from_value(json!({
            "id": 12,
            "full_name": "Nimal Perera",
            "phone_number": "0771234567",
            "alternate_phone_number": null,
            "address": "12 Temple Road",
            "landmark": "",
            "district": "Colombo",
            "gps_location": "6.92708,79.86124",
            "water_level": "chest",
            "safe_hours": "2",
            "floor_level": "0",
            "additional_info": "",
            "needs_food": true,
            "needs_medicine": false,
            "need_power": false,
            "need_water": true,
            "phone_battery_percentage": 18,
            "emergency_type": "trapped_by_flood",
            "number_of_people": 4,
            "has_children": false,
            "has_elderly": true,
            "has_disabled": false,
            "has_medical": false,
            "created_at": "2025-11-28T06:15:00Z",
            "updated_at": "2025-11-28T06:15:00Z",
            "status": "in_progress",
            "internal_notes": "Boat team 3 dispatched"
        }))
        .unwrap();

        assert_eq!(record.id, 12);
        assert_eq!(record.water_level(), Some(WaterLevel::Chest));
        assert_eq!(record.emergency_type(), Some(EmergencyType::TrappedByFlood));
        assert_eq!(record.phone_battery_percentage, Some(18));
        assert_eq!(record.status, RequestStatus::InProgress);
        assert!(record.has_vulnerable());
    }

    #[test]
    fn blank_choices_have_no_typed_value() {
        let record: SosRequestRecord = serde_json::from_value(json!({
            "id": 1,
            "full_name": "Kamala",
            "phone_number": "0712223334",
            "water_level": "",
            "emergency_type": "",
            "created_at": "2025-11-28T08:00:00Z"
        }))
        .unwrap();

        assert_eq!(record.water_level(), None);
        assert_eq!(record.emergency_type(), None);
        assert_eq!(record.number_of_people, 1);
        assert_eq!(record.status, RequestStatus::New);
        assert!(!record.has_vulnerable());
    }

    #[test]
    fn status_parses_loosely() {
        assert_eq!(
            "In Progress".parse::<RequestStatus>().unwrap(),
            RequestStatus::InProgress
        );
        assert_eq!(
            "in-progress".parse::<RequestStatus>().unwrap(),
            RequestStatus::InProgress
        );
        assert_eq!(
            "RESOLVED".parse::<RequestStatus>().unwrap(),
            RequestStatus::Resolved
        );
        assert!("closed".parse::<RequestStatus>().is_err());
    }
}
