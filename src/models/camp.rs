// src/models/camp.rs

//! Relief camp records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A relief camp or shelter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefCamp {
    pub id: String,
    pub name: String,
    pub district: String,
    pub location: String,
    pub capacity: u32,
    pub currently_sheltered: u32,

    #[serde(default)]
    pub needs: Vec<String>,

    /// Set for camps fetched from the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReliefCamp {
    /// Occupancy as a whole percentage of capacity.
    pub fn occupancy_percent(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        let percent = f64::from(self.currently_sheltered) / f64::from(self.capacity) * 100.0;
        percent.round() as u32
    }
}

/// Relief camp as listed by `GET /relief-camps/`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiReliefCamp {
    pub id: u64,
    pub name: String,
    pub district: String,
    #[serde(default)]
    pub location_description: String,
    pub capacity: u32,
    pub current_occupancy: u32,
    /// Comma separated
    #[serde(default)]
    pub needs: String,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ApiReliefCamp> for ReliefCamp {
    fn from(camp: ApiReliefCamp) -> Self {
        Self {
            id: camp.id.to_string(),
            name: camp.name,
            district: camp.district,
            location: camp.location_description,
            capacity: camp.capacity,
            currently_sheltered: camp.current_occupancy,
            needs: camp
                .needs
                .split(',')
                .map(str::trim)
                .filter(|need| !need.is_empty())
                .map(str::to_string)
                .collect(),
            updated_at: camp.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupancy_is_rounded() {
        let camp = ReliefCamp {
            id: "camp-1".to_string(),
            name: "Kaduwela Maha Vidyalaya Camp".to_string(),
            district: "Colombo".to_string(),
            location: "Kaduwela town".to_string(),
            capacity: 400,
            currently_sheltered: 260,
            needs: vec![],
            updated_at: None,
        };
        assert_eq!(camp.occupancy_percent(), 65);

        let empty = ReliefCamp {
            capacity: 0,
            ..camp
        };
        assert_eq!(empty.occupancy_percent(), 0);
    }

    #[test]
    fn backend_camp_maps_needs_and_location() {
        let raw = r#"{
            "id": 3,
            "name": "Kegalle Temple Premises Camp",
            "district": "Kegalle",
            "location_description": "Temple hall, upper ground",
            "capacity": 200,
            "current_occupancy": 140,
            "needs": "Medical supplies, Volunteers, ",
            "created_at": "2025-11-30T08:00:00Z",
            "updated_at": "2025-11-30T09:20:00Z",
            "is_active": true
        }"#;
        let camp: ReliefCamp = serde_json::from_str::<ApiReliefCamp>(raw).unwrap().into();

        assert_eq!(camp.id, "3");
        assert_eq!(camp.location, "Temple hall, upper ground");
        assert_eq!(camp.currently_sheltered, 140);
        assert_eq!(camp.needs, vec!["Medical supplies", "Volunteers"]);
        assert!(camp.updated_at.is_some());
        assert_eq!(camp.occupancy_percent(), 70);
    }
}
