// src/models/reference.rs

//! Read-only situational data: relief camps and district hazard statuses.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DistrictStatus, HazardKind, ReliefCamp};

/// Static reference collections.
///
/// A fetched collection of the same shape can replace either list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticReference {
    #[serde(default)]
    pub camps: Vec<ReliefCamp>,

    #[serde(default)]
    pub statuses: Vec<DistrictStatus>,
}

impl StaticReference {
    /// Load reference data from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load reference data or return the built-in set if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Reference data load failed from {:?}: {}. Using built-in data.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }
}

impl Default for StaticReference {
    fn default() -> Self {
        Self {
            camps: defaults::camps(),
            statuses: defaults::statuses(),
        }
    }
}

mod defaults {
    use super::{DistrictStatus, HazardKind, ReliefCamp};

    fn camp(
        id: &str,
        name: &str,
        district: &str,
        location: &str,
        capacity: u32,
        currently_sheltered: u32,
        needs: &[&str],
    ) -> ReliefCamp {
        ReliefCamp {
            id: id.to_string(),
            name: name.to_string(),
            district: district.to_string(),
            location: location.to_string(),
            capacity,
            currently_sheltered,
            needs: needs.iter().map(|n| n.to_string()).collect(),
            updated_at: None,
        }
    }

    fn status(
        id: &str,
        district: &str,
        hazard: HazardKind,
        description: &str,
        people_affected: u32,
        last_updated: &str,
    ) -> DistrictStatus {
        DistrictStatus {
            id: id.to_string(),
            district: district.to_string(),
            hazard,
            severity_label: hazard.label().to_string(),
            description: description.to_string(),
            people_affected,
            last_updated: last_updated.to_string(),
        }
    }

    pub fn camps() -> Vec<ReliefCamp> {
        vec![
            camp(
                "camp-1",
                "Kaduwela Maha Vidyalaya Camp",
                "Colombo",
                "Kaduwela town, main school hall",
                400,
                260,
                &["Dry rations", "Drinking water", "Infant milk"],
            ),
            camp(
                "camp-2",
                "Gampaha Community Centre Camp",
                "Gampaha",
                "Near main bus stand",
                300,
                190,
                &["Mattresses", "Bedsheets"],
            ),
            camp(
                "camp-3",
                "Kegalle Temple Premises Camp",
                "Kegalle",
                "Temple hall, upper ground",
                200,
                140,
                &["Medical supplies", "Volunteers"],
            ),
        ]
    }

    pub fn statuses() -> Vec<DistrictStatus> {
        vec![
            status(
                "colombo-flood",
                "Colombo",
                HazardKind::FloodMajor,
                "Kelani River over spill in several GN divisions.",
                3500,
                "2025-11-30 09:30",
            ),
            status(
                "gampaha-flood",
                "Gampaha",
                HazardKind::FloodMinor,
                "Low-lying areas near Attanagalu Oya affected.",
                1200,
                "2025-11-30 09:10",
            ),
            status(
                "kegalle-landslide",
                "Kegalle",
                HazardKind::LandslideHigh,
                "Soil saturation in hilly estates; evacuation advised.",
                640,
                "2025-11-30 09:20",
            ),
            status(
                "ratnapura-flood",
                "Ratnapura",
                HazardKind::FloodAlert,
                "River levels rising; monitor closely.",
                900,
                "2025-11-30 09:05",
            ),
            status(
                "nuwara-landslide",
                "Nuwara Eliya",
                HazardKind::LandslideModerate,
                "Isolated slope failures possible in high rainfall areas.",
                300,
                "2025-11-30 08:55",
            ),
        ]
    }
}
