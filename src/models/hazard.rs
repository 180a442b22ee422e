// src/models/hazard.rs

//! District hazard status records.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Timestamp layout used by status records.
pub const STATUS_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Broad hazard family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HazardCategory {
    Flood,
    Landslide,
}

/// Severity-graded hazard kind of a district status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardKind {
    FloodMajor,
    FloodMinor,
    FloodAlert,
    LandslideHigh,
    LandslideModerate,
}

impl HazardKind {
    pub fn category(&self) -> HazardCategory {
        match self {
            HazardKind::FloodMajor | HazardKind::FloodMinor | HazardKind::FloodAlert => {
                HazardCategory::Flood
            }
            HazardKind::LandslideHigh | HazardKind::LandslideModerate => HazardCategory::Landslide,
        }
    }

    /// Legend label.
    pub fn label(&self) -> &'static str {
        match self {
            HazardKind::FloodMajor => "Major Flood",
            HazardKind::FloodMinor => "Minor Flood",
            HazardKind::FloodAlert => "Flood Alert",
            HazardKind::LandslideHigh => "High Landslide Risk",
            HazardKind::LandslideModerate => "Moderate Landslide Risk",
        }
    }
}

/// Hazard selection offered by the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HazardFilter {
    #[default]
    All,
    Flood,
    Landslide,
}

impl HazardFilter {
    pub fn matches(&self, kind: HazardKind) -> bool {
        match self {
            HazardFilter::All => true,
            HazardFilter::Flood => kind.category() == HazardCategory::Flood,
            HazardFilter::Landslide => kind.category() == HazardCategory::Landslide,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HazardFilter::All => "All hazards",
            HazardFilter::Flood => "Floods",
            HazardFilter::Landslide => "Landslides",
        }
    }
}

impl fmt::Display for HazardFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HazardFilter::All => "all",
            HazardFilter::Flood => "flood",
            HazardFilter::Landslide => "landslide",
        })
    }
}

impl FromStr for HazardFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(HazardFilter::All),
            "flood" => Ok(HazardFilter::Flood),
            "landslide" => Ok(HazardFilter::Landslide),
            _ => Err(AppError::validation(format!(
                "unknown hazard filter '{s}' (expected all, flood or landslide)"
            ))),
        }
    }
}

/// Current hazard situation of one district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistrictStatus {
    pub id: String,
    pub district: String,
    pub hazard: HazardKind,
    pub severity_label: String,
    pub description: String,
    pub people_affected: u32,
    /// `YYYY-MM-DD HH:MM`, local time of the reporting agency
    pub last_updated: String,
}

impl DistrictStatus {
    /// Parsed `last_updated`, if it follows [`STATUS_TIME_FORMAT`].
    pub fn updated_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.last_updated.trim(), STATUS_TIME_FORMAT).ok()
    }
}

/// Most recent update time across a collection.
pub fn latest_update<'a>(
    statuses: impl IntoIterator<Item = &'a DistrictStatus>,
) -> Option<NaiveDateTime> {
    statuses.into_iter().filter_map(DistrictStatus::updated_at).max()
}
