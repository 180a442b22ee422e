// src/models/report.rs

//! Emergency (SOS) report form record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// How high the water has risen around the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterLevel {
    None,
    Ankle,
    Knee,
    Waist,
    Chest,
    Roof,
}

impl WaterLevel {
    pub const ALL: [WaterLevel; 6] = [
        WaterLevel::None,
        WaterLevel::Ankle,
        WaterLevel::Knee,
        WaterLevel::Waist,
        WaterLevel::Chest,
        WaterLevel::Roof,
    ];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterLevel::None => "none",
            WaterLevel::Ankle => "ankle",
            WaterLevel::Knee => "knee",
            WaterLevel::Waist => "waist",
            WaterLevel::Chest => "chest",
            WaterLevel::Roof => "roof",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            WaterLevel::None => "No water",
            WaterLevel::Ankle => "Up to ankle",
            WaterLevel::Knee => "Knee level",
            WaterLevel::Waist => "Waist level",
            WaterLevel::Chest => "Above chest",
            WaterLevel::Roof => "At roof level",
        }
    }
}

impl fmt::Display for WaterLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaterLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == wanted)
            .ok_or_else(|| AppError::validation(format!("unknown water level '{s}'")))
    }
}

/// Classification of the emergency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmergencyType {
    TrappedByFlood,
    EvacuationNeeded,
    MedicalEmergency,
    LandslideRisk,
    LandslideOccurred,
    Other,
}

impl EmergencyType {
    pub const ALL: [EmergencyType; 6] = [
        EmergencyType::TrappedByFlood,
        EmergencyType::EvacuationNeeded,
        EmergencyType::MedicalEmergency,
        EmergencyType::LandslideRisk,
        EmergencyType::LandslideOccurred,
        EmergencyType::Other,
    ];

    /// Wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmergencyType::TrappedByFlood => "trapped_by_flood",
            EmergencyType::EvacuationNeeded => "evacuation_needed",
            EmergencyType::MedicalEmergency => "medical_emergency",
            EmergencyType::LandslideRisk => "landslide_risk",
            EmergencyType::LandslideOccurred => "landslide_occurred",
            EmergencyType::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            EmergencyType::TrappedByFlood => "Trapped by Flood",
            EmergencyType::EvacuationNeeded => "Evacuation Needed",
            EmergencyType::MedicalEmergency => "Medical Emergency",
            EmergencyType::LandslideRisk => "Landslide Risk",
            EmergencyType::LandslideOccurred => "Landslide Occurred",
            EmergencyType::Other => "Other",
        }
    }
}

impl fmt::Display for EmergencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmergencyType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| AppError::validation(format!("unknown emergency type '{s}'")))
    }
}

/// Format a GPS fix the way the intake form captures it.
pub fn gps_location_from(latitude: f64, longitude: f64) -> String {
    format!("{latitude:.5},{longitude:.5}")
}

/// An emergency report as typed in by the affected person.
///
/// Numeric inputs stay as the raw text; they are coerced only when the
/// wire payload is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyReport {
    // Contact
    pub full_name: String,
    pub phone_number: String,
    pub alternate_phone: String,

    // Location
    pub address: String,
    pub landmark: String,
    pub district: String,
    pub gps_location: Option<String>,

    // Current situation
    pub water_level: Option<WaterLevel>,
    pub safe_hours: String,
    pub floor_level: String,
    pub additional_info: String,
    pub needs_food: bool,
    pub needs_water: bool,
    pub needs_power: bool,
    pub phone_battery_percent: String,

    // Emergency details
    pub emergency_type: Option<EmergencyType>,
    pub number_of_people: String,
    pub has_children: bool,
    pub has_elderly: bool,
    pub has_disabled: bool,
    pub has_medical: bool,
}

impl Default for EmergencyReport {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            phone_number: String::new(),
            alternate_phone: String::new(),
            address: String::new(),
            landmark: String::new(),
            district: String::new(),
            gps_location: None,
            water_level: None,
            safe_hours: String::new(),
            floor_level: String::new(),
            additional_info: String::new(),
            needs_food: false,
            needs_water: false,
            needs_power: false,
            phone_battery_percent: String::new(),
            emergency_type: None,
            number_of_people: "1".to_string(),
            has_children: false,
            has_elderly: false,
            has_disabled: false,
            has_medical: false,
        }
    }
}

/// One field of an [`EmergencyReport`] together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportField {
    FullName(String),
    PhoneNumber(String),
    AlternatePhone(String),
    Address(String),
    Landmark(String),
    District(String),
    GpsLocation(Option<String>),
    WaterLevel(Option<WaterLevel>),
    SafeHours(String),
    FloorLevel(String),
    AdditionalInfo(String),
    NeedsFood(bool),
    NeedsWater(bool),
    NeedsPower(bool),
    PhoneBatteryPercent(String),
    EmergencyType(Option<EmergencyType>),
    NumberOfPeople(String),
    HasChildren(bool),
    HasElderly(bool),
    HasDisabled(bool),
    HasMedical(bool),
}

impl EmergencyReport {
    /// Replace exactly one field.
    pub fn apply(&mut self, field: ReportField) {
        match field {
            ReportField::FullName(v) => self.full_name = v,
            ReportField::PhoneNumber(v) => self.phone_number = v,
            ReportField::AlternatePhone(v) => self.alternate_phone = v,
            ReportField::Address(v) => self.address = v,
            ReportField::Landmark(v) => self.landmark = v,
            ReportField::District(v) => self.district = v,
            ReportField::GpsLocation(v) => self.gps_location = v,
            ReportField::WaterLevel(v) => self.water_level = v,
            ReportField::SafeHours(v) => self.safe_hours = v,
            ReportField::FloorLevel(v) => self.floor_level = v,
            ReportField::AdditionalInfo(v) => self.additional_info = v,
            ReportField::NeedsFood(v) => self.needs_food = v,
            ReportField::NeedsWater(v) => self.needs_water = v,
            ReportField::NeedsPower(v) => self.needs_power = v,
            ReportField::PhoneBatteryPercent(v) => self.phone_battery_percent = v,
            ReportField::EmergencyType(v) => self.emergency_type = v,
            ReportField::NumberOfPeople(v) => self.number_of_people = v,
            ReportField::HasChildren(v) => self.has_children = v,
            ReportField::HasElderly(v) => self.has_elderly = v,
            ReportField::HasDisabled(v) => self.has_disabled = v,
            ReportField::HasMedical(v) => self.has_medical = v,
        }
    }
}
