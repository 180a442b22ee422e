// src/models/payload.rs

//! Wire payloads accepted by the coordination backend.
//!
//! Field order matches the backend schema so encoded bodies are stable.

use serde::Serialize;
use serde_json::Number;

use crate::models::{EmergencyReport, HelpOffer};

/// Largest integer a JSON number keeps exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Body of `POST /sos-requests/`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SosRequestPayload {
    pub full_name: String,
    pub phone_number: String,
    pub alternate_phone_number: Option<String>,
    pub address: String,
    pub landmark: String,
    pub district: String,
    pub gps_location: String,
    pub water_level: String,
    pub safe_hours: String,
    pub floor_level: String,
    pub additional_info: String,
    pub needs_food: bool,
    pub needs_medicine: bool,
    pub need_power: bool,
    pub need_water: bool,
    pub phone_battery_percentage: Option<Number>,
    pub emergency_type: String,
    pub number_of_people: Number,
    pub has_children: bool,
    pub has_elderly: bool,
    pub has_disabled: bool,
    pub has_medical: bool,
}

impl From<&EmergencyReport> for SosRequestPayload {
    fn from(report: &EmergencyReport) -> Self {
        Self {
            full_name: report.full_name.clone(),
            phone_number: report.phone_number.clone(),
            alternate_phone_number: Some(report.alternate_phone.clone())
                .filter(|phone| !phone.is_empty()),
            address: report.address.clone(),
            landmark: report.landmark.clone(),
            district: report.district.clone(),
            gps_location: report.gps_location.clone().unwrap_or_default(),
            water_level: report
                .water_level
                .map(|level| level.as_str().to_string())
                .unwrap_or_default(),
            safe_hours: report.safe_hours.clone(),
            floor_level: report.floor_level.clone(),
            additional_info: report.additional_info.clone(),
            needs_food: report.needs_food,
            // Not collected by the form yet.
            needs_medicine: false,
            need_power: report.needs_power,
            need_water: report.needs_water,
            phone_battery_percentage: coerce_number(&report.phone_battery_percent),
            emergency_type: report
                .emergency_type
                .map(|kind| kind.as_str().to_string())
                .unwrap_or_default(),
            number_of_people: coerce_number(&report.number_of_people)
                .unwrap_or_else(|| Number::from(1)),
            has_children: report.has_children,
            has_elderly: report.has_elderly,
            has_disabled: report.has_disabled,
            has_medical: report.has_medical,
        }
    }
}

/// Body of `POST /help-offers/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpOfferPayload {
    pub helper_name: String,
    pub helper_phone: String,
    pub helper_district: String,
    pub support_details: String,
    pub preferred_areas: String,
}

impl From<&HelpOffer> for HelpOfferPayload {
    fn from(offer: &HelpOffer) -> Self {
        Self {
            helper_name: offer.helper_name.clone(),
            helper_phone: offer.helper_phone.clone(),
            helper_district: offer.helper_district.clone(),
            support_details: offer.support_details.clone(),
            preferred_areas: offer.preferred_areas.clone(),
        }
    }
}

/// Turn numeric form text into a JSON number.
///
/// Blank or non-numeric text yields `None`. Whole values are kept as
/// integers so `"42"` and `"42.0"` both encode as `42`.
pub fn coerce_number(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(n) = text.parse::<u64>() {
        return Some(Number::from(n));
    }
    if let Ok(n) = text.parse::<i64>() {
        return Some(Number::from(n));
    }

    let value = text.parse::<f64>().ok().filter(|v| v.is_finite())?;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        Some(Number::from(value as i64))
    } else {
        Number::from_f64(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use serde_json::{Value, json};

    use super::*;
    use crate::models::{EmergencyType, WaterLevel};

    const SOS_KEYS: [&str; 22] = [
        "full_name",
        "phone_number",
        "alternate_phone_number",
        "address",
        "landmark",
        "district",
        "gps_location",
        "water_level",
        "safe_hours",
        "floor_level",
        "additional_info",
        "needs_food",
        "needs_medicine",
        "need_power",
        "need_water",
        "phone_battery_percentage",
        "emergency_type",
        "number_of_people",
        "has_children",
        "has_elderly",
        "has_disabled",
        "has_medical",
    ];

    fn keys(value: &Value) -> BTreeSet<String> {
        value.as_object().unwrap().keys().cloned().collect()
    }

    fn minimal_report() -> EmergencyReport {
        EmergencyReport {
            full_name: "Nimal Perera".to_string(),
            phone_number: "0771234567".to_string(),
            ..EmergencyReport::default()
        }
    }

    #[test]
    fn minimal_report_maps_empty_fields_to_defaults() {
        let value = serde_json::to_value(SosRequestPayload::from(&minimal_report())).unwrap();

        assert_eq!(
            value,
            json!({
                "full_name": "Nimal Perera",
                "phone_number": "0771234567",
                "alternate_phone_number": null,
                "address": "",
                "landmark": "",
                "district": "",
                "gps_location": "",
                "water_level": "",
                "safe_hours": "",
                "floor_level": "",
                "additional_info": "",
                "needs_food": false,
                "needs_medicine": false,
                "need_power": false,
                "need_water": false,
                "phone_battery_percentage": null,
                "emergency_type": "",
                "number_of_people": 1,
                "has_children": false,
                "has_elderly": false,
                "has_disabled": false,
                "has_medical": false,
            })
        );
    }

    #[test]
    fn key_set_is_fixed_whatever_is_filled_in() {
        let expected: BTreeSet<String> = SOS_KEYS.iter().map(|k| k.to_string()).collect();

        let full = EmergencyReport {
            alternate_phone: "0719876543".to_string(),
            address: "12 Temple Road".to_string(),
            landmark: "Near the bridge".to_string(),
            district: "colombo".to_string(),
            gps_location: Some("6.92708,79.86124".to_string()),
            water_level: Some(WaterLevel::Waist),
            safe_hours: "3".to_string(),
            floor_level: "1".to_string(),
            additional_info: "Two goats as well".to_string(),
            needs_food: true,
            needs_water: true,
            needs_power: true,
            phone_battery_percent: "15".to_string(),
            emergency_type: Some(EmergencyType::TrappedByFlood),
            number_of_people: "4".to_string(),
            has_children: true,
            has_elderly: true,
            has_disabled: true,
            has_medical: true,
            ..minimal_report()
        };

        for report in [minimal_report(), full] {
            let value = serde_json::to_value(SosRequestPayload::from(&report)).unwrap();
            assert_eq!(keys(&value), expected);
        }
    }

    #[test]
    fn flags_and_enums_map_to_backend_names() {
        let report = EmergencyReport {
            needs_water: true,
            needs_power: true,
            water_level: Some(WaterLevel::Roof),
            emergency_type: Some(EmergencyType::LandslideOccurred),
            gps_location: Some("7.25000,80.35000".to_string()),
            ..minimal_report()
        };
        let value = serde_json::to_value(SosRequestPayload::from(&report)).unwrap();

        assert_eq!(value["need_water"], json!(true));
        assert_eq!(value["need_power"], json!(true));
        assert_eq!(value["needs_food"], json!(false));
        assert_eq!(value["needs_medicine"], json!(false));
        assert_eq!(value["water_level"], json!("roof"));
        assert_eq!(value["emergency_type"], json!("landslide_occurred"));
        assert_eq!(value["gps_location"], json!("7.25000,80.35000"));
    }

    #[test]
    fn numeric_text_is_coerced() {
        let mut report = minimal_report();
        report.phone_battery_percent = "42".to_string();
        report.number_of_people = String::new();
        let value = serde_json::to_value(SosRequestPayload::from(&report)).unwrap();

        assert_eq!(value["phone_battery_percentage"], json!(42));
        assert_eq!(value["number_of_people"], json!(1));
    }

    #[test]
    fn coerce_number_handles_odd_input() {
        assert_eq!(coerce_number(""), None);
        assert_eq!(coerce_number("   "), None);
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("NaN"), None);
        assert_eq!(coerce_number(" 7 "), Some(Number::from(7)));
        assert_eq!(coerce_number("42.0"), Some(Number::from(42)));
        assert_eq!(coerce_number("-3"), Some(Number::from(-3)));
        assert_eq!(coerce_number("12.5"), Number::from_f64(12.5));
    }

    #[test]
    fn unparseable_people_count_falls_back_to_one() {
        let mut report = minimal_report();
        report.number_of_people = "a few".to_string();
        let payload = SosRequestPayload::from(&report);
        assert_eq!(payload.number_of_people, Number::from(1));
    }

    #[test]
    fn whitespace_numeric_text_counts_as_blank() {
        let mut report = minimal_report();
        report.phone_battery_percent = "  ".to_string();
        report.number_of_people = " ".to_string();
        let value = serde_json::to_value(SosRequestPayload::from(&report)).unwrap();

        assert_eq!(value["phone_battery_percentage"], Value::Null);
        assert_eq!(value["number_of_people"], json!(1));
    }

    #[test]
    fn help_offer_keeps_empty_preferred_areas() {
        let offer = HelpOffer {
            helper_name: "Lanka Relief Volunteers".to_string(),
            helper_phone: "0112345678".to_string(),
            helper_district: "gampaha".to_string(),
            support_details: "Cooked meals for 100 people per day".to_string(),
            preferred_areas: String::new(),
        };
        let value = serde_json::to_value(HelpOfferPayload::from(&offer)).unwrap();

        assert_eq!(
            value,
            json!({
                "helper_name": "Lanka Relief Volunteers",
                "helper_phone": "0112345678",
                "helper_district": "gampaha",
                "support_details": "Cooked meals for 100 people per day",
                "preferred_areas": "",
            })
        );
    }
}
