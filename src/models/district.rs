//! Administrative districts used as location and filter keys.

/// A district with its form key and display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct District {
    pub key: &'static str,
    pub name: &'static str,
}

const fn district(key: &'static str, name: &'static str) -> District {
    District { key, name }
}

pub const DISTRICTS: [District; 25] = [
    district("ampara", "Ampara"),
    district("anuradhapura", "Anuradhapura"),
    district("badulla", "Badulla"),
    district("batticaloa", "Batticaloa"),
    district("colombo", "Colombo"),
    district("galle", "Galle"),
    district("gampaha", "Gampaha"),
    district("hambantota", "Hambantota"),
    district("jaffna", "Jaffna"),
    district("kalutara", "Kalutara"),
    district("kandy", "Kandy"),
    district("kegalle", "Kegalle"),
    district("kilinochchi", "Kilinochchi"),
    district("kurunegala", "Kurunegala"),
    district("mannar", "Mannar"),
    district("matale", "Matale"),
    district("matara", "Matara"),
    district("monaragala", "Monaragala"),
    district("mullaitivu", "Mullaitivu"),
    district("nuwara eliya", "Nuwara Eliya"),
    district("polonnaruwa", "Polonnaruwa"),
    district("puttalam", "Puttalam"),
    district("ratnapura", "Ratnapura"),
    district("trincomalee", "Trincomalee"),
    district("vavuniya", "Vavuniya"),
];

/// Case-normalised form of a district name.
pub fn normalize_district(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Look a district up by key or display name.
pub fn find_district(name: &str) -> Option<&'static District> {
    let key = normalize_district(name);
    DISTRICTS.iter().find(|d| d.key == key)
}
