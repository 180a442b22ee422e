//! Volunteer help offer form record.

/// A help offer from a person or organisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpOffer {
    pub helper_name: String,
    pub helper_phone: String,
    pub helper_district: String,
    pub support_details: String,
    pub preferred_areas: String,
}

/// One field of a [`HelpOffer`] together with its new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OfferField {
    HelperName(String),
    HelperPhone(String),
    HelperDistrict(String),
    SupportDetails(String),
    PreferredAreas(String),
}

impl HelpOffer {
    /// Replace exactly one field.
    pub fn apply(&mut self, field: OfferField) {
        match field {
            OfferField::HelperName(v) => self.helper_name = v,
            OfferField::HelperPhone(v) => self.helper_phone = v,
            OfferField::HelperDistrict(v) => self.helper_district = v,
            OfferField::SupportDetails(v) => self.support_details = v,
            OfferField::PreferredAreas(v) => self.preferred_areas = v,
        }
    }
}
