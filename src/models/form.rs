//! Behaviour shared by the intake form records.

use serde::Serialize;

use crate::models::{
    EmergencyReport, HelpOffer, HelpOfferPayload, OfferField, ReportField, SosRequestPayload,
};

/// A form record that can be edited field by field and submitted.
pub trait IntakeForm: Clone + Default + Send + Sync + 'static {
    /// Single-field update.
    type Field: Send;

    /// Wire body.
    type Payload: Serialize + Send;

    /// Name used in log lines.
    const KIND: &'static str;

    /// Resource path below the API base URL.
    const RESOURCE: &'static str;

    /// Shown when a required field is empty.
    const MISSING_MESSAGE: &'static str;

    /// Shown after the backend accepted the record.
    const SUCCESS_MESSAGE: &'static str;

    /// Replace one field, leaving the others unchanged.
    fn set(&mut self, field: Self::Field);

    /// Names of the required fields that are currently empty.
    fn missing_required(&self) -> Vec<&'static str>;

    /// Map the record onto the wire schema.
    fn to_payload(&self) -> Self::Payload;
}

impl IntakeForm for EmergencyReport {
    type Field = ReportField;
    type Payload = SosRequestPayload;

    const KIND: &'static str = "SOS request";
    const RESOURCE: &'static str = "sos-requests/";
    const MISSING_MESSAGE: &'static str = "Please fill in your name and phone number.";
    const SUCCESS_MESSAGE: &'static str =
        "Your emergency request has been sent to the coordination system.";

    fn set(&mut self, field: ReportField) {
        self.apply(field);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        [
            ("full_name", &self.full_name),
            ("phone_number", &self.phone_number),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn to_payload(&self) -> SosRequestPayload {
        SosRequestPayload::from(self)
    }
}

impl IntakeForm for HelpOffer {
    type Field = OfferField;
    type Payload = HelpOfferPayload;

    const KIND: &'static str = "help offer";
    const RESOURCE: &'static str = "help-offers/";
    const MISSING_MESSAGE: &'static str =
        "Please fill in your name, contact number, district and what you can provide.";
    const SUCCESS_MESSAGE: &'static str =
        "Thank you for your support. Your offer has been recorded.";

    fn set(&mut self, field: OfferField) {
        self.apply(field);
    }

    fn missing_required(&self) -> Vec<&'static str> {
        [
            ("helper_name", &self.helper_name),
            ("helper_phone", &self.helper_phone),
            ("helper_district", &self.helper_district),
            ("support_details", &self.support_details),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    fn to_payload(&self) -> HelpOfferPayload {
        HelpOfferPayload::from(self)
    }
}
