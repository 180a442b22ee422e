//! Service layer for the intake client.
//!
//! This module contains the business logic for:
//! - Form editing and guarded submission (`FormSession`)
//! - Required-field checks (`validate`)
//! - Backend submission and reads (`ApiClient`)
//! - Hazard and camp filtering (`filter_statuses`, `filter_camps`)

mod form;
mod submit;
mod validator;
mod viewer;

pub use form::{FormSession, FormState, Notice, SubmitOutcome};
pub use submit::{ApiClient, ServerAck, encode_payload};
pub use validator::validate;
pub use viewer::{filter_camps, filter_statuses};
