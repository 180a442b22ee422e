//! Pipeline entry points for CLI operations.
//!
//! - `run_intake`: Fill and submit an SOS request or help offer
//! - `run_camps` / `run_hazards` / `run_districts`: Read-only views
//! - `run_requests`: Stored SOS requests from the backend
//! - `run_health`: Backend reachability
//! - `run_validate`: Configuration and reference data checks

pub mod intake;
pub mod reference;
pub mod validate;

pub use intake::{check_district, run_intake};
pub use reference::{
    load_reference, run_camps, run_districts, run_hazards, run_health, run_requests,
};
pub use validate::run_validate;
