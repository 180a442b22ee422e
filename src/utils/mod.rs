//! Utility functions and helpers.

pub mod http;
pub mod url;

pub use http::{RawResponse, ReqwestTransport, Transport, handle_response};
pub use url::endpoint;
