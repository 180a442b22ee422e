// src/services/submit.rs

//! Submission adapter for the coordination backend.
//!
//! Maps a validated form record onto its wire payload and performs exactly
//! one request. The record is never modified here.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Result, SubmissionError};
use crate::models::{
    ApiConfig, ApiReliefCamp, EmergencyReport, HealthStatus, HelpOffer, IntakeForm, ReliefCamp,
    RequestStatus, SosRequestRecord,
};
use crate::utils::{ReqwestTransport, Transport, endpoint, handle_response};

/// Acknowledgement of an accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerAck {
    /// Parsed response body; `None` for 204 or an empty body
    pub body: Option<Value>,
}

/// Encode the wire payload of a form record.
///
/// Encoding the same record twice yields identical bytes.
pub fn encode_payload<F: IntakeForm>(form: &F) -> std::result::Result<Vec<u8>, SubmissionError> {
    serde_json::to_vec(&form.to_payload()).map_err(|e| SubmissionError::Payload(e.to_string()))
}

/// Client for the coordination backend.
pub struct ApiClient<T = ReqwestTransport> {
    base_url: String,
    transport: T,
}

impl ApiClient<ReqwestTransport> {
    /// Create a client using `reqwest` and the given settings.
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        // Fail on a malformed base URL now rather than at submit time.
        endpoint(&config.base_url, "")?;
        Ok(Self::with_transport(
            &config.base_url,
            ReqwestTransport::from_config(config)?,
        ))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Submit a form record with a single POST.
    ///
    /// The caller is expected to have validated the record.
    pub async fn submit<F: IntakeForm>(
        &self,
        form: &F,
    ) -> std::result::Result<ServerAck, SubmissionError> {
        let url = self.url(F::RESOURCE)?;
        let body = encode_payload(form)?;

        log::debug!("POST {} ({} bytes)", url, body.len());
        let response = self.transport.post_json(&url, body).await?;
        let status = response.status;
        let body = handle_response(response)?;

        log::info!("{} accepted with status {}", F::KIND, status);
        Ok(ServerAck { body })
    }

    /// `POST /sos-requests/`
    pub async fn submit_sos_request(
        &self,
        report: &EmergencyReport,
    ) -> std::result::Result<ServerAck, SubmissionError> {
        self.submit(report).await
    }

    /// `POST /help-offers/`
    pub async fn submit_help_offer(
        &self,
        offer: &HelpOffer,
    ) -> std::result::Result<ServerAck, SubmissionError> {
        self.submit(offer).await
    }

    /// `GET /health/`
    pub async fn health(&self) -> std::result::Result<HealthStatus, SubmissionError> {
        self.get_json("health/").await
    }

    /// `GET /relief-camps/`, active camps ordered by district.
    pub async fn relief_camps(&self) -> std::result::Result<Vec<ReliefCamp>, SubmissionError> {
        let camps: Vec<ApiReliefCamp> = self.get_json("relief-camps/").await?;
        Ok(camps.into_iter().map(ReliefCamp::from).collect())
    }

    /// `GET /sos-requests/list/`, newest first.
    ///
    /// `district` matches case-insensitively on the backend; blank filters
    /// are left out of the query.
    pub async fn sos_requests(
        &self,
        district: Option<&str>,
        status: Option<RequestStatus>,
    ) -> std::result::Result<Vec<SosRequestRecord>, SubmissionError> {
        let mut url = self.url("sos-requests/list/")?;
        {
            let mut query = url.query_pairs_mut();
            if let Some(district) = district.map(str::trim).filter(|d| !d.is_empty()) {
                query.append_pair("district", district);
            }
            if let Some(status) = status {
                query.append_pair("status", status.as_str());
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        self.fetch(url).await
    }

    async fn get_json<D: DeserializeOwned>(
        &self,
        resource: &str,
    ) -> std::result::Result<D, SubmissionError> {
        self.fetch(self.url(resource)?).await
    }

    async fn fetch<D: DeserializeOwned>(
        &self,
        url: url::Url,
    ) -> std::result::Result<D, SubmissionError> {
        log::debug!("GET {}", url);

        let body = handle_response(self.transport.get(&url).await?)?
            .ok_or_else(|| SubmissionError::Payload(format!("empty response from {url}")))?;
        serde_json::from_value(body).map_err(|e| SubmissionError::Payload(e.to_string()))
    }

    fn url(&self, resource: &str) -> std::result::Result<url::Url, SubmissionError> {
        endpoint(&self.base_url, resource)
            .map_err(|e| SubmissionError::Transport(format!("invalid endpoint: {e}")))
    }
}
