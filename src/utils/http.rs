// src/utils/http.rs

//! HTTP transport and response handling.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use url::Url;

use crate::error::{Result, SubmissionError};
use crate::models::ApiConfig;

/// Status, reason phrase and body text of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: String::new(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One request, one response. Implementations never retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as `application/json`.
    async fn post_json(
        &self,
        url: &Url,
        body: Vec<u8>,
    ) -> std::result::Result<RawResponse, SubmissionError>;

    /// Plain GET.
    async fn get(&self, url: &Url) -> std::result::Result<RawResponse, SubmissionError>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(config: &ApiConfig) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// [`Transport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Ok(Self::new(create_async_client(config)?))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post_json(
        &self,
        url: &Url,
        body: Vec<u8>,
    ) -> std::result::Result<RawResponse, SubmissionError> {
        let response = self
            .client
            .post(url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(transport_error)?;
        read_response(response).await
    }

    async fn get(&self, url: &Url) -> std::result::Result<RawResponse, SubmissionError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport_error)?;
        read_response(response).await
    }
}

async fn read_response(
    response: reqwest::Response,
) -> std::result::Result<RawResponse, SubmissionError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    Ok(RawResponse {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        body,
    })
}

fn transport_error(error: reqwest::Error) -> SubmissionError {
    SubmissionError::Transport(error.to_string())
}

/// Apply the backend response convention.
///
/// Non-2xx becomes [`SubmissionError::Server`] with the body text, or the
/// reason phrase when the body is empty. 204 and empty bodies carry no
/// value; any other 2xx body must be JSON.
pub fn handle_response(
    response: RawResponse,
) -> std::result::Result<Option<Value>, SubmissionError> {
    if !response.is_success() {
        let message = if response.body.is_empty() {
            response.status_text
        } else {
            response.body
        };
        return Err(SubmissionError::Server {
            status: response.status,
            message,
        });
    }

    if response.status == 204 || response.body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|e| SubmissionError::Payload(format!("response body is not JSON: {e}")))
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use serde_json::json;

    use super::*;

    /// Accept one connection, capture the request and answer with `response`.
    fn serve_once(response: &'static str) -> (Url, JoinHandle<(String, Vec<u8>)>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];

            let head_end = loop {
                let n = stream.read(&mut chunk).unwrap();
                assert!(n > 0, "connection closed before headers");
                buf.extend_from_slice(&chunk[..n]);
                if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                    break pos + 4;
                }
            };
            let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .map(|v| v.trim().parse::<usize>().unwrap())
                .unwrap_or(0);
            while buf.len() < head_end + length {
                let n = stream.read(&mut chunk).unwrap();
                assert!(n > 0, "connection closed before body");
                buf.extend_from_slice(&chunk[..n]);
            }

            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
            (head, buf[head_end..head_end + length].to_vec())
        });

        let url = Url::parse(&format!("http://127.0.0.1:{port}/api/sos-requests/")).unwrap();
        (url, handle)
    }

    /// Same settings as `create_async_client`, minus any proxy from the environment.
    fn transport() -> ReqwestTransport {
        let config = ApiConfig::default();
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .no_proxy()
            .build()
            .unwrap();
        ReqwestTransport::new(client)
    }

    #[tokio::test]
    async fn post_sends_json_content_type_once() {
        let (url, server) = serve_once(
            "HTTP/1.1 201 Created\r\nContent-Type: application/json\r\n\
             Content-Length: 9\r\nConnection: close\r\n\r\n{\"id\": 7}",
        );
        let body = br#"{"full_name":"Nimal Perera"}"#.to_vec();

        let response = transport().post_json(&url, body.clone()).await.unwrap();
        let (head, received) = server.join().unwrap();

        assert!(head.starts_with("post /api/sos-requests/ http/1.1\r\n"));
        assert!(head.contains("content-type: application/json\r\n"));
        assert!(head.contains("user-agent: flood-sos/"));
        assert_eq!(received, body);
        assert_eq!(response.status, 201);
        assert_eq!(
            handle_response(response).unwrap(),
            Some(json!({"id": 7}))
        );
    }

    #[tokio::test]
    async fn empty_error_body_reports_reason_phrase() {
        let (url, server) = serve_once(
            "HTTP/1.1 400 Bad Request\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );

        let response = transport().post_json(&url, b"{}".to_vec()).await.unwrap();
        server.join().unwrap();

        assert_eq!(response.status_text, "Bad Request");
        let err = handle_response(response).unwrap_err();
        assert_eq!(err.to_string(), "API 400: Bad Request");
        assert_eq!(err.status(), Some(400));
    }

    #[tokio::test]
    async fn refused_connection_is_a_transport_error() {
        let url = Url::parse("http://127.0.0.1:1/api/sos-requests/").unwrap();

        let err = transport().post_json(&url, b"{}".to_vec()).await.unwrap_err();

        assert!(matches!(err, SubmissionError::Transport(_)));
        assert_eq!(err.status(), None);
        assert_eq!(
            err.user_message(),
            "Failed to send request. Please try again."
        );
    }

    #[test]
    fn created_body_is_parsed() {
        let value = handle_response(RawResponse::new(201, r#"{"id": 7}"#)).unwrap();
        assert_eq!(value, Some(json!({"id": 7})));
    }

    #[test]
    fn no_content_has_no_body() {
        assert_eq!(handle_response(RawResponse::new(204, "")).unwrap(), None);
    }

    #[test]
    fn error_status_keeps_body_text() {
        let err = handle_response(RawResponse::new(400, "\"bad district\"")).unwrap_err();
        assert_eq!(
            err,
            SubmissionError::Server {
                status: 400,
                message: "\"bad district\"".to_string()
            }
        );
    }

    #[test]
    fn empty_error_body_falls_back_to_reason_phrase() {
        let response = RawResponse {
            status: 502,
            status_text: "Bad Gateway".to_string(),
            body: String::new(),
        };
        let err = handle_response(response).unwrap_err();
        assert_eq!(err.to_string(), "API 502: Bad Gateway");
    }

    #[test]
    fn non_json_success_body_is_rejected() {
        let err = handle_response(RawResponse::new(200, "<html>ok</html>")).unwrap_err();
        assert!(matches!(err, SubmissionError::Payload(_)));
    }

    #[test]
    fn client_builds_from_default_config() {
        assert!(ReqwestTransport::from_config(&ApiConfig::default()).is_ok());
    }
}
