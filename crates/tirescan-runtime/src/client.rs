use serde::Serialize;
use std::fmt;
use std::time::Duration;

use crate::config::{ApiKey, Config};
use crate::Result;

/// JSON body sent to the recognition API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    pub tire_image: String,
    pub car_image: String,
}

/// Status and body of an API reply, whatever the status code.
/// The API reports its own failures in-band, so non-2xx bodies are still parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

/// Network-level failure: the request never produced a response body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub message: String,
    pub timed_out: bool,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            timed_out: false,
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for TransportError {}

impl TransportError {
    /// Describe a failed request with its full cause chain. A timeout is named
    /// explicitly, since reqwest's own text does not say so.
    pub fn from_reqwest(err: &reqwest::Error, timeout: Duration) -> Self {
        let chain = error_chain(err);

        if err.is_timeout() {
            Self {
                message: format!("request timed out after {}s ({})", timeout.as_secs(), chain),
                timed_out: true,
            }
        } else {
            Self {
                message: chain,
                timed_out: false,
            }
        }
    }
}

/// `outer: cause: root cause`, skipping causes whose text the previous
/// level already includes
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();

    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }

    message
}

/// Seam between the analysis flow and the network
pub trait AnalysisClient {
    fn analyze(&self, request: &AnalyzeRequest) -> std::result::Result<ApiResponse, TransportError>;
}

pub struct HttpAnalysisClient {
    client: reqwest::blocking::Client,
    api_url: String,
    api_key: ApiKey,
    timeout: Duration,
}

impl HttpAnalysisClient {
    pub fn new(config: &Config, api_key: ApiKey) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key,
            timeout: config.timeout(),
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> TransportError {
        let err = TransportError::from_reqwest(&err, self.timeout);
        log::warn!("request to {} failed: {}", self.api_url, err);
        err
    }
}

impl AnalysisClient for HttpAnalysisClient {
    fn analyze(&self, request: &AnalyzeRequest) -> std::result::Result<ApiResponse, TransportError> {
        log::info!("POST {}", self.api_url);

        let resp = self
            .client
            .post(&self.api_url)
            .bearer_auth(self.api_key.expose())
            .json(request)
            .send()
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| self.transport_error(e))?;
        log::debug!("HTTP {} ({} bytes)", status, body.len());

        Ok(ApiResponse { status, body })
    }
}
