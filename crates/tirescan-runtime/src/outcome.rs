use serde::Serialize;
use serde_json::Value;
use tirescan_types::{AnalysisResult, TireSpec, VehicleRecord, resolve};

use crate::client::{ApiResponse, TransportError};
use crate::link::search_link;

pub const UNKNOWN_API_ERROR: &str = "Unknown error";

/// Response body kept for the diagnostics panel
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RawResponse {
    Json(Value),
    /// Body that did not parse as JSON, kept as received
    Text(String),
}

impl RawResponse {
    pub fn pretty(&self) -> String {
        match self {
            RawResponse::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            RawResponse::Text(text) => text.clone(),
        }
    }
}

/// The single state shown for one submission. Variants are mutually exclusive.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Photos missing or unreadable; no request was sent
    InvalidInput { message: String },
    /// Network failure or timeout
    TransportFailed { message: String, timed_out: bool },
    /// `success` was not `true`, or the body was not JSON
    ApiError { message: String, raw: RawResponse },
    /// `success: true` but no usable vehicle in the reply
    NoVehicle { raw: RawResponse },
    /// Vehicle found, but no complete tire size
    Incomplete {
        vehicle: VehicleRecord,
        raw: RawResponse,
    },
    Resolved {
        vehicle: VehicleRecord,
        spec: TireSpec,
        link: String,
        raw: RawResponse,
    },
}

impl Outcome {
    /// Decide the outcome for a parsed reply (or a transport failure)
    pub fn classify(
        response: std::result::Result<AnalysisResult, TransportError>,
        search_base: &str,
    ) -> Self {
        let result = match response {
            Ok(result) => result,
            Err(err) => {
                return Outcome::TransportFailed {
                    message: err.message,
                    timed_out: err.timed_out,
                };
            }
        };

        if !result.is_success() {
            return Outcome::ApiError {
                message: result
                    .error_message()
                    .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string()),
                raw: RawResponse::Json(result.into_raw()),
            };
        }

        let vehicle = match result.first_vehicle() {
            Some(vehicle) if result.is_vehicle_detected() => vehicle,
            _ => {
                return Outcome::NoVehicle {
                    raw: RawResponse::Json(result.into_raw()),
                };
            }
        };

        match resolve(&vehicle) {
            Some(spec) => Outcome::Resolved {
                link: search_link(search_base, &spec),
                vehicle,
                spec,
                raw: RawResponse::Json(result.into_raw()),
            },
            None => Outcome::Incomplete {
                vehicle,
                raw: RawResponse::Json(result.into_raw()),
            },
        }
    }

    /// Parse the body of a reply and classify it. A body that is not JSON is
    /// reported as an API error carrying the text as received.
    pub fn from_response(
        response: std::result::Result<ApiResponse, TransportError>,
        search_base: &str,
    ) -> Self {
        let response = match response {
            Ok(response) => response,
            Err(err) => return Self::classify(Err(err), search_base),
        };

        match AnalysisResult::parse(&response.body) {
            Ok(result) => Self::classify(Ok(result), search_base),
            Err(err) => Outcome::ApiError {
                message: format!("Malformed response (HTTP {}): {}", response.status, err),
                raw: RawResponse::Text(response.body),
            },
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::InvalidInput { .. } => "invalid_input",
            Outcome::TransportFailed { .. } => "transport_failed",
            Outcome::ApiError { .. } => "api_error",
            Outcome::NoVehicle { .. } => "no_vehicle",
            Outcome::Incomplete { .. } => "incomplete",
            Outcome::Resolved { .. } => "resolved",
        }
    }

    pub fn raw(&self) -> Option<&RawResponse> {
        match self {
            Outcome::InvalidInput { .. } | Outcome::TransportFailed { .. } => None,
            Outcome::ApiError { raw, .. }
            | Outcome::NoVehicle { raw }
            | Outcome::Incomplete { raw, .. }
            | Outcome::Resolved { raw, .. } => Some(raw),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Outcome::Resolved { .. })
    }
}
