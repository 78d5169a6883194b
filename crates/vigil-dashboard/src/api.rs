//! HTTP API Client for the Vigil Backend
//!
//! Thin async wrappers over the four backend endpoints the dashboard
//! consumes. The backend itself (routing, storage, firmware relay) is an
//! external collaborator; this module only speaks its JSON boundary.

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::types::{AttackCountResponse, CommandRequest, CommandResponse, DeviceCommand, Reading};

const API_BASE: &str = "/api";

/// API client error type
#[derive(Debug, Clone)]
pub struct ApiClientError {
    /// HTTP status, or 0 when the request never produced a response.
    pub status: u16,
    pub message: String,
}

impl std::fmt::Display for ApiClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API Error {}: {}", self.status, self.message)
    }
}

impl From<gloo_net::Error> for ApiClientError {
    fn from(err: gloo_net::Error) -> Self {
        Self {
            status: 0,
            message: err.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiClientError>;

/// Execute a GET request and parse the JSON response.
///
/// Non-2xx statuses and unparseable payloads both map to `ApiClientError`;
/// callers decide whether that is fatal (for the poller it never is).
async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> ApiResult<T> {
    let response = request.send().await?;
    let status = response.status();

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiClientError {
            status,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiClientError {
            status,
            message: error_text,
        })
    }
}

/// Execute a POST request with a JSON body and parse the JSON response.
async fn fetch_json_with_body<T: DeserializeOwned, B: serde::Serialize>(
    builder: RequestBuilder,
    body: &B,
) -> ApiResult<T> {
    let payload = serde_json::to_string(body).map_err(|e| ApiClientError {
        status: 0,
        message: format!("Failed to encode request: {}", e),
    })?;
    let request = builder
        .header("Content-Type", "application/json")
        .body(payload)
        .map_err(|e| ApiClientError {
            status: 0,
            message: format!("Failed to build request: {}", e),
        })?;

    let response = request.send().await?;
    let status = response.status();

    if (200..300).contains(&status) {
        response.json::<T>().await.map_err(|e| ApiClientError {
            status,
            message: format!("Failed to parse response: {}", e),
        })
    } else {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ApiClientError {
            status,
            message: error_text,
        })
    }
}

/// Most recent readings (bounded small count), for the snapshot views and
/// the latest-data table.
pub async fn latest_data() -> ApiResult<Vec<Reading>> {
    // "lastestData" is the backend's actual route spelling.
    fetch_json(Request::get(&format!("{}/lastestData", API_BASE))).await
}

/// Full reading history, timestamp-ascending as the backend stores it.
pub async fn all_data() -> ApiResult<Vec<Reading>> {
    fetch_json(Request::get(&format!("{}/alldata", API_BASE))).await
}

/// Count of intrusion events detected by the node.
pub async fn attack_count() -> ApiResult<AttackCountResponse> {
    fetch_json(Request::get(&format!("{}/attackCount", API_BASE))).await
}

/// Push one control command to the device. One request, one response,
/// no retry; delivery beyond the acknowledgment is not guaranteed.
pub async fn send_command(command: DeviceCommand) -> ApiResult<CommandResponse> {
    fetch_json_with_body(
        Request::post(&format!("{}/getControlCommand", API_BASE)),
        &CommandRequest { command },
    )
    .await
}
