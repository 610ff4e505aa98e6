//! Outbound HTTP clients for the remote services this API relays between.
//!
//! Each collaborator sits behind a trait so `AppState` can carry a test double.
//! The reqwest-backed implementations share one `Client` with a request timeout.

pub mod call;
pub mod delivery;
pub mod profile;

use std::time::Duration;

use reqwest::{Client, Response};
use thiserror::Error;

pub use call::{CallInitiator, CallRequest, HttpCallInitiator};
pub use delivery::{DeliveryGateway, DeliveryReceipt, HttpDeliveryGateway};
pub use profile::{HttpProfileGateway, ProfileGateway, RemoteProfile};

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Collaborator returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The call service answered without the field carrying the new session id.
    #[error("Session id field '{0}' missing from call service response")]
    MissingSessionId(String),
}

/// Builds the HTTP client shared by every collaborator gateway.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Turns a non-success response into `GatewayError::Status`, keeping the raw body.
async fn require_success(response: Response) -> Result<Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(GatewayError::Status {
        status: status.as_u16(),
        body,
    })
}
