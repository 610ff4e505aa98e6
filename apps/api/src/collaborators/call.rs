use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::{require_success, GatewayError};
use crate::config::CallProtocol;

/// Body accepted by `POST /initiate-call`.
///
/// `session_id` is only accepted for compatibility with newer callers; the store
/// key always comes from the call service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRequest {
    pub phone_number: String,
    pub job_description: String,
    pub job_resume: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[async_trait]
pub trait CallInitiator: Send + Sync {
    /// Asks the call service to dial the candidate and returns the session id it minted.
    async fn start_call(&self, request: &CallRequest) -> Result<String, GatewayError>;
}

/// `POST <base>` against the call-initiation collaborator, shaped by `CallProtocol`.
pub struct HttpCallInitiator {
    client: Client,
    url: String,
    protocol: CallProtocol,
}

impl HttpCallInitiator {
    pub fn new(client: Client, url: String, protocol: CallProtocol) -> Self {
        Self {
            client,
            url,
            protocol,
        }
    }
}

fn request_body(protocol: CallProtocol, request: &CallRequest) -> Value {
    match protocol {
        CallProtocol::Legacy => json!({ "phone_number": request.phone_number }),
        CallProtocol::Current => json!({
            "phone_number": request.phone_number,
            "job_description": request.job_description,
            "job_resume": request.job_resume,
        }),
    }
}

/// Pulls the minted session id out of the response. Numeric ids are stringified;
/// empty strings, zero and non-scalar values count as absent.
fn extract_session_id(protocol: CallProtocol, body: &Value) -> Result<String, GatewayError> {
    let field = protocol.session_id_field();
    let id = match body.get(field) {
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    };
    id.ok_or_else(|| GatewayError::MissingSessionId(field.to_string()))
}

#[async_trait]
impl CallInitiator for HttpCallInitiator {
    async fn start_call(&self, request: &CallRequest) -> Result<String, GatewayError> {
        let response = self
            .client
            .post(&self.url)
            .json(&request_body(self.protocol, request))
            .send()
            .await?;

        let body: Value = require_success(response).await?.json().await?;
        let session_id = extract_session_id(self.protocol, &body)?;
        debug!("Call service minted session {session_id}");
        Ok(session_id)
    }
}
