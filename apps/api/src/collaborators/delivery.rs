use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::debug;

use super::GatewayError;

#[derive(Debug, Serialize)]
struct DeliveryPayload<'a> {
    session_id: &'a str,
    question: &'a str,
}

/// What the delivery collaborator answered. Any status is a receipt; only
/// transport failures are errors.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryReceipt {
    pub status: u16,
    pub body: String,
}

impl DeliveryReceipt {
    pub fn delivered(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

#[async_trait]
pub trait DeliveryGateway: Send + Sync {
    async fn deliver(&self, session_id: &str, question: &str)
        -> Result<DeliveryReceipt, GatewayError>;
}

/// `POST <base>` with `{session_id, question}`.
pub struct HttpDeliveryGateway {
    client: Client,
    url: String,
}

impl HttpDeliveryGateway {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl DeliveryGateway for HttpDeliveryGateway {
    async fn deliver(
        &self,
        session_id: &str,
        question: &str,
    ) -> Result<DeliveryReceipt, GatewayError> {
        let response = self
            .client
            .post(&self.url)
            .json(&DeliveryPayload {
                session_id,
                question,
            })
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Delivery for session {session_id} answered {status}");
        Ok(DeliveryReceipt { status, body })
    }
}
