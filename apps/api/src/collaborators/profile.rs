use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use super::GatewayError;

/// Candidate profile as served by the profile collaborator. Absent or null fields read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteProfile {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_resume: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl RemoteProfile {
    /// Both the job description and the resume are required to ask a question.
    pub fn is_complete(&self) -> bool {
        !self.job_description.is_empty() && !self.job_resume.is_empty()
    }
}

#[async_trait]
pub trait ProfileGateway: Send + Sync {
    async fn fetch_profile(&self, session_id: &str) -> Result<RemoteProfile, GatewayError>;
}

/// `GET <base>?session_id=...` against the profile collaborator.
pub struct HttpProfileGateway {
    client: Client,
    url: String,
}

impl HttpProfileGateway {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait]
impl ProfileGateway for HttpProfileGateway {
    async fn fetch_profile(&self, session_id: &str) -> Result<RemoteProfile, GatewayError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[("session_id", session_id)])
            .send()
            .await?;

        // only an exact 200 counts as a usable profile
        if response.status() != StatusCode::OK {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        let profile: RemoteProfile = response.json().await?;
        debug!("Fetched profile for session {session_id}");
        Ok(profile)
    }
}
