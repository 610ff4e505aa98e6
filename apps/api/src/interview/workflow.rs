//! Session Workflow — composes the store and the remote collaborators into the
//! three request flows. Every step is a hard sequence point: the first failure
//! short-circuits the rest.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::collaborators::{CallInitiator, CallRequest, DeliveryGateway, ProfileGateway};
use crate::errors::AppError;
use crate::interview::question::QuestionGenerator;
use crate::models::session::NewSession;
use crate::store::SessionStore;

pub const CALL_STARTED_MESSAGE: &str = "Call triggered and session stored successfully.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    Delivered,
    Failed,
}

/// Outcome of first-question generation. The question is returned even when
/// delivery failed; `response` then carries what the delivery side said.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstQuestion {
    pub first_question: String,
    pub laptop_c_status: DeliveryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallStarted {
    pub message: String,
    pub session_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredProfile {
    pub job_description: String,
    pub job_resume: String,
}

/// Fetch profile → generate question → deliver it.
pub async fn generate_first_question(
    profiles: &dyn ProfileGateway,
    questions: &dyn QuestionGenerator,
    delivery: &dyn DeliveryGateway,
    session_id: &str,
) -> Result<FirstQuestion, AppError> {
    let profile = profiles.fetch_profile(session_id).await.map_err(|e| {
        warn!("Profile fetch for session {session_id} failed: {e}");
        AppError::ProfileUnavailable
    })?;

    if !profile.is_complete() {
        return Err(AppError::IncompleteProfile);
    }

    let question = questions
        .first_question(&profile.job_description, &profile.job_resume)
        .await?;

    let (status, response) = match delivery.deliver(session_id, &question).await {
        Ok(receipt) if receipt.delivered() => (DeliveryStatus::Delivered, None),
        Ok(receipt) => {
            warn!(
                "Delivery for session {session_id} answered {}",
                receipt.status
            );
            (DeliveryStatus::Failed, Some(receipt.body))
        }
        Err(e) => {
            warn!("Delivery for session {session_id} unreachable: {e}");
            (DeliveryStatus::Failed, Some(e.to_string()))
        }
    };

    info!("First question for session {session_id}: {status:?}");
    Ok(FirstQuestion {
        first_question: question,
        laptop_c_status: status,
        response,
    })
}

/// Ask the call service to dial, then persist the session under the id it minted.
pub async fn initiate_call(
    calls: &dyn CallInitiator,
    store: &dyn SessionStore,
    request: CallRequest,
) -> Result<CallStarted, AppError> {
    if let Some(requested) = &request.session_id {
        info!("Ignoring caller-supplied session id {requested}; the call service assigns it");
    }

    let session_id = calls.start_call(&request).await?;

    let CallRequest {
        phone_number,
        job_description,
        job_resume,
        ..
    } = request;
    let session = store
        .upsert(NewSession {
            session_id,
            phone_number,
            job_description,
            job_resume,
        })
        .await?;

    info!("Session {} stored", session.session_id);
    Ok(CallStarted {
        message: CALL_STARTED_MESSAGE.to_string(),
        session_id: session.session_id,
    })
}

/// Reads back the job description and resume stored for a session.
pub async fn lookup_profile(
    store: &dyn SessionStore,
    session_id: &str,
) -> Result<StoredProfile, AppError> {
    let session = store
        .find(session_id)
        .await?
        .ok_or(AppError::SessionNotFound)?;

    Ok(StoredProfile {
        job_description: session.job_description,
        job_resume: session.job_resume,
    })
}
