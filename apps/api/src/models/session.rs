use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Snapshot of the candidate profile taken when the session was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Precontext {
    pub job_resume: String,
    pub job_description: String,
    pub phone_number: String,
}

/// One interview session, keyed by the id minted by the call service.
///
/// `context` and `summary` are owned by external collaborators; this service
/// only ever writes them empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub session_id: String,
    pub phone_number: String,
    pub job_description: String,
    pub job_resume: String,
    pub timestamp: DateTime<Utc>,
    pub precontext: Option<Precontext>,
    pub context: Vec<Value>,
    pub summary: Map<String, Value>,
}

/// Fields written by a session upsert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSession {
    pub session_id: String,
    pub phone_number: String,
    pub job_description: String,
    pub job_resume: String,
}

impl NewSession {
    pub fn precontext(&self) -> Precontext {
        Precontext {
            job_resume: self.job_resume.clone(),
            job_description: self.job_description.clone(),
            phone_number: self.phone_number.clone(),
        }
    }

    /// Builds the full document as it looks right after creation.
    pub fn into_session(self, id: Uuid, timestamp: DateTime<Utc>) -> Session {
        let precontext = self.precontext();
        Session {
            id,
            session_id: self.session_id,
            phone_number: self.phone_number,
            job_description: self.job_description,
            job_resume: self.job_resume,
            timestamp,
            precontext: Some(precontext),
            context: Vec::new(),
            summary: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> NewSession {
        NewSession {
            session_id: "CA123".to_string(),
            phone_number: "+15550100".to_string(),
            job_description: "Backend engineer".to_string(),
            job_resume: "5 years Go".to_string(),
        }
    }

    #[test]
    fn test_into_session_starts_with_empty_context_and_summary() {
        let session = fixture().into_session(Uuid::new_v4(), Utc::now());
        assert!(session.context.is_empty());
        assert!(session.summary.is_empty());
        assert_eq!(session.session_id, "CA123");
    }

    #[test]
    fn test_precontext_mirrors_profile_fields() {
        let session = fixture().into_session(Uuid::new_v4(), Utc::now());
        let pre = session.precontext.unwrap();
        assert_eq!(pre.job_description, "Backend engineer");
        assert_eq!(pre.job_resume, "5 years Go");
        assert_eq!(pre.phone_number, "+15550100");
    }
}
