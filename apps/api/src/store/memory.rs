use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::SessionStore;
use crate::errors::AppError;
use crate::models::session::{NewSession, Session};

/// Process-local store. Used when no database is configured and in tests.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Writes a document verbatim, as an external collaborator would.
    #[cfg(test)]
    pub async fn insert_raw(&self, session: Session) {
        self.sessions
            .write()
            .await
            .insert(session.session_id.clone(), session);
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn upsert(&self, session: NewSession) -> Result<Session, AppError> {
        let mut sessions = self.sessions.write().await;
        // the row id survives overwrites, like the primary key of a stored document
        let id = sessions
            .get(&session.session_id)
            .map(|existing| existing.id)
            .unwrap_or_else(Uuid::new_v4);
        let doc = session.into_session(id, Utc::now());
        sessions.insert(doc.session_id.clone(), doc.clone());
        Ok(doc)
    }

    async fn find(&self, session_id: &str) -> Result<Option<Session>, AppError> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }
}
