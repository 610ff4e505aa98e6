//! Session Store — document-keyed persistence for interview sessions.
//!
//! `AppState` holds an `Arc<dyn SessionStore>`: Postgres when `DATABASE_URL` is set,
//! process memory otherwise (and in tests).

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::session::{NewSession, Session};

pub use memory::InMemorySessionStore;
pub use postgres::PgSessionStore;

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert-or-update keyed on `session_id`. Profile fields are overwritten,
    /// `context` and `summary` are reset to empty. Last writer wins.
    async fn upsert(&self, session: NewSession) -> Result<Session, AppError>;

    async fn find(&self, session_id: &str) -> Result<Option<Session>, AppError>;
}
