use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use tracing::debug;
use uuid::Uuid;

use super::SessionStore;
use crate::errors::AppError;
use crate::models::session::{NewSession, Precontext, Session};

#[derive(Debug, FromRow)]
struct SessionRow {
    id: Uuid,
    session_id: String,
    phone_number: String,
    job_description: String,
    job_resume: String,
    timestamp: DateTime<Utc>,
    precontext: Option<Json<Precontext>>,
    context: Json<Vec<Value>>,
    summary: Json<Map<String, Value>>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            id: row.id,
            session_id: row.session_id,
            phone_number: row.phone_number,
            job_description: row.job_description,
            job_resume: row.job_resume,
            timestamp: row.timestamp,
            precontext: row.precontext.map(|p| p.0),
            context: row.context.0,
            summary: row.summary.0,
        }
    }
}

/// Postgres-backed store. Each session is one row; JSON-shaped fields are JSONB.
#[derive(Clone)]
pub struct PgSessionStore {
    pool: PgPool,
}

impl PgSessionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PgSessionStore {
    async fn upsert(&self, session: NewSession) -> Result<Session, AppError> {
        let precontext = session.precontext();
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            INSERT INTO interview_sessions
                (id, session_id, phone_number, job_description, job_resume,
                 "timestamp", precontext, context, summary)
            VALUES ($1, $2, $3, $4, $5, $6, $7, '[]'::jsonb, '{}'::jsonb)
            ON CONFLICT (session_id) DO UPDATE SET
                phone_number    = EXCLUDED.phone_number,
                job_description = EXCLUDED.job_description,
                job_resume      = EXCLUDED.job_resume,
                "timestamp"     = EXCLUDED."timestamp",
                precontext      = EXCLUDED.precontext,
                context         = EXCLUDED.context,
                summary         = EXCLUDED.summary
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&session.session_id)
        .bind(&session.phone_number)
        .bind(&session.job_description)
        .bind(&session.job_resume)
        .bind(Utc::now())
        .bind(Json(precontext))
        .fetch_one(&self.pool)
        .await?;

        debug!("Upserted session {}", row.session_id);
        Ok(row.into())
    }

    async fn find(&self, session_id: &str) -> Result<Option<Session>, AppError> {
        let row = sqlx::query_as::<_, SessionRow>(
            "SELECT * FROM interview_sessions WHERE session_id = $1",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Session::from))
    }
}
