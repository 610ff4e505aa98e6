use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the session collection if it does not exist yet.
/// Profile columns default to empty text so partially written documents still read back.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS interview_sessions (
            id               UUID        NOT NULL,
            session_id       TEXT        PRIMARY KEY,
            phone_number     TEXT        NOT NULL DEFAULT '',
            job_description  TEXT        NOT NULL DEFAULT '',
            job_resume       TEXT        NOT NULL DEFAULT '',
            "timestamp"      TIMESTAMPTZ NOT NULL DEFAULT now(),
            precontext       JSONB,
            context          JSONB       NOT NULL DEFAULT '[]'::jsonb,
            summary          JSONB       NOT NULL DEFAULT '{}'::jsonb
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("Session table ready");
    Ok(())
}
