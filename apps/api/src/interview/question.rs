//! Question Generator — turns a job description and resume into one interview question.
//!
//! `AppState` holds an `Arc<dyn QuestionGenerator>`; `LlmQuestionGenerator` is the
//! production backend.

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::interview::prompts::{build_first_question_prompt, INTERVIEWER_SYSTEM};
use crate::llm_client::LlmClient;

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn first_question(
        &self,
        job_description: &str,
        job_resume: &str,
    ) -> Result<String, AppError>;
}

/// Generates the question with a single chat completion.
pub struct LlmQuestionGenerator(pub LlmClient);

#[async_trait]
impl QuestionGenerator for LlmQuestionGenerator {
    async fn first_question(
        &self,
        job_description: &str,
        job_resume: &str,
    ) -> Result<String, AppError> {
        let prompt = build_first_question_prompt(job_description, job_resume);
        let question = self
            .0
            .call_text(&prompt, INTERVIEWER_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Question generation failed: {e}")))?;
        info!("Generated first question with {}", self.0.model());
        Ok(question)
    }
}
