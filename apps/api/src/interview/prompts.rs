// LLM prompt constants for the interview module.

/// System message framing the assistant for question generation.
pub const INTERVIEWER_SYSTEM: &str = "You are an AI interviewer.";

/// First-question prompt template. Replace `{job_description}` and `{job_resume}` before sending.
pub const FIRST_QUESTION_PROMPT_TEMPLATE: &str = "You are an AI interviewer. Based on the job description and candidate resume below, ask the first relevant interview question.

Job Description:
{job_description}

Candidate Resume:
{job_resume}

First Question:";

/// Fills the first-question template. Both inputs are embedded verbatim.
pub fn build_first_question_prompt(job_description: &str, job_resume: &str) -> String {
    // resume first so a description containing "{job_resume}" is left untouched
    FIRST_QUESTION_PROMPT_TEMPLATE
        .replace("{job_resume}", job_resume)
        .replace("{job_description}", job_description)
}
