// Session lifecycle: call initiation, stored profile lookup and first-question generation.
// All LLM calls go through llm_client; all remote services through collaborators.

pub mod handlers;
pub mod prompts;
pub mod question;
pub mod workflow;
