// Prompt generator: task description → meta-prompt.
// All LLM calls go through llm_client; all record writes through appsync.

pub mod generator;
pub mod handlers;
pub mod prompts;
