// Credit agent: profile normalization, rule-based scoring, explanation,
// repayment planning and templated conversation.
// All LLM calls go through llm_client via the TextCompletion trait.

pub mod conversation;
pub mod explanation;
pub mod handlers;
pub mod plan;
pub mod profile;
pub mod prompts;
pub mod scoring;
