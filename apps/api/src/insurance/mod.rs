// Insurance agent: AA directory, coverage-gap recommendations and advisor chat.

pub mod chat;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod recommendations;
pub mod repository;
