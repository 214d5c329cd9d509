pub mod chat;
pub mod config;
pub mod eligibility;
pub mod errors;
pub mod llm_client;
pub mod models;
pub mod programs;
pub mod registry;
pub mod store;
