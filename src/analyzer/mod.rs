// Analyzer module - language model integration and the difference engine pipeline

pub mod engine;
pub mod llm_client;
pub mod prompts;
pub mod response_parser;

pub use engine::DifferenceEngine;
pub use llm_client::{create_llm_client, LanguageModelClient, LlmConfig, RigLlmClient};
pub use prompts::PromptTemplate;
