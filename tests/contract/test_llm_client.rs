use opamp::analyzer::llm_client::{
    is_claude_model, is_gemini_model, is_openai_model, native_model_id,
};
use opamp::analyzer::{create_llm_client, LlmConfig, RigLlmClient};
use opamp::{DifferenceEngine, LanguageModelClient, OpampError};
use std::time::Duration;

#[test]
fn test_provider_detection_by_model_name() {
    for model in ["gpt-4o", "gpt-4o-mini", "openai/gpt-4.1", "o1-preview", "o4-mini"] {
        assert!(is_openai_model(model), "{} should be an OpenAI model", model);
    }
    for model in ["claude-3-5-sonnet-latest", "anthropic/claude-3-haiku"] {
        assert!(is_claude_model(model), "{} should be a Claude model", model);
    }
    for model in ["gemini-2.0-flash", "gemini/gemini-1.5-pro"] {
        assert!(is_gemini_model(model), "{} should be a Gemini model", model);
    }

    assert!(!is_openai_model("llama-3"));
    assert!(!is_claude_model("llama-3"));
    assert!(!is_gemini_model("llama-3"));
}

#[test]
fn test_unsupported_model_is_rejected() {
    let result = create_llm_client("llama-3-70b", Some("key".to_string()), 60);

    match result {
        Err(OpampError::LlmClientError(message)) => assert!(message.contains("llama-3-70b")),
        Err(other) => panic!("unexpected error: {:?}", other),
        Ok(_) => panic!("unsupported model accepted"),
    }
}

#[test]
fn test_config_defaults() {
    let config = LlmConfig::new(" claude-3-opus ", None, 120);

    assert_eq!(config.model_name, "claude-3-opus");
    assert_eq!(config.timeout_seconds, 120);
    assert_eq!(config.max_tokens, Some(1500));
    assert_eq!(config.temperature, Some(0.3));
}

#[test]
fn test_explicit_key_builds_each_provider() {
    for model in ["gpt-4o", "claude-3-5-sonnet-latest", "gemini-1.5-pro"] {
        let client = RigLlmClient::new(LlmConfig::new(model, Some("test-key".to_string()), 30))
            .unwrap_or_else(|e| panic!("{} failed: {}", model, e));
        assert_eq!(client.get_model_name(), model);
        assert_eq!(client.get_timeout(), Duration::from_secs(30));
    }
}

#[test]
fn test_engine_reports_model_info() {
    let engine = DifferenceEngine::from_model("gpt-4o", Some("test-key".to_string()), 45).unwrap();
    assert_eq!(engine.get_model_info(), "Model: gpt-4o, Timeout: 45s");
}

#[test]
fn test_prefixed_models_are_requested_by_native_id() {
    let cases = [
        ("openai/gpt-4o", "gpt-4o"),
        ("anthropic/claude-3-haiku", "claude-3-haiku"),
        ("gemini/gemini-2.0-flash", "gemini-2.0-flash"),
        ("ft:gpt-4o-mini:acme::abc123", "ft:gpt-4o-mini:acme::abc123"),
        ("gpt-4o", "gpt-4o"),
    ];

    for (configured, requested) in cases {
        let client = RigLlmClient::new(LlmConfig::new(configured, Some("test-key".to_string()), 30))
            .unwrap_or_else(|e| panic!("{} failed: {}", configured, e));
        assert_eq!(client.model_id(), requested);
        assert_eq!(client.get_model_name(), configured);
        assert_eq!(native_model_id(configured), requested);
    }
}
