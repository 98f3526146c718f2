use crate::error::OpampError;
use futures::future::BoxFuture;
use log::debug;
use rig::client::CompletionClient;
use rig::completion::{AssistantContent, CompletionModel};
use rig::providers::{anthropic, gemini, openai};
use std::time::{Duration, Instant};
use tokio::time::timeout;

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub model_name: String,
    pub api_key: Option<String>,
    pub timeout_seconds: u64,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

impl LlmConfig {
    pub fn new(model_name: &str, api_key: Option<String>, timeout_seconds: u64) -> Self {
        Self {
            model_name: model_name.trim().to_string(),
            api_key,
            timeout_seconds,
            max_tokens: Some(1500),
            temperature: Some(0.3),
        }
    }
}

/// Stateless text-completion service the difference engine drives.
///
/// `context` is optional role framing sent ahead of the prompt (a system
/// preamble for chat models). Implementations own their timeout policy.
pub trait LanguageModelClient: Send + Sync {
    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        context: Option<&'a str>,
    ) -> BoxFuture<'a, Result<String, OpampError>>;
    fn get_model_name(&self) -> &str;
    fn get_timeout(&self) -> Duration;
}

pub struct RigLlmClient {
    config: LlmConfig,
    model_id: String,
    provider: RigProvider,
}

enum RigProvider {
    OpenAI(openai::Client),
    Anthropic(anthropic::Client),
    Gemini(gemini::Client),
}

impl RigLlmClient {
    pub fn new(config: LlmConfig) -> Result<Self, OpampError> {
        let provider = create_provider(&config)?;
        let model_id = native_model_id(&config.model_name).to_string();
        Ok(Self {
            config,
            model_id,
            provider,
        })
    }

    async fn make_api_request(
        &self,
        prompt: &str,
        context: Option<&str>,
    ) -> Result<String, OpampError> {
        match &self.provider {
            RigProvider::OpenAI(client) => {
                let model = client.completion_model(&self.model_id);
                self.send_completion_request(model, prompt, context).await
            }
            RigProvider::Anthropic(client) => {
                let model = client.completion_model(&self.model_id);
                self.send_completion_request(model, prompt, context).await
            }
            RigProvider::Gemini(client) => {
                let model = client.completion_model(&self.model_id);
                self.send_completion_request(model, prompt, context).await
            }
        }
    }

    async fn send_completion_request<M: CompletionModel>(
        &self,
        model: M,
        prompt: &str,
        context: Option<&str>,
    ) -> Result<String, OpampError> {
        let mut builder = model.completion_request(prompt);

        if let Some(preamble) = context {
            builder = builder.preamble(preamble.to_string());
        }

        // gpt-5 and o1 models reject an explicit temperature
        if let Some(temp) = self.config.temperature {
            if supports_temperature(&self.config.model_name) {
                builder = builder.temperature(temp as f64);
            }
        }

        if let Some(max_tokens) = self.config.max_tokens {
            builder = builder.max_tokens(max_tokens as u64);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| OpampError::LlmClientError(format!("Request failed: {}", e)))?;

        let mut extracted_text = String::new();
        for content in response.choice.iter() {
            if let AssistantContent::Text(text_content) = content {
                extracted_text.push_str(&text_content.text);
            }
        }

        Ok(extracted_text)
    }
}

impl RigLlmClient {
    /// Model id as sent to the provider API.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }
}

impl LanguageModelClient for RigLlmClient {
    fn complete<'a>(
        &'a self,
        prompt: &'a str,
        context: Option<&'a str>,
    ) -> BoxFuture<'a, Result<String, OpampError>> {
        Box::pin(async move {
            let start_time = Instant::now();
            let limit = self.get_timeout();

            let text = timeout(limit, self.make_api_request(prompt, context))
                .await
                .map_err(|_| OpampError::AnalysisTimeout {
                    timeout: limit.as_secs(),
                })??;

            debug!(
                "{} responded with {} characters in {}ms",
                self.config.model_name,
                text.len(),
                start_time.elapsed().as_millis()
            );

            Ok(text)
        })
    }

    fn get_model_name(&self) -> &str {
        &self.config.model_name
    }

    fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.config.timeout_seconds)
    }
}

fn create_provider(config: &LlmConfig) -> Result<RigProvider, OpampError> {
    let model_name = config.model_name.trim();

    if is_openai_model(model_name) {
        let api_key = resolve_api_key(config, "OPENAI_API_KEY", "OpenAI")?;
        Ok(RigProvider::OpenAI(openai::Client::new(&api_key)))
    } else if is_claude_model(model_name) {
        let api_key = resolve_api_key(config, "ANTHROPIC_API_KEY", "Anthropic")?;
        Ok(RigProvider::Anthropic(anthropic::Client::new(&api_key)))
    } else if is_gemini_model(model_name) {
        let api_key = resolve_api_key(config, "GEMINI_API_KEY", "Gemini")?;
        Ok(RigProvider::Gemini(gemini::Client::new(&api_key)))
    } else {
        Err(OpampError::LlmClientError(format!(
            "Unsupported model '{}'. Use OpenAI (gpt-*), Anthropic (claude-*), or Gemini (gemini-*) models",
            model_name
        )))
    }
}

fn resolve_api_key(config: &LlmConfig, env_var: &str, vendor: &str) -> Result<String, OpampError> {
    config
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty())
        .or_else(|| std::env::var(env_var).ok().filter(|key| !key.trim().is_empty()))
        .ok_or_else(|| {
            OpampError::ConfigError(format!("{} API key not found (set {})", vendor, env_var))
        })
}

pub fn create_llm_client(
    model: &str,
    api_key: Option<String>,
    timeout_seconds: u64,
) -> Result<Box<dyn LanguageModelClient>, OpampError> {
    let config = LlmConfig::new(model, api_key, timeout_seconds);
    let client = RigLlmClient::new(config)?;
    Ok(Box::new(client))
}

/// Strips the provider routing prefix (`openai/`, `anthropic/`, `gemini/`).
/// Fine-tuned ids keep their `ft:` prefix.
pub fn native_model_id(model: &str) -> &str {
    let model = model.trim();
    ["openai/", "anthropic/", "gemini/"]
        .iter()
        .find_map(|prefix| model.strip_prefix(prefix))
        .unwrap_or(model)
}

pub fn is_openai_model(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    let candidate = candidate.strip_prefix("ft:").unwrap_or(candidate);

    candidate.starts_with("gpt-")
        || candidate.starts_with("chatgpt-")
        || candidate.starts_with("o1")
        || candidate.starts_with("o3")
        || candidate.starts_with("o4")
}

pub fn is_claude_model(model: &str) -> bool {
    let candidate = model.strip_prefix("anthropic/").unwrap_or(model);
    candidate.starts_with("claude-")
}

pub fn is_gemini_model(model: &str) -> bool {
    let candidate = model.strip_prefix("gemini/").unwrap_or(model);
    candidate.starts_with("gemini-")
}

fn supports_temperature(model: &str) -> bool {
    let candidate = model.strip_prefix("openai/").unwrap_or(model);
    !candidate.starts_with("gpt-5") && !candidate.starts_with("o1")
}
