use crate::analyzer::llm_client::{create_llm_client, LanguageModelClient};
use crate::analyzer::prompts::PromptTemplate;
use crate::analyzer::response_parser::{parse_deltas, parse_profile};
use crate::error::OpampError;
use crate::models::{BaselineProfile, EngineState, OutputStyle, Session};
use log::{debug, info};
use std::sync::Arc;

pub const STEP_BASELINE: &str = "baseline";
pub const STEP_POSITIVE_PROFILE: &str = "positive profile";
pub const STEP_NEGATIVE_PROFILE: &str = "negative profile";
pub const STEP_DELTAS: &str = "delta extraction";
pub const STEP_SYNTHESIS: &str = "synthesis";
pub const STEP_RESTYLE: &str = "restyle";

/// Runs the five-step analysis pipeline against a language model and caches
/// the resulting session so the synthesis can be restyled without repeating
/// the analysis.
///
/// One engine holds one session. Callers needing several independent
/// analyses at once should create one engine each.
pub struct DifferenceEngine {
    llm_client: Arc<dyn LanguageModelClient>,
    session: Option<Session>,
}

impl DifferenceEngine {
    pub fn new(llm_client: Arc<dyn LanguageModelClient>) -> Self {
        Self {
            llm_client,
            session: None,
        }
    }

    pub fn from_model(
        model: &str,
        api_key: Option<String>,
        timeout_seconds: u64,
    ) -> Result<Self, OpampError> {
        let client = create_llm_client(model, api_key, timeout_seconds)?;
        Ok(Self::new(client.into()))
    }

    pub fn state(&self) -> EngineState {
        if self.session.is_some() {
            EngineState::Ready
        } else {
            EngineState::Empty
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Analyze two opposing opinions on `topic` and return the synthesized
    /// statement. The previous session is replaced only if every step succeeds.
    pub async fn analyze(
        &mut self,
        topic: &str,
        positive_opinion: &str,
        negative_opinion: &str,
    ) -> Result<String, OpampError> {
        let topic = require_text("topic", topic)?;
        let positive_opinion = require_text("positive opinion", positive_opinion)?;
        let negative_opinion = require_text("negative opinion", negative_opinion)?;

        let context = PromptTemplate::build_system_prompt(topic);

        info!("Step 1/5: deriving neutral baseline for '{}'", topic);
        let response = self
            .request(STEP_BASELINE, &PromptTemplate::build_baseline_prompt(topic), &context)
            .await?;
        let baseline = BaselineProfile::from(parse_profile(STEP_BASELINE, &response)?);

        info!("Step 2/5: profiling positive opinion");
        let response = self
            .request(
                STEP_POSITIVE_PROFILE,
                &PromptTemplate::build_profile_prompt(topic, positive_opinion),
                &context,
            )
            .await?;
        let positive_profile = parse_profile(STEP_POSITIVE_PROFILE, &response)?;

        info!("Step 3/5: profiling negative opinion");
        let response = self
            .request(
                STEP_NEGATIVE_PROFILE,
                &PromptTemplate::build_profile_prompt(topic, negative_opinion),
                &context,
            )
            .await?;
        let negative_profile = parse_profile(STEP_NEGATIVE_PROFILE, &response)?;

        info!("Step 4/5: extracting rhetorical deltas");
        let response = self
            .request(
                STEP_DELTAS,
                &PromptTemplate::build_delta_prompt(
                    topic,
                    &baseline,
                    &positive_profile,
                    &negative_profile,
                ),
                &context,
            )
            .await?;
        let deltas = parse_deltas(STEP_DELTAS, &response)?;

        info!("Step 5/5: synthesizing amplified difference");
        let synthesized = self
            .request(
                STEP_SYNTHESIS,
                &PromptTemplate::build_synthesis_prompt(topic, &baseline, &deltas),
                &context,
            )
            .await?;

        self.session = Some(Session {
            topic: topic.to_string(),
            positive_opinion: positive_opinion.to_string(),
            negative_opinion: negative_opinion.to_string(),
            positive_profile,
            negative_profile,
            baseline,
            deltas,
            synthesized: synthesized.clone(),
            current_style: None,
            outputs: Vec::new(),
        });
        info!("Session replaced with new analysis");

        Ok(synthesized)
    }

    /// Re-express the cached synthesis in `target_style`. Known style names get
    /// their fixed instructions; any other text is used as a custom style.
    pub async fn reformat(&mut self, target_style: &str) -> Result<String, OpampError> {
        let target_style = require_text("output style", target_style)?;
        self.reformat_style(OutputStyle::from_name(target_style)).await
    }

    pub async fn reformat_style(&mut self, style: OutputStyle) -> Result<String, OpampError> {
        if style.name().trim().is_empty() {
            return Err(OpampError::Validation(
                "output style cannot be empty".to_string(),
            ));
        }

        let (prompt, context) = {
            let session = self.session.as_ref().ok_or_else(|| {
                OpampError::State("reformat requires a completed analysis".to_string())
            })?;
            (
                PromptTemplate::build_restyle_prompt(&session.synthesized, &style),
                PromptTemplate::build_system_prompt(&session.topic),
            )
        };

        info!("Restyling synthesis as '{}'", style);
        let text = self.request(STEP_RESTYLE, &prompt, &context).await?;

        if let Some(session) = self.session.as_mut() {
            session.record_output(style, text.clone());
        }

        Ok(text)
    }

    pub fn get_model_info(&self) -> String {
        format!(
            "Model: {}, Timeout: {}s",
            self.llm_client.get_model_name(),
            self.llm_client.get_timeout().as_secs()
        )
    }

    async fn request(&self, step: &str, prompt: &str, context: &str) -> Result<String, OpampError> {
        debug!("[{}] prompt:\n{}", step, prompt);

        let response = self.llm_client.complete(prompt, Some(context)).await?;

        debug!("[{}] response:\n{}", step, response);

        let trimmed = response.trim();
        if trimmed.is_empty() {
            return Err(OpampError::EmptyResponse {
                step: step.to_string(),
            });
        }
        Ok(trimmed.to_string())
    }
}

fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, OpampError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(OpampError::Validation(format!("{} cannot be empty", field)));
    }
    Ok(trimmed)
}
