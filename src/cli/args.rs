use clap::{Parser, ValueEnum};
use crate::error::OpampError;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

#[derive(Parser, Debug)]
#[command(name = "opamp")]
#[command(about = "Conceptual op-amp - amplify the rhetorical difference between two opinions using LLMs")]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    /// LLM model to use for analysis
    #[arg(short = 'm', long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Maximum time for each LLM request in seconds (10-300)
    #[arg(short = 't', long, default_value_t = DEFAULT_TIMEOUT_SECONDS, value_parser = validate_timeout)]
    pub timeout: u64,

    /// Enable verbose logging to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Enable debug logging including prompts and raw model responses
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Discussion topic (non-interactive mode)
    #[arg(long)]
    pub topic: Option<String>,

    /// Positive input opinion (non-interactive mode)
    #[arg(long)]
    pub positive: Option<String>,

    /// Negative input opinion (non-interactive mode)
    #[arg(long)]
    pub negative: Option<String>,

    /// Output style to render the synthesis in; repeat for several styles
    #[arg(short = 's', long = "style")]
    pub styles: Vec<String>,

    /// Write the full session to this file (non-interactive mode)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Format of the session file written with --output
    #[arg(long, value_enum, default_value_t = DumpFormat::Text)]
    pub format: DumpFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Text,
    Json,
}

impl Cli {
    pub fn parse_args() -> Result<Self, OpampError> {
        let cli = Self::try_parse()
            .map_err(|e| OpampError::InvalidArguments(e.to_string()))?;

        cli.validate()?;

        Ok(cli)
    }

    pub fn validate(&self) -> Result<(), OpampError> {
        if !(10..=300).contains(&self.timeout) {
            return Err(OpampError::InvalidArguments(
                "Timeout must be between 10 and 300 seconds".to_string(),
            ));
        }

        let given = [&self.topic, &self.positive, &self.negative]
            .iter()
            .filter(|value| value.is_some())
            .count();
        if given != 0 && given != 3 {
            return Err(OpampError::InvalidArguments(
                "--topic, --positive and --negative must be given together".to_string(),
            ));
        }

        if given == 0 && (self.output.is_some() || !self.styles.is_empty()) {
            return Err(OpampError::InvalidArguments(
                "--style and --output require --topic, --positive and --negative".to_string(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(OpampError::InvalidArguments(
                "Model name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn is_interactive(&self) -> bool {
        self.topic.is_none() && self.positive.is_none() && self.negative.is_none()
    }

    pub fn get_llm_model(&self) -> String {
        self.model_with_override(std::env::var("OPAMP_DEFAULT_MODEL").ok().as_deref())
    }

    pub fn get_timeout_seconds(&self) -> u64 {
        self.timeout_with_override(std::env::var("OPAMP_DEFAULT_TIMEOUT").ok().as_deref())
    }

    /// `env_model` replaces the model only while `--model` is at its default.
    pub fn model_with_override(&self, env_model: Option<&str>) -> String {
        if self.model == DEFAULT_MODEL {
            if let Some(model) = env_model.map(str::trim).filter(|m| !m.is_empty()) {
                return model.to_string();
            }
        }
        self.model.clone()
    }

    /// `env_timeout` replaces the timeout only while `--timeout` is at its
    /// default, and only when it parses into the accepted range.
    pub fn timeout_with_override(&self, env_timeout: Option<&str>) -> u64 {
        if self.timeout == DEFAULT_TIMEOUT_SECONDS {
            if let Some(timeout) = env_timeout.and_then(|t| t.trim().parse::<u64>().ok()) {
                if (10..=300).contains(&timeout) {
                    return timeout;
                }
            }
        }
        self.timeout
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose || self.debug
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn should_use_color(&self) -> bool {
        !self.no_color && std::env::var("NO_COLOR").is_err()
    }

    /// Default `env_logger` filter; `RUST_LOG` still takes precedence.
    pub fn log_filter(&self) -> &'static str {
        if self.is_debug() {
            "debug"
        } else if self.is_verbose() {
            "info"
        } else {
            "warn"
        }
    }
}

fn validate_timeout(s: &str) -> Result<u64, String> {
    let timeout: u64 = s.parse()
        .map_err(|_| "Timeout must be a number")?;

    if (10..=300).contains(&timeout) {
        Ok(timeout)
    } else {
        Err("Timeout must be between 10 and 300 seconds".to_string())
    }
}
