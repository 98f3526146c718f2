use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpampError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("State error: {0}")]
    State(String),

    #[error("LLM client error: {0}")]
    LlmClientError(String),

    #[error("Empty response from model during {step}")]
    EmptyResponse { step: String },

    #[error("Parse error during {step}: {reason}")]
    ParseError { step: String, reason: String },

    #[error("LLM request timeout after {timeout} seconds")]
    AnalysisTimeout { timeout: u64 },

    #[error("Invalid command line arguments: {0}")]
    InvalidArguments(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl OpampError {
    /// True for every failure that originates in a language model round trip.
    pub fn is_model_call_error(&self) -> bool {
        matches!(
            self,
            OpampError::LlmClientError(_)
                | OpampError::EmptyResponse { .. }
                | OpampError::ParseError { .. }
                | OpampError::AnalysisTimeout { .. }
        )
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            OpampError::InvalidArguments(_) | OpampError::ConfigError(_) => 2,
            OpampError::Validation(_) | OpampError::State(_) => 3,
            OpampError::AnalysisTimeout { .. } => 4,
            OpampError::LlmClientError(_)
            | OpampError::EmptyResponse { .. }
            | OpampError::ParseError { .. } => 5,
            OpampError::IoError(_) => 6,
            OpampError::SerializationError(_) => 1,
        }
    }
}
