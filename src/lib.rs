pub mod analyzer;
pub mod cli;
pub mod error;
pub mod models;

pub use error::OpampError;

// Re-export commonly used types
pub use analyzer::{DifferenceEngine, LanguageModelClient};
pub use models::{
    select_output_style, BaselineProfile, DeltaSet, Dimension, EngineState, OutputStyle,
    RhetoricalProfile, Session, StyledOutput,
};
