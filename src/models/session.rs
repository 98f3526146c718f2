use crate::models::{BaselineProfile, DeltaSet, OutputStyle, RhetoricalProfile};
use serde::Serialize;

/// A restyled rendering of the synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledOutput {
    pub style: OutputStyle,
    pub text: String,
}

/// Working state of one completed analysis cycle.
///
/// Built in full by the engine only after every pipeline step succeeded, then
/// swapped in as a whole. Restyling only touches `current_style` and `outputs`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    pub topic: String,
    pub positive_opinion: String,
    pub negative_opinion: String,
    pub positive_profile: RhetoricalProfile,
    pub negative_profile: RhetoricalProfile,
    pub baseline: BaselineProfile,
    pub deltas: DeltaSet,
    pub synthesized: String,
    pub current_style: Option<OutputStyle>,
    pub outputs: Vec<StyledOutput>,
}

impl Session {
    pub fn latest_output(&self) -> Option<&StyledOutput> {
        self.outputs.last()
    }

    pub(crate) fn record_output(&mut self, style: OutputStyle, text: String) {
        self.current_style = Some(style.clone());
        self.outputs.push(StyledOutput { style, text });
    }
}

/// Observable lifecycle of a `DifferenceEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No completed analysis; only `analyze` is valid.
    Empty,
    /// A completed analysis is cached; `analyze` and `reformat` are valid.
    Ready,
}
