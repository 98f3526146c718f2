pub mod args;
pub mod prompt;
pub mod reporter;

pub use args::{Cli, DumpFormat};
pub use prompt::UserPrompter;
pub use reporter::{format_session_dump, render_session, write_session, ReportFormatter};

use crate::analyzer::DifferenceEngine;
use crate::error::OpampError;
use crate::models::{OutputStyle, Session};
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::Path;

pub const DEFAULT_RESULTS_STEM: &str = "opamp_results";

/// Thin shell around `DifferenceEngine`: gathers inputs, runs the analysis,
/// shows results and handles restyling and saving.
pub struct CliHandler {
    cli: Cli,
}

impl CliHandler {
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    pub async fn run(&self) -> Result<i32, OpampError> {
        let model = self.cli.get_llm_model();
        let mut engine =
            DifferenceEngine::from_model(&model, None, self.cli.get_timeout_seconds())?;

        info!("Initialized difference engine ({})", engine.get_model_info());

        if self.cli.is_interactive() {
            let mut prompter = UserPrompter::stdio(self.cli.should_use_color());
            self.run_interactive(&mut engine, &mut prompter).await?;
        } else {
            self.run_batch(&mut engine).await?;
        }

        Ok(0)
    }

    async fn run_batch(&self, engine: &mut DifferenceEngine) -> Result<(), OpampError> {
        let formatter = ReportFormatter::for_cli(&self.cli);
        let (topic, positive, negative) = match (&self.cli.topic, &self.cli.positive, &self.cli.negative) {
            (Some(t), Some(p), Some(n)) => (t, p, n),
            _ => {
                return Err(OpampError::InvalidArguments(
                    "--topic, --positive and --negative must be given together".to_string(),
                ))
            }
        };

        engine.analyze(topic, positive, negative).await?;
        let session = completed_session(engine)?;
        println!("{}", formatter.format_analysis(session));

        for style in &self.cli.styles {
            engine.reformat(style).await?;
            if let Some(output) = completed_session(engine)?.latest_output() {
                println!("\n{}", formatter.format_styled_output(output));
            }
        }

        if let Some(path) = &self.cli.output {
            write_session(completed_session(engine)?, path, self.cli.format)?;
            println!("✅ Results saved to {}", path.display());
        }

        Ok(())
    }

    /// Interactive cycle. A failed analysis or restyle can be retried without
    /// losing the inputs already entered or the cached analysis.
    pub async fn run_interactive<R: BufRead, W: Write>(
        &self,
        engine: &mut DifferenceEngine,
        prompter: &mut UserPrompter<R, W>,
    ) -> Result<(), OpampError> {
        let formatter = ReportFormatter::for_cli(&self.cli);

        prompter.display_message("**Conceptual OpAmp Difference Engine**")?;
        prompter.display_message(&"=".repeat(50))?;

        let topic = prompter.prompt_required(
            "\nEnter the discussion context/topic (e.g., 'climate change policy', 'education reform'): ",
        )?;
        let positive = prompter.prompt_multiline("💭 First Opinion (Positive Input)")?;
        let negative = prompter.prompt_multiline("💭 Second Opinion (Negative Input)")?;
        let mut style = prompter.prompt_output_style()?;

        prompter.display_message(&formatter.format_progress(
            "Processing opinions through the conceptual op-amp. This may take a moment...",
        ))?;

        loop {
            match engine.analyze(&topic, &positive, &negative).await {
                Ok(_) => break,
                Err(e) if e.is_model_call_error() => {
                    prompter.display_message(&formatter.format_error(&e))?;
                    if !prompter.prompt_confirmation("Retry the analysis?")? {
                        return Err(e);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        prompter.display_message(&formatter.format_analysis(completed_session(engine)?))?;

        loop {
            self.restyle(engine, prompter, &formatter, style).await?;

            if !prompter
                .prompt_confirmation("\n🌀 Would you like the output in a different context/format?")?
            {
                break;
            }
            style = prompter.prompt_output_style()?;
        }

        if prompter.prompt_confirmation("\n💾 Would you like to save these results to a file?")? {
            let filename = prompter.prompt_filename(DEFAULT_RESULTS_STEM)?;
            write_session(completed_session(engine)?, Path::new(&filename), DumpFormat::Text)?;
            prompter.display_message(&format!("✅ Results saved to {}", filename))?;
        }

        Ok(())
    }

    async fn restyle<R: BufRead, W: Write>(
        &self,
        engine: &mut DifferenceEngine,
        prompter: &mut UserPrompter<R, W>,
        formatter: &ReportFormatter,
        style: OutputStyle,
    ) -> Result<(), OpampError> {
        match engine.reformat_style(style).await {
            Ok(_) => {
                if let Some(output) = completed_session(engine)?.latest_output() {
                    prompter.display_message(&formatter.format_styled_output(output))?;
                }
                Ok(())
            }
            Err(e) if e.is_model_call_error() => {
                warn!("Restyle failed: {}", e);
                prompter.display_message(&formatter.format_error(&e))?;
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

fn completed_session(engine: &DifferenceEngine) -> Result<&Session, OpampError> {
    engine
        .session()
        .ok_or_else(|| OpampError::State("no completed analysis".to_string()))
}
