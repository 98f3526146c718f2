use crate::cli::args::{Cli, DumpFormat};
use crate::error::OpampError;
use crate::models::{Dimension, RhetoricalProfile, Session, StyledOutput};
use std::path::Path;

const RULE_WIDTH: usize = 70;

pub struct ReportFormatter {
    use_colors: bool,
}

impl ReportFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn for_cli(cli: &Cli) -> Self {
        Self::new(cli.should_use_color())
    }

    /// Full analysis view: baseline, both inputs, deltas and the synthesis.
    pub fn format_analysis(&self, session: &Session) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(&session.topic));
        output.push_str("\n\n");

        output.push_str(&self.format_section(
            "⚖️  BASELINE (NULL HYPOTHESIS)",
            &Self::format_dimensions(session.baseline.profile(), "   "),
        ));
        output.push_str("\n\n");

        output.push_str(&self.format_section(
            "➕ POSITIVE INPUT (Opinion 1)",
            &format!(
                "   Content:  {}\n{}",
                session.positive_opinion,
                Self::format_dimensions(&session.positive_profile, "   ")
            ),
        ));
        output.push_str("\n\n");

        output.push_str(&self.format_section(
            "➖ NEGATIVE INPUT (Opinion 2)",
            &format!(
                "   Content:  {}\n{}",
                session.negative_opinion,
                Self::format_dimensions(&session.negative_profile, "   ")
            ),
        ));
        output.push_str("\n\n");

        let deltas = session
            .deltas
            .iter()
            .map(|(dimension, text)| format!("{} DELTA:\n   {}", Self::icon(dimension), text))
            .collect::<Vec<_>>()
            .join("\n\n");
        output.push_str(&self.format_section("📈 RHETORICAL DELTAS", &deltas));
        output.push_str("\n\n");

        output.push_str(&self.format_section(
            "🔬 FIRST SYNTHESIS (DELTA SYNTHESIS)",
            &session.synthesized,
        ));
        output.push('\n');
        output.push_str(&"=".repeat(RULE_WIDTH));

        output
    }

    pub fn format_styled_output(&self, output: &StyledOutput) -> String {
        format!(
            "{}\n{}",
            self.format_section(&format!("🎭 FINAL OUTPUT ({})", output.style), &output.text),
            "=".repeat(RULE_WIDTH)
        )
    }

    pub fn format_error(&self, error: &OpampError) -> String {
        let (color_code, reset) = if self.use_colors {
            ("\x1b[1m\x1b[31m", "\x1b[0m")
        } else {
            ("", "")
        };
        format!("{}❌ An error occurred: {}{}", color_code, error, reset)
    }

    pub fn format_progress(&self, message: &str) -> String {
        if self.use_colors {
            format!("\x1b[36m🔧 {}\x1b[0m", message)
        } else {
            format!("🔧 {}", message)
        }
    }

    fn format_header(&self, topic: &str) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        if self.use_colors {
            format!(
                "{}\n\x1b[1m\x1b[36m🎯 CONCEPTUAL OP-AMP ANALYSIS RESULTS\x1b[0m\n{}\nContext: {}",
                rule, rule, topic
            )
        } else {
            format!(
                "{}\n🎯 CONCEPTUAL OP-AMP ANALYSIS RESULTS\n{}\nContext: {}",
                rule, rule, topic
            )
        }
    }

    fn format_section(&self, title: &str, content: &str) -> String {
        if self.use_colors {
            format!("\x1b[1m\x1b[37m{}\x1b[0m\n{}\n{}", title, "-".repeat(40), content)
        } else {
            format!("{}\n{}\n{}", title, "-".repeat(40), content)
        }
    }

    fn format_dimensions(profile: &RhetoricalProfile, indent: &str) -> String {
        Dimension::ALL
            .iter()
            .map(|dimension| {
                format!(
                    "{}{:<9} {}",
                    indent,
                    format!("{}:", title_case(dimension.as_str())),
                    profile.get(*dimension)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn icon(dimension: Dimension) -> String {
        let emoji = match dimension {
            Dimension::Ethos => "🎭",
            Dimension::Logos => "🧠",
            Dimension::Energeia => "⚡",
        };
        format!("{} {}", emoji, dimension.label())
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Plain-text session record: inputs, profiles, baseline, deltas, the
/// synthesis and every restyled output produced so far.
pub fn format_session_dump(session: &Session) -> String {
    let mut out = String::new();
    out.push_str("CONCEPTUAL OP-AMP ANALYSIS RESULTS\n");
    out.push_str(&"=".repeat(50));
    out.push_str("\n\n");
    out.push_str(&format!("Context: {}\n\n", session.topic));

    out.push_str("Baseline (Null Hypothesis):\n");
    out.push_str(&dump_dimensions(session.baseline.profile()));
    out.push('\n');

    out.push_str(&format!("Positive Input (Opinion 1): {}\n", session.positive_opinion));
    out.push_str(&dump_dimensions(&session.positive_profile));
    out.push('\n');

    out.push_str(&format!("Negative Input (Opinion 2): {}\n", session.negative_opinion));
    out.push_str(&dump_dimensions(&session.negative_profile));
    out.push('\n');

    for (dimension, text) in session.deltas.iter() {
        out.push_str(&format!("{} Delta:\n  {}\n\n", title_case(dimension.as_str()), text));
    }

    out.push_str(&format!(
        "First Synthesis (Delta Synthesis):\n{}\n\n",
        session.synthesized
    ));

    for output in &session.outputs {
        out.push_str(&format!("Final Output ({}):\n{}\n\n", output.style, output.text));
    }

    out
}

fn dump_dimensions(profile: &RhetoricalProfile) -> String {
    Dimension::ALL
        .iter()
        .map(|dimension| {
            format!(
                "  {}: {}\n",
                title_case(dimension.as_str()),
                profile.get(*dimension)
            )
        })
        .collect()
}

pub fn render_session(session: &Session, format: DumpFormat) -> Result<String, OpampError> {
    match format {
        DumpFormat::Text => Ok(format_session_dump(session)),
        DumpFormat::Json => Ok(serde_json::to_string_pretty(session)?),
    }
}

pub fn write_session(session: &Session, path: &Path, format: DumpFormat) -> Result<(), OpampError> {
    let content = render_session(session, format)?;
    std::fs::write(path, content)?;
    Ok(())
}
