use crate::models::{BaselineProfile, DeltaSet, Dimension, OutputStyle, RhetoricalProfile};

pub struct PromptTemplate;

impl PromptTemplate {
    /// Role framing sent as context with every request of one analysis.
    pub fn build_system_prompt(topic: &str) -> String {
        format!(
            "You are a conceptual operational amplifier: a difference engine for rhetorical \
             analysis. You examine opinions about \"{}\" through three rhetorical dimensions: \
             ETHOS (credibility and authority), LOGOS (logical reasoning and evidence) and \
             ENERGEIA (vivid impact and transformative potential). Describe differences \
             qualitatively, never as numeric scores. Follow the requested output format exactly.",
            topic
        )
    }

    pub fn build_baseline_prompt(topic: &str) -> String {
        format!(
            r#"NULL HYPOTHESIS (BASELINE)

DISCUSSION CONTEXT: "{}"

Formulate the NULL HYPOTHESIS for this topic: the neutral ground truth from which any
opinion about it can be measured as a deviation. It must neither support nor oppose any
particular position.

Describe how that neutral position would present itself in each rhetorical dimension:
1. ETHOS ({}): the neutral credibility and authority stance.
2. LOGOS ({}): the neutral reasoning and evidence stance.
3. ENERGEIA ({}): the neutral level of vividness and impact.

{}"#,
            topic,
            Dimension::Ethos.definition(),
            Dimension::Logos.definition(),
            Dimension::Energeia.definition(),
            Self::labeled_format_instructions()
        )
    }

    pub fn build_profile_prompt(topic: &str, opinion: &str) -> String {
        format!(
            r#"RHETORICAL PROFILE

DISCUSSION CONTEXT: "{}"

OPINION:
"{}"

Analyze this opinion for:
1. ETHOS (credibility/authority): briefly describe how this opinion demonstrates credibility and authority.
2. LOGOS (logical reasoning): briefly describe how logical and well-reasoned this opinion is.
3. ENERGEIA (vivid impact): briefly describe the vivid energy and transformative potential this opinion expresses.

{}"#,
            topic,
            opinion,
            Self::labeled_format_instructions()
        )
    }

    pub fn build_delta_prompt(
        topic: &str,
        baseline: &BaselineProfile,
        positive: &RhetoricalProfile,
        negative: &RhetoricalProfile,
    ) -> String {
        let dimensions = Dimension::ALL
            .iter()
            .map(|dimension| Self::delta_dimension_block(*dimension, baseline, positive, negative))
            .collect::<Vec<_>>()
            .join("\n\n");

        format!(
            r#"RHETORICAL DELTA EXTRACTION

DISCUSSION CONTEXT: "{}"

The first input is ALWAYS the POSITIVE side of the argument and the second input is
ALWAYS the NEGATIVE side. For each dimension below, compare both inputs against the
baseline and against each other.

{}

INSTRUCTIONS:
1. Treat each dimension in isolation; ignore the other rhetorical aspects and the overall content.
2. Describe how each input diverges from the baseline in that dimension.
3. Describe the directional difference from the negative input to the positive input:
   what does the positive side do in this dimension that the negative side lacks?
4. Express the delta as a direction and quality of difference, not as a number or score.

{}"#,
            topic,
            dimensions,
            Self::labeled_format_instructions()
        )
    }

    fn delta_dimension_block(
        dimension: Dimension,
        baseline: &BaselineProfile,
        positive: &RhetoricalProfile,
        negative: &RhetoricalProfile,
    ) -> String {
        format!(
            r#"=== {label} ===
DEFINITION: {definition}
ANALYSIS FOCUS: {focus}
EXAMPLES TO CONSIDER: {examples}
BASELINE {label}: {baseline}
POSITIVE INPUT {label}: {positive}
NEGATIVE INPUT {label}: {negative}"#,
            label = dimension.label(),
            definition = dimension.definition(),
            focus = dimension.focus(),
            examples = dimension.examples(),
            baseline = baseline.get(dimension),
            positive = positive.get(dimension),
            negative = negative.get(dimension),
        )
    }

    pub fn build_synthesis_prompt(
        topic: &str,
        baseline: &BaselineProfile,
        deltas: &DeltaSet,
    ) -> String {
        format!(
            r#"DELTA SYNTHESIS

DISCUSSION CONTEXT: "{}"

BASELINE:
ETHOS: {}
LOGOS: {}
ENERGEIA: {}

DELTA COMPARISONS:
ETHOS DELTA: {}
LOGOS DELTA: {}
ENERGEIA DELTA: {}

SYNTHESIS INSTRUCTIONS:
1. START with the baseline as your foundation.
2. APPLY each delta transformation to it.
3. Synthesize a NEW opinion that embodies these differences.
4. Combine the deltas into one coherent, integrated perspective.
5. Create something new and comparative; do not reference or copy either source opinion.

Return only the synthesized opinion."#,
            topic,
            baseline.get(Dimension::Ethos),
            baseline.get(Dimension::Logos),
            baseline.get(Dimension::Energeia),
            deltas.ethos,
            deltas.logos,
            deltas.energeia,
        )
    }

    pub fn build_restyle_prompt(synthesized: &str, style: &OutputStyle) -> String {
        format!(
            r#"{}

TARGET FORMAT: {}

SYNTHESIS TO REWRITE:
"{}"

Do not alter the substantive meaning of the synthesis. Provide the output as requested above:"#,
            style.instructions(),
            style.name(),
            synthesized
        )
    }

    fn labeled_format_instructions() -> &'static str {
        r#"OUTPUT FORMAT (EXACTLY THREE LABELED SECTIONS, NOTHING ELSE):
ETHOS: [text]
LOGOS: [text]
ENERGEIA: [text]"#
    }
}
