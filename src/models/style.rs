use crate::error::OpampError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Menu number of the free-form entry that follows the known styles.
pub const CUSTOM_MENU_NUMBER: usize = 11;

/// Target communication style for restating a synthesis.
///
/// The known variants exist for the shell's menu. The engine treats every
/// style the same way, including `Custom`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputStyle {
    FactualSummary,
    AdvertisingCopy,
    LegalStatement,
    InspirationalMessage,
    PressRelease,
    TechnicalReport,
    SocialMediaPost,
    PolicyRecommendation,
    EmailDraft,
    EditorialOpinion,
    Custom(String),
}

impl OutputStyle {
    /// Known styles in menu order (menu numbers 1 through 10).
    pub fn all() -> [OutputStyle; 10] {
        [
            OutputStyle::FactualSummary,
            OutputStyle::AdvertisingCopy,
            OutputStyle::LegalStatement,
            OutputStyle::InspirationalMessage,
            OutputStyle::PressRelease,
            OutputStyle::TechnicalReport,
            OutputStyle::SocialMediaPost,
            OutputStyle::PolicyRecommendation,
            OutputStyle::EmailDraft,
            OutputStyle::EditorialOpinion,
        ]
    }

    pub fn name(&self) -> &str {
        match self {
            OutputStyle::FactualSummary => "Factual Summary",
            OutputStyle::AdvertisingCopy => "Advertising Copy",
            OutputStyle::LegalStatement => "Legal Statement",
            OutputStyle::InspirationalMessage => "Inspirational Message",
            OutputStyle::PressRelease => "Press Release",
            OutputStyle::TechnicalReport => "Technical Report",
            OutputStyle::SocialMediaPost => "Social Media Post",
            OutputStyle::PolicyRecommendation => "Policy Recommendation",
            OutputStyle::EmailDraft => "Email Draft",
            OutputStyle::EditorialOpinion => "Editorial Opinion",
            OutputStyle::Custom(name) => name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, OutputStyle::Custom(_))
    }

    /// Resolve a style descriptor by name. Known names match case-insensitively;
    /// anything else becomes a custom style.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        Self::all()
            .into_iter()
            .find(|style| style.name().eq_ignore_ascii_case(trimmed))
            .unwrap_or_else(|| OutputStyle::Custom(trimmed.to_string()))
    }

    pub fn from_menu_number(number: usize) -> Option<Self> {
        Self::all().into_iter().nth(number.checked_sub(1)?)
    }

    /// Rewrite instructions placed ahead of the synthesis in the restyle prompt.
    pub fn instructions(&self) -> String {
        let fixed = match self {
            OutputStyle::FactualSummary => {
                "Rewrite the synthesis as a concise, objective summary. \
                 Use clear bullet points or a short paragraph to present the key findings and differences. \
                 Avoid persuasive or emotional language; focus only on the facts and logical distinctions."
            }
            OutputStyle::AdvertisingCopy => {
                "Transform the synthesis into a compelling advertising message that would engage potential customers. \
                 Use persuasive, energetic language and focus on benefits. \
                 Aim for a catchy, memorable, and motivating style."
            }
            OutputStyle::LegalStatement => {
                "Rewrite the synthesis as a formal legal statement suitable for a policy document or contract. \
                 Use precise, unambiguous language. \
                 Avoid emotion and ensure clarity, neutrality, and legal formality."
            }
            OutputStyle::InspirationalMessage => {
                "Turn the synthesis into an uplifting, inspirational message that encourages positive action or mindset. \
                 Use motivational, affirmative language, and focus on empowerment and hope."
            }
            OutputStyle::PressRelease => {
                "Rewrite the synthesis as an official press release for immediate publication. \
                 Use a formal, newsworthy tone. \
                 Include a headline and clear opening paragraph summarizing the main point, followed by supporting details."
            }
            OutputStyle::TechnicalReport => {
                "Present the synthesis as a section of a technical report. \
                 Use precise, analytical language suitable for an expert audience. \
                 Break down findings into clear, numbered or bulleted points."
            }
            OutputStyle::SocialMediaPost => {
                "Condense the synthesis into a short, engaging social media post suitable for platforms like Twitter or LinkedIn. \
                 Keep it concise, direct, and attention-grabbing. \
                 Use hashtags or emojis only if appropriate."
            }
            OutputStyle::PolicyRecommendation => {
                "Rewrite the synthesis as a set of clear policy recommendations. \
                 Present actionable suggestions with concise justifications. \
                 Use formal, directive language suited for policymakers."
            }
            OutputStyle::EmailDraft => {
                "Transform the synthesis into the body of a professional email draft. \
                 Use a polite, direct tone and clearly outline the main points for the recipient. \
                 Close with a courteous call to action."
            }
            OutputStyle::EditorialOpinion => {
                "Rewrite the synthesis as an editorial opinion piece for a major publication. \
                 Use persuasive, articulate language and a clear personal or institutional viewpoint. \
                 Support arguments with logic and vivid examples."
            }
            OutputStyle::Custom(name) => {
                return format!(
                    "Rewrite the synthesis in the following output format: {}. \
                     Choose the structure, tone, length, and audience that this format calls for. \
                     Keep the substantive meaning of the synthesis intact.",
                    name
                );
            }
        };
        fixed.to_string()
    }
}

impl fmt::Display for OutputStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Numbered menu lines as presented by the shell, custom entry last.
pub fn output_style_menu() -> Vec<String> {
    let mut lines: Vec<String> = OutputStyle::all()
        .iter()
        .enumerate()
        .map(|(i, style)| format!("{}. {}", i + 1, style.name()))
        .collect();
    lines.push(format!("{}. Other (Custom)", CUSTOM_MENU_NUMBER));
    lines
}

/// Resolve user input into a style: a menu number (1-10), a known style name,
/// or free text taken as a custom style. Menu number 11 cannot be resolved
/// without the custom text, so it is rejected here.
pub fn select_output_style(input: &str) -> Result<OutputStyle, OpampError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(OpampError::Validation(
            "Output style cannot be empty".to_string(),
        ));
    }

    if let Ok(number) = trimmed.parse::<usize>() {
        if number == CUSTOM_MENU_NUMBER {
            return Err(OpampError::Validation(
                "Custom output style requires a description".to_string(),
            ));
        }
        return OutputStyle::from_menu_number(number).ok_or_else(|| {
            OpampError::Validation(format!(
                "Menu choice must be between 1 and {}",
                OutputStyle::all().len()
            ))
        });
    }

    Ok(OutputStyle::from_name(trimmed))
}
