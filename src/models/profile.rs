use serde::{Deserialize, Serialize};
use std::fmt;

/// The three rhetorical dimensions every profile and delta is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Ethos,
    Logos,
    Energeia,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Ethos, Dimension::Logos, Dimension::Energeia];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Ethos => "ethos",
            Dimension::Logos => "logos",
            Dimension::Energeia => "energeia",
        }
    }

    /// Section label the model is asked to emit, e.g. `ETHOS`.
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Ethos => "ETHOS",
            Dimension::Logos => "LOGOS",
            Dimension::Energeia => "ENERGEIA",
        }
    }

    pub fn definition(&self) -> &'static str {
        match self {
            Dimension::Ethos => "credibility, authority, and trustworthiness",
            Dimension::Logos => "logical reasoning, evidence, and rational argumentation",
            Dimension::Energeia => "vivid impact, emotional energy, and transformative potential",
        }
    }

    pub fn focus(&self) -> &'static str {
        match self {
            Dimension::Ethos => {
                "How does each opinion establish credibility? What sources of authority do they \
                 invoke? How do they build trust with their audience?"
            }
            Dimension::Logos => {
                "What logical structure does each opinion use? What evidence or reasoning patterns \
                 do they employ? How do they construct their rational arguments?"
            }
            Dimension::Energeia => {
                "What emotional energy does each opinion generate? How vivid and impactful is their \
                 presentation? What transformative potential do they convey?"
            }
        }
    }

    pub fn examples(&self) -> &'static str {
        match self {
            Dimension::Ethos => {
                "expertise claims, institutional authority, moral authority, experiential \
                 credibility, traditional vs. innovative authority"
            }
            Dimension::Logos => {
                "cause-and-effect reasoning, empirical evidence, logical fallacies, deductive vs. \
                 inductive reasoning, evidence types"
            }
            Dimension::Energeia => {
                "emotional intensity, vivid imagery, urgency, inspirational power, transformative \
                 vision"
            }
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "ethos" => Some(Dimension::Ethos),
            "logos" => Some(Dimension::Logos),
            "energeia" => Some(Dimension::Energeia),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Characterization of a single opinion along ethos, logos and energeia.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RhetoricalProfile {
    pub ethos: String,
    pub logos: String,
    pub energeia: String,
}

impl RhetoricalProfile {
    pub fn new(ethos: String, logos: String, energeia: String) -> Self {
        Self {
            ethos,
            logos,
            energeia,
        }
    }

    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Ethos => &self.ethos,
            Dimension::Logos => &self.logos,
            Dimension::Energeia => &self.energeia,
        }
    }
}

/// Neutral "null hypothesis" profile derived from the topic alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaselineProfile(pub RhetoricalProfile);

impl BaselineProfile {
    pub fn get(&self, dimension: Dimension) -> &str {
        self.0.get(dimension)
    }

    pub fn profile(&self) -> &RhetoricalProfile {
        &self.0
    }
}

impl From<RhetoricalProfile> for BaselineProfile {
    fn from(profile: RhetoricalProfile) -> Self {
        Self(profile)
    }
}

/// Qualitative, directional difference per dimension between the two opinions
/// measured against the baseline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaSet {
    pub ethos: String,
    pub logos: String,
    pub energeia: String,
}

impl DeltaSet {
    pub fn new(ethos: String, logos: String, energeia: String) -> Self {
        Self {
            ethos,
            logos,
            energeia,
        }
    }

    pub fn get(&self, dimension: Dimension) -> &str {
        match dimension {
            Dimension::Ethos => &self.ethos,
            Dimension::Logos => &self.logos,
            Dimension::Energeia => &self.energeia,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &str)> {
        Dimension::ALL.into_iter().map(move |d| (d, self.get(d)))
    }
}
