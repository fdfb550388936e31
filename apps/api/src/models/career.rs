use serde::{Deserialize, Serialize};

/// Self-reported skill level attached to a technical skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Proficiency {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSkill {
    pub name: String,
    pub proficiency: Proficiency,
}

impl TechnicalSkill {
    pub fn new(name: impl Into<String>, proficiency: Proficiency) -> Self {
        Self {
            name: name.into(),
            proficiency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSet {
    pub technical: Vec<TechnicalSkill>,
    pub soft: Vec<String>,
    pub development_areas: Vec<String>,
}

/// A named stage of a career path. `content` holds `•`-bulleted lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    pub number: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    pub demand: String,
    pub average_salary: String,
    pub top_industries: Vec<String>,
}

/// Where the match percentage came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// An explicit "NN% match" figure in the narrative.
    Explicit,
    /// Positive-keyword heuristic, bounded to 75..=95.
    Heuristic,
    /// Hardcoded recommendation, not derived from any narrative.
    Fixed,
}

/// Records which fields fell back to constants. A narrative where every
/// field is a fallback is most likely not a career narrative at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    pub match_source: MatchSource,
    pub fallback_fields: Vec<String>,
}

impl ExtractionReport {
    #[cfg(test)]
    pub fn is_fallback(&self, field: &str) -> bool {
        self.fallback_fields.iter().any(|f| f == field)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerRecommendation {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub description: String,
    /// Always within 0..=100.
    pub match_percentage: u8,
    pub skills: SkillSet,
    /// Sorted by phase number.
    pub phases: Vec<Phase>,
    pub market_insights: MarketInsights,
    pub raw_content: String,
    pub extraction: ExtractionReport,
}
