use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadmapItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl RoadmapItem {
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }
}

/// A checklist section. `completed` is true iff every sub-item is completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapSection {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub expanded: bool,
    pub sub_items: Vec<RoadmapItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInfo {
    pub average_salary: String,
    pub demand: String,
    pub top_industries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_info: Option<MarketInfo>,
    pub sections: Vec<RoadmapSection>,
}

/// One stage of a learning path, as fed to the roadmap transformer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPhase {
    pub phase: String,
    pub title: String,
    #[serde(default)]
    pub technologies_to_learn: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapInput {
    #[serde(default)]
    pub career_path: Option<String>,
    #[serde(default)]
    pub learning_path: Vec<LearningPhase>,
    #[serde(default)]
    pub core_technical_skills: Vec<String>,
    #[serde(default)]
    pub development_areas: Vec<String>,
    /// Stamped with the current time when the caller omits it.
    #[serde(default = "Utc::now")]
    pub generated_at: DateTime<Utc>,
}
