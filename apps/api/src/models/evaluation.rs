use serde::{Deserialize, Serialize};

/// Structured view of a free-text resume-vs-JD evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    /// 0..=100; 0 when no percentage could be found.
    pub score: u8,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub keywords: Vec<String>,
}
