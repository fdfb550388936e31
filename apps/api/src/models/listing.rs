use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    pub url: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    pub source: NewsSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayName {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub redirect_url: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub company: Option<DisplayName>,
    #[serde(default)]
    pub location: Option<DisplayName>,
    #[serde(default)]
    pub salary_min: Option<f64>,
    #[serde(default)]
    pub salary_max: Option<f64>,
    #[serde(default)]
    pub contract_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub results: Vec<JobPosting>,
}

/// A suggested professional connection for a job title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl Connection {
    /// Case-insensitive search over name, title and summary.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.title.to_lowercase().contains(&query)
            || self.summary.to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> Connection {
        Connection {
            name: "Priya Raman".to_string(),
            title: "Frontend Developer at Acme".to_string(),
            linkedin: None,
            summary: "Builds design systems in React".to_string(),
            url: None,
        }
    }

    #[test]
    fn test_connection_matches_any_field_case_insensitively() {
        let c = connection();
        assert!(c.matches("priya"));
        assert!(c.matches("ACME"));
        assert!(c.matches("design systems"));
        assert!(!c.matches("kotlin"));
    }

    #[test]
    fn test_blank_query_matches_everything() {
        assert!(connection().matches("   "));
    }

    #[test]
    fn test_job_page_tolerates_missing_fields() {
        let page: JobSearchPage =
            serde_json::from_str(r#"{"results":[{"id":"1","title":"Backend Dev"}]}"#).unwrap();
        assert_eq!(page.count, 0);
        assert_eq!(page.results[0].title, "Backend Dev");
        assert!(page.results[0].company.is_none());
    }
}
