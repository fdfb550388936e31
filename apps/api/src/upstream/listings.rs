use serde::Deserialize;

use super::{check, read_json, UpstreamClient, UpstreamError};
use crate::models::listing::{Connection, JobSearchPage, NewsArticle};

pub const JOBS_PER_PAGE: u32 = 10;

#[derive(Deserialize)]
struct ConnectionsResponse {
    #[serde(default)]
    results: Vec<Connection>,
}

#[derive(Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<NewsArticle>,
}

impl UpstreamClient {
    /// GET /recommendations/?job_title=
    pub async fn network_recommendations(&self, job_title: &str) -> Result<Vec<Connection>, UpstreamError> {
        let url = Self::url(&self.endpoints.network, &["recommendations", ""])?;
        let response = self
            .client
            .get(url)
            .query(&[("job_title", job_title)])
            .send()
            .await?;
        let response = check(response, "Failed to fetch recommendations").await?;
        let body: ConnectionsResponse = read_json(response).await?;
        Ok(body.results)
    }

    /// GNews `search`. The API key never leaves this process.
    pub async fn news(&self, query: &str) -> Result<Vec<NewsArticle>, UpstreamError> {
        let token = self
            .gnews_api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredentials("GNEWS_API_KEY"))?;
        let url = Self::url(&self.endpoints.gnews, &["search"])?;
        let response = self
            .client
            .get(url)
            .query(&[("q", query), ("token", token), ("lang", "en")])
            .send()
            .await?;
        let response = check(response, "Failed to fetch news").await?;
        let body: NewsResponse = read_json(response).await?;
        Ok(body.articles)
    }

    /// Adzuna `jobs/{country}/search/{page}`.
    pub async fn jobs(&self, country: &str, page: u32, what: &str) -> Result<JobSearchPage, UpstreamError> {
        let creds = self
            .adzuna
            .as_ref()
            .ok_or(UpstreamError::MissingCredentials("ADZUNA_APP_ID/ADZUNA_APP_KEY"))?;
        let page = page.to_string();
        let url = Self::url(&self.endpoints.adzuna, &["jobs", country, "search", &page])?;
        let per_page = JOBS_PER_PAGE.to_string();
        let response = self
            .client
            .get(url)
            .query(&[
                ("app_id", creds.app_id.as_str()),
                ("app_key", creds.app_key.as_str()),
                ("results_per_page", per_page.as_str()),
                ("what", what),
            ])
            .send()
            .await?;
        let response = check(response, "Failed to fetch jobs").await?;
        read_json(response).await
    }
}
