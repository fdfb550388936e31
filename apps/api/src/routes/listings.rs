use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::listing::{Connection, JobSearchPage, NewsArticle};
use crate::state::AppState;

pub const NEWS_ROLE: &str = "Software Developer";
pub const DEFAULT_JOB_TITLE: &str = "Frontend Developer";
pub const DEFAULT_JOB_SEARCH: &str = "backend developer";
pub const DEFAULT_COUNTRY: &str = "gb";

#[derive(Deserialize)]
pub struct NetworkQuery {
    pub job_title: Option<String>,
    /// Local text filter over name, title and summary.
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct NewsQuery {
    pub q: Option<String>,
}

#[derive(Deserialize)]
pub struct JobsQuery {
    pub what: Option<String>,
    pub country: Option<String>,
    pub page: Option<u32>,
}

#[derive(Serialize)]
pub struct ConnectionsResponse {
    pub results: Vec<Connection>,
}

#[derive(Serialize)]
pub struct NewsResponse {
    pub query: String,
    pub articles: Vec<NewsArticle>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// News searches are always scoped to the user's role.
pub fn news_query(q: Option<String>) -> String {
    match non_blank(q) {
        Some(q) => format!("{NEWS_ROLE} {q}"),
        None => NEWS_ROLE.to_string(),
    }
}

/// GET /api/v1/network/recommendations
pub async fn handle_network(
    State(state): State<AppState>,
    Query(params): Query<NetworkQuery>,
) -> Result<Json<ConnectionsResponse>, AppError> {
    let job_title = non_blank(params.job_title).unwrap_or_else(|| DEFAULT_JOB_TITLE.to_string());
    let filter = params.q.unwrap_or_default();
    let results = state
        .upstream
        .network_recommendations(&job_title)
        .await?
        .into_iter()
        .filter(|c| c.matches(&filter))
        .collect();
    Ok(Json(ConnectionsResponse { results }))
}

/// GET /api/v1/news
pub async fn handle_news(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> Result<Json<NewsResponse>, AppError> {
    let query = news_query(params.q);
    let articles = state.upstream.news(&query).await?;
    Ok(Json(NewsResponse { query, articles }))
}

/// GET /api/v1/jobs
pub async fn handle_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobsQuery>,
) -> Result<Json<JobSearchPage>, AppError> {
    let what = non_blank(params.what).unwrap_or_else(|| DEFAULT_JOB_SEARCH.to_string());
    let country = non_blank(params.country)
        .unwrap_or_else(|| DEFAULT_COUNTRY.to_string())
        .to_ascii_lowercase();
    let page = params.page.unwrap_or(1);
    if page == 0 {
        return Err(AppError::Validation("page starts at 1".to_string()));
    }
    Ok(Json(state.upstream.jobs(&country, page, &what).await?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_news_query_prefixes_role() {
        assert_eq!(news_query(None), "Software Developer");
        assert_eq!(news_query(Some("  ".into())), "Software Developer");
        assert_eq!(news_query(Some(" AI tooling ".into())), "Software Developer AI tooling");
    }
}
