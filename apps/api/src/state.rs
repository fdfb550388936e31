use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::narrative::career_parser::NarrativeParser;
use crate::roadmap::store::RoadmapStore;
use crate::upstream::UpstreamClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub upstream: UpstreamClient,
    /// Parser with the configured proficiency tie-break policy.
    pub parser: Arc<NarrativeParser>,
    pub roadmaps: RoadmapStore,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let upstream = UpstreamClient::new(&config)?;
        let parser = NarrativeParser::new(config.proficiency_fallback.into_tie_breaker());
        let roadmaps = RoadmapStore::new(
            Duration::from_secs(config.roadmap_ttl_secs),
            config.roadmap_capacity,
        );
        Ok(Self {
            upstream,
            parser: Arc::new(parser),
            roadmaps,
        })
    }
}
