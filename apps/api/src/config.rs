use anyhow::{Context, Result};

use crate::narrative::proficiency::TieBreakPolicy;
use crate::upstream::{AdzunaCredentials, Endpoints};

/// Application configuration loaded from environment variables.
/// Every variable has a default except the third-party API keys, which are
/// optional; the news and jobs routes answer 503 without them.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub endpoints: Endpoints,
    pub gnews_api_key: Option<String>,
    pub adzuna: Option<AdzunaCredentials>,
    pub upstream_timeout_secs: u64,
    pub proficiency_fallback: TieBreakPolicy,
    /// Idle roadmaps are dropped after this many seconds.
    pub roadmap_ttl_secs: u64,
    pub roadmap_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let adzuna = match (get("ADZUNA_APP_ID"), get("ADZUNA_APP_KEY")) {
            (Some(app_id), Some(app_key)) => Some(AdzunaCredentials { app_id, app_key }),
            _ => None,
        };

        Ok(Config {
            port: or("PORT", "8090")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or("RUST_LOG", "info"),
            endpoints: Endpoints {
                auth: or("AUTH_SERVICE_URL", "http://localhost:5000"),
                career: or("CAREER_SERVICE_URL", "http://localhost:8000"),
                evaluation: or("EVALUATION_SERVICE_URL", "http://localhost:9000"),
                chat: or("CHAT_SERVICE_URL", "http://localhost:8085"),
                network: or("NETWORK_SERVICE_URL", "http://127.0.0.1:8080"),
                gnews: or("GNEWS_API_URL", "https://gnews.io/api/v4"),
                adzuna: or("ADZUNA_API_URL", "https://api.adzuna.com/v1/api"),
            },
            gnews_api_key: get("GNEWS_API_KEY"),
            adzuna,
            upstream_timeout_secs: or("UPSTREAM_TIMEOUT_SECS", "60")
                .parse::<u64>()
                .context("UPSTREAM_TIMEOUT_SECS must be a whole number of seconds")?,
            proficiency_fallback: or("PROFICIENCY_FALLBACK", "random")
                .parse::<TieBreakPolicy>()
                .map_err(anyhow::Error::msg)
                .context("PROFICIENCY_FALLBACK must be random, advanced, intermediate or beginner")?,
            roadmap_ttl_secs: or("ROADMAP_TTL_SECS", "86400")
                .parse::<u64>()
                .context("ROADMAP_TTL_SECS must be a whole number of seconds")?,
            roadmap_capacity: or("ROADMAP_CAPACITY", "10000")
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .context("ROADMAP_CAPACITY must be a positive whole number")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::models::career::Proficiency;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8090);
        assert_eq!(config.endpoints.chat, "http://localhost:8085");
        assert_eq!(config.endpoints.network, "http://127.0.0.1:8080");
        assert!(config.gnews_api_key.is_none());
        assert!(config.adzuna.is_none());
        assert_eq!(config.proficiency_fallback, TieBreakPolicy::Random);
        assert_eq!(config.roadmap_ttl_secs, 86400);
        assert_eq!(config.roadmap_capacity, 10_000);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "9999"),
            ("AUTH_SERVICE_URL", "http://auth.internal"),
            ("GNEWS_API_KEY", "k"),
            ("ADZUNA_APP_ID", "id"),
            ("ADZUNA_APP_KEY", "key"),
            ("PROFICIENCY_FALLBACK", "advanced"),
        ])
        .unwrap();
        assert_eq!(config.port, 9999);
        assert_eq!(config.endpoints.auth, "http://auth.internal");
        assert_eq!(config.gnews_api_key.as_deref(), Some("k"));
        assert_eq!(config.adzuna.unwrap().app_key, "key");
        assert_eq!(config.proficiency_fallback, TieBreakPolicy::Fixed(Proficiency::Advanced));
    }

    #[test]
    fn test_half_configured_adzuna_is_unset() {
        let config = config_from(&[("ADZUNA_APP_ID", "id"), ("ADZUNA_APP_KEY", " ")]).unwrap();
        assert!(config.adzuna.is_none());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("UPSTREAM_TIMEOUT_SECS", "-1")]).is_err());
        assert!(config_from(&[("PROFICIENCY_FALLBACK", "coin")]).is_err());
        assert!(config_from(&[("ROADMAP_CAPACITY", "0")]).is_err());
    }
}
