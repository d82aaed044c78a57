//! Best-effort public-profile lookups. Every failure resolves to a count of 0.
#![cfg_attr(not(feature = "enrichment"), allow(dead_code))]

use crate::error::{Result, ScoreError};
use crate::types::config::EnrichmentSettings;
use serde::Deserialize;

const GITHUB_API_BASE: &str = "https://api.github.com/users";
const LEETCODE_API_BASE: &str = "https://leetcode-api-faisalshohag.vercel.app";
#[cfg(feature = "enrichment")]
const USER_AGENT: &str = concat!("resumescore/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct GithubUser {
    #[serde(default)]
    public_repos: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeetcodeProfile {
    #[serde(default)]
    total_solved: u32,
}

pub struct ProfileEnricher {
    settings: EnrichmentSettings,
}

impl ProfileEnricher {
    pub fn new(settings: EnrichmentSettings) -> Self {
        Self { settings }
    }

    pub fn github_repo_count(&self, username: &str) -> u32 {
        let url = format!("{GITHUB_API_BASE}/{username}");
        let token = std::env::var(&self.settings.github_token_env)
            .ok()
            .filter(|token| !token.trim().is_empty());
        match self.fetch(&url, token.as_deref()) {
            Ok(body) => parse_public_repos(&body),
            Err(error) => {
                tracing::warn!(%username, %error, "github lookup failed; counting 0 repositories");
                0
            }
        }
    }

    pub fn leetcode_solved_count(&self, username: &str) -> u32 {
        let url = format!("{LEETCODE_API_BASE}/{username}");
        match self.fetch(&url, None) {
            Ok(body) => parse_total_solved(&body),
            Err(error) => {
                tracing::warn!(%username, %error, "leetcode lookup failed; counting 0 solved");
                0
            }
        }
    }

    #[cfg(feature = "enrichment")]
    fn fetch(&self, url: &str, token: Option<&str>) -> Result<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.settings.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ScoreError::Enrichment(e.to_string()))?;

        let mut request = client.get(url).header("Accept", "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        tracing::info!(%url, "fetching public profile");
        let response = request.send().map_err(|e| ScoreError::Enrichment(e.to_string()))?;
        if !response.status().is_success() {
            return Err(ScoreError::Enrichment(format!(
                "{url} returned {}",
                response.status()
            )));
        }
        response.text().map_err(|e| ScoreError::Enrichment(e.to_string()))
    }

    #[cfg(not(feature = "enrichment"))]
    fn fetch(&self, _url: &str, _token: Option<&str>) -> Result<String> {
        Err(ScoreError::Enrichment(
            "enrichment feature not enabled".to_string(),
        ))
    }
}

pub fn is_available() -> bool {
    cfg!(feature = "enrichment")
}

fn parse_public_repos(body: &str) -> u32 {
    serde_json::from_str::<GithubUser>(body)
        .map(|user| user.public_repos)
        .unwrap_or(0)
}

fn parse_total_solved(body: &str) -> u32 {
    serde_json::from_str::<LeetcodeProfile>(body)
        .map(|profile| profile.total_solved)
        .unwrap_or(0)
}
