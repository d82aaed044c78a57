use crate::catalog::RoleKeywordCatalog;
use crate::error::ScoreError;
use crate::types::scoring::{Category, CategoryWeights, WEIGHT_TOTAL};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreConfig {
    pub weights: Option<HashMap<String, u32>>,
    pub scoring: Option<ScoringConfig>,
    pub roles: Option<BTreeMap<String, Vec<String>>>,
    pub enrichment: Option<EnrichmentConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    pub resume_score_cap: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EnrichmentConfig {
    pub timeout_secs: Option<u64>,
    pub github_token_env: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentSettings {
    pub timeout: Duration,
    pub github_token_env: String,
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            github_token_env: "GITHUB_TOKEN".to_string(),
        }
    }
}

pub const DEFAULT_RESUME_SCORE_CAP: u32 = 100;

impl ScoreConfig {
    pub fn weights(&self) -> CategoryWeights {
        let defaults = CategoryWeights::default();
        match &self.weights {
            Some(weights) => {
                let pick = |category: Category| {
                    *weights
                        .get(category.config_key())
                        .unwrap_or(&defaults.get(category))
                };
                CategoryWeights {
                    github: pick(Category::GitHub),
                    leetcode: pick(Category::LeetCode),
                    portfolio: pick(Category::Portfolio),
                    linkedin: pick(Category::LinkedIn),
                    resume: pick(Category::Resume),
                    certifications: pick(Category::Certifications),
                }
            }
            None => defaults,
        }
    }

    pub fn resume_score_cap(&self) -> u32 {
        self.scoring
            .as_ref()
            .and_then(|scoring| scoring.resume_score_cap)
            .unwrap_or(DEFAULT_RESUME_SCORE_CAP)
    }

    pub fn enrichment_settings(&self) -> EnrichmentSettings {
        let defaults = EnrichmentSettings::default();
        match &self.enrichment {
            Some(enrichment) => EnrichmentSettings {
                timeout: enrichment
                    .timeout_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
                github_token_env: enrichment
                    .github_token_env
                    .clone()
                    .unwrap_or(defaults.github_token_env),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), ScoreError> {
        if let Some(weights) = &self.weights {
            let allowed = Category::ALL.map(Category::config_key);
            let mut unknown = weights
                .keys()
                .filter(|key| !allowed.contains(&key.as_str()))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                unknown.sort();
                return Err(ScoreError::InvalidConfig(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weight_sum = self.weights().total();
        if weight_sum != WEIGHT_TOTAL {
            return Err(ScoreError::InvalidConfig(format!(
                "weights must sum to {WEIGHT_TOTAL} (found {weight_sum})"
            )));
        }

        let cap = self.resume_score_cap();
        if cap > 100 {
            return Err(ScoreError::InvalidConfig(format!(
                "scoring.resume_score_cap must be between 0 and 100 (found {cap})"
            )));
        }

        if let Some(roles) = &self.roles {
            for (title, keywords) in roles {
                if title.trim().is_empty() {
                    return Err(ScoreError::InvalidConfig(
                        "roles entries must have a non-empty title".to_string(),
                    ));
                }
                if keywords.iter().all(|keyword| keyword.trim().is_empty()) {
                    return Err(ScoreError::InvalidConfig(format!(
                        "roles.\"{title}\" must list at least one keyword"
                    )));
                }
            }
        }

        if let Some(timeout_secs) = self
            .enrichment
            .as_ref()
            .and_then(|enrichment| enrichment.timeout_secs)
        {
            if timeout_secs == 0 {
                return Err(ScoreError::InvalidConfig(
                    "enrichment.timeout_secs must be greater than 0".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Immutable tables handed to the engine by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub weights: CategoryWeights,
    pub resume_score_cap: u32,
    pub catalog: RoleKeywordCatalog,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: CategoryWeights::default(),
            resume_score_cap: DEFAULT_RESUME_SCORE_CAP,
            catalog: RoleKeywordCatalog::builtin(),
        }
    }
}

impl EngineConfig {
    pub fn from_config(config: Option<&ScoreConfig>) -> Result<Self, ScoreError> {
        let Some(config) = config else {
            return Ok(Self::default());
        };
        config.validate()?;

        let mut catalog = RoleKeywordCatalog::builtin();
        if let Some(roles) = &config.roles {
            for (title, keywords) in roles {
                catalog.insert(title, keywords.iter().cloned());
            }
        }

        Ok(Self {
            weights: config.weights(),
            resume_score_cap: config.resume_score_cap(),
            catalog,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: ScoreConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.weights(), CategoryWeights::default());
        assert_eq!(cfg.resume_score_cap(), 100);
        assert_eq!(cfg.enrichment_settings(), EnrichmentSettings::default());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[weights]
github = 20
leetcode = 20
portfolio = 20
linkedin = 20
resume = 10
certifications = 10

[scoring]
resume_score_cap = 89

[roles]
"qa engineer" = ["selenium", "cypress"]

[enrichment]
timeout_secs = 3
github_token_env = "GH_TOKEN"
"#;
        let cfg: ScoreConfig = toml::from_str(toml_str).expect("full config should parse");
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.weights().linkedin, 20);
        assert_eq!(cfg.resume_score_cap(), 89);
        let settings = cfg.enrichment_settings();
        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert_eq!(settings.github_token_env, "GH_TOKEN");

        let engine = EngineConfig::from_config(Some(&cfg)).expect("engine config should build");
        assert_eq!(engine.catalog.keywords_for("Senior QA Engineer").len(), 2);
        assert_eq!(engine.resume_score_cap, 89);
    }

    #[test]
    fn partial_weights_fall_back_to_defaults_and_fail_sum_check() {
        let toml_str = r#"
[weights]
linkedin = 3
"#;
        let cfg: ScoreConfig = toml::from_str(toml_str).expect("config should parse");
        assert_eq!(cfg.weights().github, 25);
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("weights must sum to 100 (found 88)"));
    }

    #[test]
    fn validate_rejects_unknown_weight_keys() {
        let toml_str = r#"
[weights]
github = 25
leetcode = 20
portfolio = 20
linkedin = 15
resume = 10
certifications = 10
twitter = 5
"#;
        let cfg: ScoreConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unknown key"));
        assert!(err.to_string().contains("twitter"));
    }

    #[test]
    fn validate_rejects_cap_above_100() {
        let toml_str = r#"
[scoring]
resume_score_cap = 120
"#;
        let cfg: ScoreConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_role_keywords() {
        let toml_str = r#"
[roles]
"qa engineer" = [" "]
"#;
        let cfg: ScoreConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("at least one keyword"));
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let toml_str = r#"
[enrichment]
timeout_secs = 0
"#;
        let cfg: ScoreConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn missing_config_builds_default_engine() {
        let engine = EngineConfig::from_config(None).expect("defaults should build");
        assert_eq!(engine, EngineConfig::default());
    }
}
