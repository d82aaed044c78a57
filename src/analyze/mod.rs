pub mod aggregate;
pub mod features;
pub mod presence;
pub mod recommend;
pub mod rubric;

use crate::scan::{self, ResumeModel};
use crate::types::config::EngineConfig;
use crate::types::report::{CategoryResult, ScoreReport};
use crate::types::scoring::{Category, ScoreInput};
use indexmap::IndexMap;
use sha2::{Digest, Sha256};

/// Scores one resume. Missing or degenerate inputs produce a degraded report, never an error.
pub fn score_resume(input: &ScoreInput, config: &EngineConfig) -> ScoreReport {
    let model = scan::discover(input);
    let metrics = features::derive_metrics(&input.text, &input.role_title, &config.catalog);
    let rubric = rubric::score_resume_content(&metrics);

    let mut sections = IndexMap::new();
    for category in Category::ALL {
        let weight = config.weights.get(category);
        let section = match category {
            Category::Resume => CategoryResult::new(
                category.label(),
                rubric.score_100.min(config.resume_score_cap),
                weight,
                rubric.items.clone(),
            ),
            _ => {
                let scored = presence::score_presence(
                    category,
                    model.presence.is_present(category),
                    verified_count(input, category),
                );
                CategoryResult::new(category.label(), scored.score, weight, scored.sub_criteria)
            }
        };
        sections.insert(category.label().to_string(), section);
    }

    let totals = aggregate::aggregate(sections.values());
    let recommended_certifications = if model.presence.certifications {
        Vec::new()
    } else {
        recommend::get_cert_suggestions(
            input
                .domain
                .as_deref()
                .unwrap_or(recommend::DEFAULT_CERT_DOMAIN),
        )
    };

    tracing::debug!(
        total = totals.total_score,
        average = totals.overall_score_average,
        rubric = rubric.earned,
        "aggregated resume score"
    );

    ScoreReport {
        result_key: result_key(input, &model),
        applicant: model.applicant.clone(),
        sections,
        total_score: totals.total_score,
        overall_score_average: totals.overall_score_average,
        overall_grade: totals.overall_grade,
        suggestions: recommend::suggestions(&model.presence),
        recommended_certifications,
        role_match: features::role_match(&model.normalized, &input.role_title, &config.catalog),
        metrics,
        links: model.links,
    }
}

fn verified_count(input: &ScoreInput, category: Category) -> Option<u32> {
    match category {
        Category::GitHub => input.github_repo_count,
        Category::LeetCode => input.leetcode_solved_count,
        _ => None,
    }
}

/// Stable cache key over the identifiers and the resume content.
pub fn result_key(input: &ScoreInput, model: &ResumeModel) -> String {
    let canonical = serde_json::json!({
        "github": model.github_username.as_deref().unwrap_or(""),
        "leetcode": model.leetcode_username.as_deref().unwrap_or(""),
        "resume_hash": sha256_hex(input.text.as_bytes()),
        "role": input.role_title,
    });
    sha256_hex(canonical.to_string().as_bytes())
}

fn sha256_hex(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    format!("{digest:x}")
}
