use crate::types::report::{Source, SubCriterion};
use crate::types::scoring::{round_score, Metrics, Score};

pub const RUBRIC_MAX: Score = 15;

#[derive(Debug, Clone, PartialEq)]
pub struct RubricScore {
    pub items: Vec<SubCriterion>,
    pub earned: Score,
    pub score_100: Score,
}

pub fn score_resume_content(metrics: &Metrics) -> RubricScore {
    let layout = u32::from(metrics.sections_present)
        + u32::from(metrics.single_column)
        + u32::from(metrics.text_extractable);

    let actions = band(metrics.action_verbs_per_bullet, &[(0.8, 2), (0.5, 1)])
        + band(metrics.quantified_bullets_ratio, &[(0.6, 2), (0.3, 1)]);

    let keywords = band(metrics.keyword_match_rate, &[(0.75, 3), (0.5, 2), (0.3, 1)]);

    let brevity =
        u32::from(metrics.pages <= 2) + u32::from(metrics.avg_bullets_per_job <= 7.0);

    let cleanliness = u32::from(metrics.repetition_rate <= 0.10)
        + u32::from(metrics.jargon_rate <= 0.15)
        + u32::from(metrics.unique_skills_count >= 8);

    let items = vec![
        line(
            "ATS-friendly layout & structure",
            layout,
            3,
            "Readable fonts, minimal columns.",
        ),
        line(
            "Action verbs & quantified results",
            actions,
            4,
            "Quantify achievements.",
        ),
        line(
            "Job-relevant keyword alignment",
            keywords,
            3,
            "Mirror JD keywords.",
        ),
        line("Brevity & conciseness", brevity, 2, "Keep to 1–2 pages."),
        line(
            "Minimal jargon / repetition",
            cleanliness,
            3,
            "Avoid jargon/repetition.",
        ),
    ];

    let earned: Score = items.iter().map(|item| item.earned).sum();
    RubricScore {
        items,
        earned,
        score_100: round_score(f64::from(earned) / f64::from(RUBRIC_MAX) * 100.0),
    }
}

/// First threshold the value reaches wins; thresholds are in descending order.
fn band(value: f64, thresholds: &[(f64, Score)]) -> Score {
    thresholds
        .iter()
        .find(|(threshold, _)| value >= *threshold)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

fn line(name: &str, earned: Score, max: Score, insight: &str) -> SubCriterion {
    SubCriterion::new(name, earned, max, insight, Source::Extracted)
}
