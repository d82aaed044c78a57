use crate::catalog::RoleKeywordCatalog;
use crate::scan::text::normalize;
use crate::types::report::RoleMatch;
use crate::types::scoring::Metrics;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub const ACTION_VERBS: [&str; 13] = [
    "led",
    "built",
    "created",
    "designed",
    "implemented",
    "developed",
    "optimized",
    "increased",
    "reduced",
    "launched",
    "migrated",
    "improved",
    "delivered",
];

const CHARS_PER_PAGE: f64 = 2000.0;
const MAX_AVG_BULLETS_PER_JOB: f64 = 12.0;
const SKILL_TOKENS_PER_SKILL: usize = 50;
const MAX_UNIQUE_SKILLS: u32 = 15;

static BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n•|\n-|\n\d+\.").expect("bullet pattern is valid"));

// `^` without multi-line mode: only the very start of the text counts.
static ACTION_VERB_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    ACTION_VERBS
        .iter()
        .map(|verb| {
            Regex::new(&format!(r"(?i)(?:^|\n|•|-)\s*{verb}\b"))
                .expect("action verb pattern is valid")
        })
        .collect()
});

static QUANTIFIED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b\d+(?:\.\d+)?%?|\b(?:k|m|bn)\b").expect("quantity pattern is valid")
});

static EMPLOYER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:company|employer|experience)\b").expect("employer pattern is valid")
});

static SKILL_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z][a-zA-Z0-9+#.\-]{1,20}").expect("skill token pattern is valid")
});

pub fn derive_metrics(text: &str, role_title: &str, catalog: &RoleKeywordCatalog) -> Metrics {
    let normalized = normalize(text);

    let sections_present = (normalized.contains("experience")
        || normalized.contains("work history"))
        && normalized.contains("education")
        && normalized.contains("skills");
    let text_extractable = !normalized.is_empty();

    let bullets = count_bullets(text);
    let action_hits: usize = ACTION_VERB_RES
        .iter()
        .map(|re| re.find_iter(text).count())
        .sum();
    let quantified_hits = QUANTIFIED_RE.find_iter(text).count();

    let employer_mentions = EMPLOYER_RE.find_iter(&normalized).count().max(1);
    let pages = ((text.chars().count() as f64 / CHARS_PER_PAGE).round_ties_even() as u32).max(1);

    let repetition_rate = if normalized.contains("responsible for") {
        0.18
    } else {
        0.08
    };
    let jargon_rate = if normalized.contains("synergy") || normalized.contains("leverage") {
        0.22
    } else {
        0.12
    };

    let distinct_tokens: HashSet<&str> = SKILL_TOKEN_RE
        .find_iter(text)
        .map(|token| token.as_str())
        .collect();
    let unique_skills_count =
        ((distinct_tokens.len() / SKILL_TOKENS_PER_SKILL) as u32).min(MAX_UNIQUE_SKILLS);

    let metrics = Metrics {
        sections_present,
        single_column: true,
        text_extractable,
        action_verbs_per_bullet: ratio(action_hits, bullets),
        quantified_bullets_ratio: ratio(quantified_hits, bullets),
        keyword_match_rate: keyword_match_rate(&normalized, catalog.keywords_for(role_title)),
        pages,
        avg_bullets_per_job: (bullets as f64 / employer_mentions as f64)
            .min(MAX_AVG_BULLETS_PER_JOB),
        repetition_rate,
        jargon_rate,
        unique_skills_count,
    };
    tracing::debug!(?metrics, bullets, "derived resume metrics");
    metrics
}

/// Bullet markers at a line start; never less than one so ratios stay defined.
pub fn count_bullets(text: &str) -> usize {
    BULLET_RE.find_iter(text).count().max(1)
}

fn ratio(hits: usize, bullets: usize) -> f64 {
    (hits as f64 / bullets.max(1) as f64).min(1.0)
}

/// `normalized` must already be passed through [`normalize`].
pub fn keyword_match_rate(normalized: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let hits = keywords
        .iter()
        .filter(|keyword| normalized.contains(keyword.to_lowercase().as_str()))
        .count();
    hits as f64 / keywords.len() as f64
}

/// Coverage weighted 70%, keyword density 30%.
pub fn role_match(normalized: &str, role_title: &str, catalog: &RoleKeywordCatalog) -> RoleMatch {
    let Some((title, keywords)) = catalog.resolve(role_title) else {
        return RoleMatch {
            role: None,
            percent: 0.0,
            coverage: 0.0,
            occurrences: 0,
            keywords: Vec::new(),
        };
    };
    if keywords.is_empty() {
        return RoleMatch {
            role: Some(title.to_string()),
            percent: 0.0,
            coverage: 0.0,
            occurrences: 0,
            keywords: Vec::new(),
        };
    }

    let coverage = keyword_match_rate(normalized, keywords);
    let alternation = keywords
        .iter()
        .map(|keyword| regex::escape(keyword))
        .collect::<Vec<_>>()
        .join("|");
    let occurrences = Regex::new(&alternation)
        .map(|re| re.find_iter(normalized).count())
        .unwrap_or(0);
    let density = (occurrences as f64 / (keywords.len() * 2) as f64).min(1.0);

    RoleMatch {
        role: Some(title.to_string()),
        percent: round2((0.70 * coverage + 0.30 * density) * 100.0),
        coverage: round2(coverage),
        occurrences,
        keywords: keywords.to_vec(),
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
