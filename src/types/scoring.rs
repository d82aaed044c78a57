use serde::Serialize;

pub type Score = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    GitHub,
    LeetCode,
    Portfolio,
    LinkedIn,
    Resume,
    Certifications,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::GitHub,
        Category::LeetCode,
        Category::Portfolio,
        Category::LinkedIn,
        Category::Resume,
        Category::Certifications,
    ];

    pub const PRESENCE: [Category; 5] = [
        Category::GitHub,
        Category::LeetCode,
        Category::Portfolio,
        Category::LinkedIn,
        Category::Certifications,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::GitHub => "GitHub Profile",
            Category::LeetCode => "LeetCode/DSA Skills",
            Category::Portfolio => "Portfolio Website",
            Category::LinkedIn => "LinkedIn",
            Category::Resume => "Resume (ATS Score)",
            Category::Certifications => "Certifications & Branding",
        }
    }

    pub fn config_key(self) -> &'static str {
        match self {
            Category::GitHub => "github",
            Category::LeetCode => "leetcode",
            Category::Portfolio => "portfolio",
            Category::LinkedIn => "linkedin",
            Category::Resume => "resume",
            Category::Certifications => "certifications",
        }
    }
}

/// Integer weights in percent; the canonical set sums to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryWeights {
    pub github: u32,
    pub leetcode: u32,
    pub portfolio: u32,
    pub linkedin: u32,
    pub resume: u32,
    pub certifications: u32,
}

pub const WEIGHT_TOTAL: u32 = 100;

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            github: 25,
            leetcode: 20,
            portfolio: 20,
            linkedin: 15,
            resume: 10,
            certifications: 10,
        }
    }
}

impl CategoryWeights {
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::GitHub => self.github,
            Category::LeetCode => self.leetcode,
            Category::Portfolio => self.portfolio,
            Category::LinkedIn => self.linkedin,
            Category::Resume => self.resume,
            Category::Certifications => self.certifications,
        }
    }

    pub fn total(&self) -> u32 {
        Category::ALL.iter().map(|category| self.get(*category)).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    pub sections_present: bool,
    pub single_column: bool,
    pub text_extractable: bool,
    pub action_verbs_per_bullet: f64,
    pub quantified_bullets_ratio: f64,
    pub keyword_match_rate: f64,
    pub pages: u32,
    pub avg_bullets_per_job: f64,
    pub repetition_rate: f64,
    pub jargon_rate: f64,
    pub unique_skills_count: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreInput {
    pub text: String,
    pub role_title: String,
    pub github_username: Option<String>,
    pub leetcode_username: Option<String>,
    pub domain: Option<String>,
    /// Best-effort counts from the enrichment client; `None` when not looked up.
    pub github_repo_count: Option<u32>,
    pub leetcode_solved_count: Option<u32>,
}

impl ScoreInput {
    pub fn new(text: impl Into<String>, role_title: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            role_title: role_title.into(),
            ..Self::default()
        }
    }

    pub fn with_github(mut self, username: Option<String>) -> Self {
        self.github_username = non_blank(username);
        self
    }

    pub fn with_leetcode(mut self, username: Option<String>) -> Self {
        self.leetcode_username = non_blank(username);
        self
    }

    pub fn with_domain(mut self, domain: Option<String>) -> Self {
        self.domain = non_blank(domain);
        self
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Round half to even, matching the reference scoring tables at `.5` ties.
pub fn round_score(value: f64) -> Score {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    value.round_ties_even() as Score
}
