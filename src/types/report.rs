use crate::types::scoring::{Metrics, Score};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GradeTag {
    Poor,
    Average,
    Good,
    Excellent,
}

impl GradeTag {
    /// Bands are inclusive on the lower bound: `[0,50)`, `[50,70)`, `[70,85)`, `[85,∞)`.
    pub fn from_score(score: f64) -> Self {
        if score >= 85.0 {
            GradeTag::Excellent
        } else if score >= 70.0 {
            GradeTag::Good
        } else if score >= 50.0 {
            GradeTag::Average
        } else {
            GradeTag::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GradeTag::Poor => "Poor",
            GradeTag::Average => "Average",
            GradeTag::Good => "Good",
            GradeTag::Excellent => "Excellent",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            GradeTag::Excellent => "#4CAF50",
            GradeTag::Good => "#2196F3",
            GradeTag::Average => "#FF9800",
            GradeTag::Poor => "#dc3545",
        }
    }
}

impl fmt::Display for GradeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a sub-criterion's points come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    /// Derived from the resume text itself.
    Extracted,
    /// Assumed on presence alone; replaceable by verified data.
    UnverifiedHeuristic,
    /// Backed by an external lookup.
    Verified,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubCriterion {
    pub name: String,
    pub earned: Score,
    pub max: Score,
    pub insight: String,
    pub source: Source,
}

impl SubCriterion {
    pub fn new(
        name: impl Into<String>,
        earned: Score,
        max: Score,
        insight: impl Into<String>,
        source: Source,
    ) -> Self {
        Self {
            name: name.into(),
            earned: earned.min(max),
            max,
            insight: insight.into(),
            source,
        }
    }

    pub fn is_unverified(&self) -> bool {
        self.source == Source::UnverifiedHeuristic
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    pub name: String,
    pub score: Score,
    pub grade: GradeTag,
    pub weight: u32,
    pub sub_criteria: Vec<SubCriterion>,
}

impl CategoryResult {
    pub fn new(
        name: impl Into<String>,
        score: Score,
        weight: u32,
        sub_criteria: Vec<SubCriterion>,
    ) -> Self {
        Self {
            name: name.into(),
            score,
            grade: GradeTag::from_score(f64::from(score)),
            weight,
            sub_criteria,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkKind {
    GitHub,
    LinkedIn,
    Portfolio,
    Email,
    Other,
    #[serde(rename = "LinkedIn (Inferred)")]
    LinkedInInferred,
}

impl LinkKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LinkKind::GitHub => "GitHub",
            LinkKind::LinkedIn => "LinkedIn",
            LinkKind::Portfolio => "Portfolio",
            LinkKind::Email => "Email",
            LinkKind::Other => "Other",
            LinkKind::LinkedInInferred => "LinkedIn (Inferred)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub kind: LinkKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub name: String,
    pub contact_detected: bool,
    pub github_detected: bool,
    pub linkedin_detected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleMatch {
    pub role: Option<String>,
    pub percent: f64,
    pub coverage: f64,
    pub occurrences: usize,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreReport {
    pub result_key: String,
    pub applicant: Applicant,
    pub sections: IndexMap<String, CategoryResult>,
    pub total_score: Score,
    pub overall_score_average: Score,
    pub overall_grade: GradeTag,
    pub suggestions: Vec<String>,
    pub recommended_certifications: Vec<String>,
    pub role_match: RoleMatch,
    pub metrics: Metrics,
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_tag_band_boundaries() {
        assert_eq!(GradeTag::from_score(49.9), GradeTag::Poor);
        assert_eq!(GradeTag::from_score(50.0), GradeTag::Average);
        assert_eq!(GradeTag::from_score(69.9), GradeTag::Average);
        assert_eq!(GradeTag::from_score(70.0), GradeTag::Good);
        assert_eq!(GradeTag::from_score(84.9), GradeTag::Good);
        assert_eq!(GradeTag::from_score(85.0), GradeTag::Excellent);
        assert_eq!(GradeTag::from_score(100.0), GradeTag::Excellent);
        assert_eq!(GradeTag::from_score(0.0), GradeTag::Poor);
    }

    #[test]
    fn grade_tag_is_monotonic() {
        let mut previous = GradeTag::Poor;
        for tenth in 0..=1000 {
            let grade = GradeTag::from_score(f64::from(tenth) / 10.0);
            assert!(grade >= previous);
            previous = grade;
        }
    }

    #[test]
    fn sub_criterion_clamps_earned_to_max() {
        let line = SubCriterion::new("x", 9, 4, "", Source::Extracted);
        assert_eq!(line.earned, 4);
    }

    #[test]
    fn link_kind_serializes_inferred_label() {
        let link = Link {
            url: None,
            kind: LinkKind::LinkedInInferred,
        };
        let rendered = serde_json::to_string(&link).expect("link should serialize");
        assert_eq!(rendered, r#"{"url":null,"type":"LinkedIn (Inferred)"}"#);
    }
}
