use crate::types::report::{Source, SubCriterion};
use crate::types::scoring::{round_score, Category, Score};

struct AssumedLine {
    name: &'static str,
    earned: Score,
    max: Score,
    insight: &'static str,
}

/// A verified count that stands in for one assumed line once it is known.
struct VerifiedLine {
    replaces: &'static str,
    name: &'static str,
    max: Score,
    saturation: u32,
    insight: &'static str,
}

struct PresenceRubric {
    link_name: &'static str,
    link_max: Score,
    found_insight: &'static str,
    missing_insight: &'static str,
    assumed: &'static [AssumedLine],
    verified: Option<VerifiedLine>,
}

const GITHUB: PresenceRubric = PresenceRubric {
    link_name: "Public link present",
    link_max: 20,
    found_insight: "GitHub link detected.",
    missing_insight: "Add your GitHub link.",
    assumed: &[
        AssumedLine {
            name: "Recent activity (assumed)",
            earned: 25,
            max: 40,
            insight: "Add recent commits/pins.",
        },
        AssumedLine {
            name: "Domain-relevant projects (assumed)",
            earned: 25,
            max: 40,
            insight: "Keep repos aligned to role.",
        },
    ],
    verified: Some(VerifiedLine {
        replaces: "Recent activity (assumed)",
        name: "Public repositories",
        max: 40,
        saturation: 10,
        insight: "Counted from the public GitHub profile.",
    }),
};

const LEETCODE: PresenceRubric = PresenceRubric {
    link_name: "Link present",
    link_max: 20,
    found_insight: "Profile link detected.",
    missing_insight: "Include your LeetCode link.",
    assumed: &[
        AssumedLine {
            name: "Problem variety (assumed)",
            earned: 20,
            max: 45,
            insight: "Cover DP/Graphs/Greedy.",
        },
        AssumedLine {
            name: "Consistency (assumed)",
            earned: 20,
            max: 35,
            insight: "Regular practice helps.",
        },
    ],
    verified: Some(VerifiedLine {
        replaces: "Problem variety (assumed)",
        name: "Problems solved",
        max: 45,
        saturation: 150,
        insight: "Counted from the public LeetCode profile.",
    }),
};

const PORTFOLIO: PresenceRubric = PresenceRubric {
    link_name: "Link present",
    link_max: 20,
    found_insight: "Portfolio detected.",
    missing_insight: "Add a simple portfolio site.",
    assumed: &[
        AssumedLine {
            name: "Project write-ups (assumed)",
            earned: 20,
            max: 45,
            insight: "Explain problems & impact.",
        },
        AssumedLine {
            name: "Interactive demos (assumed)",
            earned: 15,
            max: 35,
            insight: "Add live demos if possible.",
        },
    ],
    verified: None,
};

const LINKEDIN: PresenceRubric = PresenceRubric {
    link_name: "Public link present",
    link_max: 30,
    found_insight: "LinkedIn detected.",
    missing_insight: "Add a public LinkedIn URL to boost visibility.",
    assumed: &[AssumedLine {
        name: "Profile completeness (assumed)",
        earned: 30,
        max: 70,
        insight: "Clear headline, summary and custom URL.",
    }],
    verified: None,
};

const CERTIFICATIONS: PresenceRubric = PresenceRubric {
    link_name: "Certifications present",
    link_max: 20,
    found_insight: "Certifications detected.",
    missing_insight: "Consider 1–2 role-aligned certs.",
    assumed: &[
        AssumedLine {
            name: "Role-relevant (assumed)",
            earned: 10,
            max: 25,
            insight: "Keep recent & relevant.",
        },
        AssumedLine {
            name: "Credible issuer (assumed)",
            earned: 10,
            max: 25,
            insight: "Prefer AWS, MS, Coursera, etc.",
        },
        AssumedLine {
            name: "Recency (assumed)",
            earned: 5,
            max: 15,
            insight: "Within 2 years preferred.",
        },
        AssumedLine {
            name: "Completeness (assumed)",
            earned: 5,
            max: 15,
            insight: "Title + issuer clearly listed.",
        },
    ],
    verified: None,
};

fn rubric_for(category: Category) -> Option<&'static PresenceRubric> {
    match category {
        Category::GitHub => Some(&GITHUB),
        Category::LeetCode => Some(&LEETCODE),
        Category::Portfolio => Some(&PORTFOLIO),
        Category::LinkedIn => Some(&LINKEDIN),
        Category::Certifications => Some(&CERTIFICATIONS),
        Category::Resume => None,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresenceScore {
    pub score: Score,
    pub sub_criteria: Vec<SubCriterion>,
}

/// Present categories earn their fixed lines; absent ones get a single zero line.
/// The score is always the sum of the lines' earned points.
pub fn score_presence(category: Category, present: bool, verified_count: Option<u32>) -> PresenceScore {
    let Some(rubric) = rubric_for(category) else {
        return PresenceScore {
            score: 0,
            sub_criteria: Vec::new(),
        };
    };

    if !present {
        return PresenceScore {
            score: 0,
            sub_criteria: vec![SubCriterion::new(
                rubric.link_name,
                0,
                rubric.link_max,
                rubric.missing_insight,
                Source::Extracted,
            )],
        };
    }

    let mut sub_criteria = vec![SubCriterion::new(
        rubric.link_name,
        rubric.link_max,
        rubric.link_max,
        rubric.found_insight,
        Source::Extracted,
    )];
    for assumed in rubric.assumed {
        sub_criteria.push(SubCriterion::new(
            assumed.name,
            assumed.earned,
            assumed.max,
            assumed.insight,
            Source::UnverifiedHeuristic,
        ));
    }

    if let (Some(verified), Some(count)) = (&rubric.verified, verified_count) {
        apply_verified(&mut sub_criteria, verified, count);
    }

    PresenceScore {
        score: sub_criteria.iter().map(|line| line.earned).sum(),
        sub_criteria,
    }
}

fn apply_verified(sub_criteria: &mut [SubCriterion], verified: &VerifiedLine, count: u32) {
    let Some(slot) = sub_criteria
        .iter_mut()
        .find(|line| line.is_unverified() && line.name == verified.replaces)
    else {
        return;
    };
    let fraction = f64::from(count.min(verified.saturation)) / f64::from(verified.saturation);
    *slot = SubCriterion::new(
        verified.name,
        round_score(fraction * f64::from(verified.max)),
        verified.max,
        format!("{} ({count})", verified.insight.trim_end_matches('.')),
        Source::Verified,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_scores_match_canonical_table() {
        let expected = [
            (Category::GitHub, 70),
            (Category::LeetCode, 60),
            (Category::Portfolio, 55),
            (Category::LinkedIn, 60),
            (Category::Certifications, 50),
        ];
        for (category, score) in expected {
            let result = score_presence(category, true, None);
            assert_eq!(result.score, score, "{category:?}");
            let sum: Score = result.sub_criteria.iter().map(|line| line.earned).sum();
            assert_eq!(sum, result.score);
            let max: Score = result.sub_criteria.iter().map(|line| line.max).sum();
            assert_eq!(max, 100, "{category:?} maxes should span 0-100");
        }
    }

    #[test]
    fn absent_category_emits_single_zero_line() {
        for category in Category::PRESENCE {
            let result = score_presence(category, false, Some(50));
            assert_eq!(result.score, 0);
            assert_eq!(result.sub_criteria.len(), 1);
            assert_eq!(result.sub_criteria[0].earned, 0);
        }
    }

    #[test]
    fn assumed_lines_are_tagged_unverified() {
        let result = score_presence(Category::Portfolio, true, None);
        assert_eq!(result.sub_criteria[0].source, Source::Extracted);
        assert!(result.sub_criteria[1..]
            .iter()
            .all(|line| line.source == Source::UnverifiedHeuristic));
    }

    #[test]
    fn verified_repo_count_replaces_only_the_tagged_line() {
        let result = score_presence(Category::GitHub, true, Some(4));
        let names: Vec<_> = result
            .sub_criteria
            .iter()
            .map(|line| line.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec![
                "Public link present",
                "Public repositories",
                "Domain-relevant projects (assumed)"
            ]
        );
        assert_eq!(result.sub_criteria[1].earned, 16);
        assert_eq!(result.sub_criteria[1].source, Source::Verified);
        assert_eq!(result.score, 20 + 16 + 25);
    }

    #[test]
    fn verified_counts_saturate() {
        let github = score_presence(Category::GitHub, true, Some(500));
        assert_eq!(github.score, 20 + 40 + 25);
        let leetcode = score_presence(Category::LeetCode, true, Some(0));
        assert_eq!(leetcode.score, 20 + 0 + 20);
    }

    #[test]
    fn verified_count_is_ignored_where_no_verified_path_exists() {
        let with = score_presence(Category::LinkedIn, true, Some(10));
        let without = score_presence(Category::LinkedIn, true, None);
        assert_eq!(with, without);
    }

    #[test]
    fn resume_category_has_no_presence_rubric() {
        assert_eq!(score_presence(Category::Resume, true, None).score, 0);
    }
}
