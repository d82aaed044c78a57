use crate::types::report::{CategoryResult, GradeTag};
use crate::types::scoring::{round_score, Score, WEIGHT_TOTAL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub total_score: Score,
    pub overall_score_average: Score,
    pub overall_grade: GradeTag,
}

/// Weighted total over each section's own weight, plus the unweighted mean that drives the grade.
pub fn aggregate<'a>(sections: impl IntoIterator<Item = &'a CategoryResult>) -> Totals {
    let mut weighted = 0.0_f64;
    let mut sum = 0_u32;
    let mut count = 0_u32;
    for section in sections {
        weighted += f64::from(section.score) * (f64::from(section.weight) / f64::from(WEIGHT_TOTAL));
        sum += section.score;
        count += 1;
    }

    let overall_score_average = round_score(f64::from(sum) / f64::from(count.max(1)));
    Totals {
        total_score: round_score(weighted),
        overall_score_average,
        overall_grade: GradeTag::from_score(f64::from(overall_score_average)),
    }
}
