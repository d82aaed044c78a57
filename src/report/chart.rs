use crate::types::report::ScoreReport;
use crate::types::scoring::Score;
use serde::Serialize;

/// Bar-chart payload: one bar per section, colored by its grade.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPayload {
    pub labels: Vec<String>,
    pub scores: Vec<Score>,
    #[serde(rename = "backgroundColors")]
    pub background_colors: Vec<&'static str>,
}

impl ChartPayload {
    pub fn from_report(report: &ScoreReport) -> Self {
        let mut payload = Self {
            labels: Vec::with_capacity(report.sections.len()),
            scores: Vec::with_capacity(report.sections.len()),
            background_colors: Vec::with_capacity(report.sections.len()),
        };
        for (label, section) in &report.sections {
            payload.labels.push(label.clone());
            payload.scores.push(section.score);
            payload.background_colors.push(section.grade.color());
        }
        payload
    }
}

#[derive(Debug, Serialize)]
pub struct LabeledChart<'a> {
    pub path: &'a str,
    #[serde(flatten)]
    pub chart: ChartPayload,
}

pub fn to_chart_json(report: &ScoreReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&ChartPayload::from_report(report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::score_resume;
    use crate::types::config::EngineConfig;
    use crate::types::scoring::ScoreInput;

    #[test]
    fn chart_payload_is_parallel_and_colored_by_grade() {
        let report = score_resume(
            &ScoreInput::new("https://github.com/alice", ""),
            &EngineConfig::default(),
        );
        let payload = ChartPayload::from_report(&report);
        assert_eq!(payload.labels.len(), 6);
        assert_eq!(payload.scores.len(), 6);
        assert_eq!(payload.background_colors.len(), 6);
        assert_eq!(payload.labels[0], "GitHub Profile");
        assert_eq!(payload.scores[0], 70);
        // 70 is Good
        assert_eq!(payload.background_colors[0], "#2196F3");
        // absent LeetCode scores 0, Poor
        assert_eq!(payload.background_colors[1], "#dc3545");
    }

    #[test]
    fn chart_json_uses_camel_case_color_key() {
        let report = score_resume(&ScoreInput::new("", ""), &EngineConfig::default());
        let rendered = to_chart_json(&report).expect("chart should serialize");
        assert!(rendered.contains("\"backgroundColors\""));
        assert!(!rendered.contains("background_colors"));
    }
}
