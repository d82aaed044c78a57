pub mod chart;
pub mod json;
pub mod md;

use crate::error::ScoreError;
use crate::types::report::ScoreReport;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
    Chart,
}

/// A report tagged with the file it was scored from.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: String,
    pub report: ScoreReport,
}

pub fn render(report: &ScoreReport, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
        OutputFormat::Chart => chart::to_chart_json(report).map_err(ScoreError::Json),
    }
}

/// A single file renders exactly like [`render`]; several files are wrapped per format.
pub fn render_batch(reports: &[FileReport], format: OutputFormat) -> Result<String, ScoreError> {
    if let [single] = reports {
        return render(&single.report, format);
    }
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports).map_err(ScoreError::Json),
        OutputFormat::Chart => {
            let payloads: Vec<_> = reports
                .iter()
                .map(|entry| chart::LabeledChart {
                    path: &entry.path,
                    chart: chart::ChartPayload::from_report(&entry.report),
                })
                .collect();
            serde_json::to_string_pretty(&payloads).map_err(ScoreError::Json)
        }
        OutputFormat::Md => Ok(reports
            .iter()
            .map(|entry| format!("<!-- {} -->\n{}", entry.path, md::to_markdown(&entry.report)))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}
