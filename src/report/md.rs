use crate::types::report::{ScoreReport, Source};

pub fn to_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Resume Score: {}\n\n", report.applicant.name));
    output.push_str(&format!(
        "Total score: {} / 100\n\nAverage: {} ({})\n\n",
        report.total_score, report.overall_score_average, report.overall_grade
    ));
    output.push_str(&format!(
        "- contact detected: {}\n- github detected: {}\n- linkedin detected: {}\n\n",
        yes_no(report.applicant.contact_detected),
        yes_no(report.applicant.github_detected),
        yes_no(report.applicant.linkedin_detected)
    ));

    output.push_str("## Sections\n\n");
    output.push_str("| Section | Score | Grade | Weight |\n|---|---|---|---|\n");
    for section in report.sections.values() {
        output.push_str(&format!(
            "| {} | {} | {} | {}% |\n",
            section.name, section.score, section.grade, section.weight
        ));
    }
    output.push('\n');

    for section in report.sections.values() {
        output.push_str(&format!("### {}\n\n", section.name));
        for line in &section.sub_criteria {
            output.push_str(&format!(
                "- {}: {}/{}{} - {}\n",
                line.name,
                line.earned,
                line.max,
                match line.source {
                    Source::Verified => " (verified)",
                    _ => "",
                },
                line.insight
            ));
        }
        output.push('\n');
    }

    output.push_str("## Role Match\n\n");
    match &report.role_match.role {
        Some(role) => output.push_str(&format!(
            "- {}: {:.2}% (coverage {:.2}, {} keyword hits)\n\n",
            role, report.role_match.percent, report.role_match.coverage,
            report.role_match.occurrences
        )),
        None => output.push_str("- role not in catalog\n\n"),
    }

    push_list(&mut output, "Suggestions", &report.suggestions);
    push_list(
        &mut output,
        "Recommended Certifications",
        &report.recommended_certifications,
    );

    output.push_str("## Links\n\n");
    if report.links.is_empty() {
        output.push_str("- none\n");
    } else {
        for link in &report.links {
            output.push_str(&format!(
                "- {}: {}\n",
                link.kind.as_str(),
                link.url.as_deref().unwrap_or("(mentioned)")
            ));
        }
    }

    output
}

fn push_list(output: &mut String, heading: &str, items: &[String]) {
    output.push_str(&format!("## {heading}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
    output.push('\n');
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::score_resume;
    use crate::types::config::EngineConfig;
    use crate::types::scoring::ScoreInput;

    #[test]
    fn markdown_report_contains_sections() {
        let report = score_resume(
            &ScoreInput::new("Alice\nhttps://github.com/alice", "software engineer"),
            &EngineConfig::default(),
        );

        let rendered = to_markdown(&report);
        assert!(rendered.starts_with("# Resume Score: Alice"));
        assert!(rendered.contains("| GitHub Profile | 70 | Good | 25% |"));
        assert!(rendered.contains("### Resume (ATS Score)"));
        assert!(rendered.contains("- GitHub: https://github.com/alice"));
        assert!(rendered.contains("## Recommended Certifications"));
    }

    #[test]
    fn markdown_handles_empty_resume() {
        let report = score_resume(&ScoreInput::new("", ""), &EngineConfig::default());
        let rendered = to_markdown(&report);
        assert!(rendered.contains("Applicant Name Not Found"));
        assert!(rendered.contains("- role not in catalog"));
        assert!(rendered.contains("## Links\n\n- none"));
    }
}
