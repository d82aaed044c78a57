mod analyze;
mod catalog;
mod cli;
mod config;
mod enrich;
mod error;
mod report;
mod scan;
mod types;

use crate::error::ScoreError;
use crate::types::config::{EngineConfig, ScoreConfig};
use crate::types::scoring::ScoreInput;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(explicit: Option<&std::path::Path>) -> Result<Option<ScoreConfig>, ScoreError> {
    match explicit {
        Some(path) => config::load_config_file(path).map(Some),
        None => config::load_config(&std::env::current_dir()?),
    }
}

fn score_command(cmd: cli::ScoreCommand, loaded: Option<&ScoreConfig>) -> Result<i32, ScoreError> {
    let engine = EngineConfig::from_config(loaded)?;
    let files = scan::filesystem::collect_resume_files(&cmd.path)?;
    if files.is_empty() {
        tracing::warn!(path = %cmd.path.display(), "no .txt or .md resumes found");
    }

    let enricher = if cmd.enrich && enrich::is_available() {
        let settings = loaded
            .map(ScoreConfig::enrichment_settings)
            .unwrap_or_default();
        Some(enrich::ProfileEnricher::new(settings))
    } else {
        if cmd.enrich {
            tracing::warn!("built without the `enrichment` feature; --enrich is ignored");
        }
        None
    };

    let mut reports = Vec::with_capacity(files.len());
    for path in &files {
        tracing::info!(path = %path.display(), "scoring resume");
        let text = scan::filesystem::read_resume_text(path)?;
        let mut input = ScoreInput::new(text, cmd.role.clone())
            .with_github(cmd.github.clone())
            .with_leetcode(cmd.leetcode.clone())
            .with_domain(cmd.domain.clone());

        if let Some(enricher) = &enricher {
            let model = scan::discover(&input);
            if model.presence.github {
                if let Some(username) = &model.github_username {
                    input.github_repo_count = Some(enricher.github_repo_count(username));
                }
            }
            if model.presence.leetcode {
                if let Some(username) = &model.leetcode_username {
                    input.leetcode_solved_count = Some(enricher.leetcode_solved_count(username));
                }
            }
        }

        reports.push(report::FileReport {
            path: path.display().to_string(),
            report: analyze::score_resume(&input, &engine),
        });
    }

    let output_format = match cmd.format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
        cli::ReportFormat::Chart => report::OutputFormat::Chart,
    };
    let rendered = report::render_batch(&reports, output_format)?;
    println!("{rendered}");

    if let Some(min_score) = cmd.min_score {
        let below: Vec<_> = reports
            .iter()
            .filter(|entry| entry.report.total_score < min_score)
            .collect();
        for entry in &below {
            eprintln!(
                "warning: {} scored {} (minimum {})",
                entry.path, entry.report.total_score, min_score
            );
        }
        if !below.is_empty() {
            return Ok(exit_code::BELOW_THRESHOLD);
        }
    }
    Ok(exit_code::SUCCESS)
}

fn run() -> Result<i32, ScoreError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Score(cmd) => {
            let loaded = load_config(cli.config.as_deref())?;
            score_command(cmd, loaded.as_ref())
        }
        cli::Commands::Links(cmd) => {
            if !cmd.path.is_file() {
                return Err(ScoreError::PathNotFound(cmd.path.display().to_string()));
            }
            let text = scan::filesystem::read_resume_text(&cmd.path)?;
            let links = scan::links::extract_links(&text);
            if links.is_empty() {
                println!("links: none found");
                return Ok(exit_code::SUCCESS);
            }
            for link in &links {
                println!(
                    "{}\t{}",
                    link.kind.as_str(),
                    link.url.as_deref().unwrap_or("-")
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Roles => {
            let loaded = load_config(cli.config.as_deref())?;
            let engine = EngineConfig::from_config(loaded.as_ref())?;
            tracing::info!(roles = engine.catalog.len(), "listing role catalog");
            for (title, keywords) in engine.catalog.iter() {
                println!("{title}\t{}", keywords.len());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Certs(cmd) => {
            for cert in analyze::recommend::get_cert_suggestions(&cmd.domain) {
                println!("{cert}");
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
