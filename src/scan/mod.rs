pub mod filesystem;
pub mod links;
pub mod text;

use crate::types::report::{Applicant, Link, LinkKind};
use crate::types::scoring::{Category, ScoreInput};
use once_cell::sync::Lazy;
use regex::Regex;

static PORTFOLIO_TEXT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:netlify|vercel|github\.io|\.me|\.io|\.dev|\.app)\b")
        .expect("portfolio pattern is valid")
});

static CERTIFICATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:certification|certified|certificate|course)\b")
        .expect("certification pattern is valid")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PresenceSignals {
    pub github: bool,
    pub leetcode: bool,
    pub portfolio: bool,
    pub linkedin: bool,
    pub certifications: bool,
}

impl PresenceSignals {
    pub fn is_present(&self, category: Category) -> bool {
        match category {
            Category::GitHub => self.github,
            Category::LeetCode => self.leetcode,
            Category::Portfolio => self.portfolio,
            Category::LinkedIn => self.linkedin,
            Category::Certifications => self.certifications,
            Category::Resume => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResumeModel {
    pub normalized: String,
    pub links: Vec<Link>,
    pub github_username: Option<String>,
    pub leetcode_username: Option<String>,
    pub presence: PresenceSignals,
    pub applicant: Applicant,
}

pub fn discover(input: &ScoreInput) -> ResumeModel {
    let raw = input.text.as_str();
    let lowered = raw.to_lowercase();
    let normalized = text::normalize(raw);
    let links = links::extract_links(raw);

    let github_username = input
        .github_username
        .clone()
        .or_else(|| links::github_username(raw));
    let leetcode_username = input
        .leetcode_username
        .clone()
        .or_else(|| links::leetcode_username(raw));

    let has_link = |kind: LinkKind| links.iter().any(|link| link.kind == kind);
    let presence = PresenceSignals {
        github: github_username.is_some()
            || has_link(LinkKind::GitHub)
            || lowered.contains("github.com"),
        leetcode: leetcode_username.is_some() || lowered.contains("leetcode.com"),
        portfolio: has_link(LinkKind::Portfolio) || PORTFOLIO_TEXT_RE.is_match(raw),
        linkedin: has_link(LinkKind::LinkedIn) || lowered.contains("linkedin.com/in/"),
        certifications: CERTIFICATION_RE.is_match(raw),
    };

    let applicant = Applicant {
        name: links::applicant_name(raw),
        contact_detected: ["@", "phone", "email"]
            .iter()
            .any(|marker| lowered.contains(marker)),
        github_detected: lowered.contains("github.com") || input.github_username.is_some(),
        linkedin_detected: lowered.contains("linkedin.com"),
    };

    ResumeModel {
        normalized,
        links,
        github_username,
        leetcode_username,
        presence,
        applicant,
    }
}
