use super::text::normalize;
use crate::types::report::{Link, LinkKind};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s)>\]"'}]+"#).expect("url pattern is valid"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern is valid")
});

static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector is valid"));

static GITHUB_USER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)github\.com/([A-Za-z0-9\-]+)").expect("github pattern is valid")
});

static LEETCODE_USER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)leetcode\.com/(?:u/)?([\w\-]+)").expect("leetcode pattern is valid")
});

const PORTFOLIO_HOST_MARKERS: [&str; 3] = ["netlify", "vercel", "github.io"];
const PORTFOLIO_HOST_SUFFIXES: [&str; 4] = [".me", ".io", ".dev", ".app"];

pub fn classify(url: &str) -> LinkKind {
    let lowered = url.to_lowercase();
    if lowered.contains("github.com") {
        LinkKind::GitHub
    } else if lowered.contains("linkedin.com") {
        LinkKind::LinkedIn
    } else if is_portfolio_host(&lowered) {
        LinkKind::Portfolio
    } else if lowered.starts_with("mailto:") {
        LinkKind::Email
    } else {
        LinkKind::Other
    }
}

fn is_portfolio_host(url: &str) -> bool {
    if PORTFOLIO_HOST_MARKERS
        .iter()
        .any(|marker| url.contains(marker))
    {
        return true;
    }
    host(url).is_some_and(|host| {
        PORTFOLIO_HOST_SUFFIXES
            .iter()
            .any(|suffix| host.ends_with(suffix))
    })
}

fn host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest
        .find(|c: char| matches!(c, '/' | '?' | '#' | ':'))
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

/// URLs first, then emails, then any anchor hrefs not seen yet. Emails are
/// always typed `Email`, whatever their domain. A bare
/// "linkedin" mention with no LinkedIn URL yields one inferred entry.
pub fn extract_links(text: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut seen = HashSet::new();
    let mut push = |url: String, kind: LinkKind, links: &mut Vec<Link>| {
        if seen.insert(url.clone()) {
            links.push(Link {
                url: Some(url),
                kind,
            });
        }
    };

    for found in URL_RE.find_iter(text) {
        let url = found.as_str().to_string();
        let kind = classify(&url);
        push(url, kind, &mut links);
    }
    for found in EMAIL_RE.find_iter(text) {
        push(format!("mailto:{}", found.as_str()), LinkKind::Email, &mut links);
    }
    for href in anchor_hrefs(text) {
        let kind = classify(&href);
        push(href, kind, &mut links);
    }

    let has_linkedin = links.iter().any(|link| link.kind == LinkKind::LinkedIn);
    if !has_linkedin && normalize(text).contains("linkedin") {
        links.push(Link {
            url: None,
            kind: LinkKind::LinkedInInferred,
        });
    }

    links
}

/// Plain text is never handed to the HTML parser.
fn anchor_hrefs(text: &str) -> Vec<String> {
    if !text.contains('<') {
        return Vec::new();
    }
    let fragment = Html::parse_fragment(text);
    fragment
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .map(str::trim)
        .filter(|href| !href.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn github_username(text: &str) -> Option<String> {
    GITHUB_USER_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub fn leetcode_username(text: &str) -> Option<String> {
    LEETCODE_USER_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

pub const APPLICANT_NAME_FALLBACK: &str = "Applicant Name Not Found";

pub fn applicant_name(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or(APPLICANT_NAME_FALLBACK)
        .to_string()
}
