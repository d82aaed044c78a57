use crate::scan::PresenceSignals;
use crate::types::scoring::Category;

pub const DEFAULT_CERT_DOMAIN: &str = "technical";

const ANALYTICAL_DOMAINS: [&str; 4] = ["analytical", "data", "data analytics", "data science"];
const TECHNICAL_DOMAINS: [&str; 3] = ["technical", "software", "engineering"];

const ANALYTICAL_CERTS: [&str; 3] = [
    "Google Data Analytics Professional Certificate – Coursera",
    "IBM Data Science Professional Certificate – Coursera",
    "Microsoft Certified: Azure Data Scientist Associate",
];

const TECHNICAL_CERTS: [&str; 3] = [
    "AWS Certified Developer – AWS",
    "Microsoft Certified: Azure Developer Associate",
    "Certified Kubernetes Application Developer (CKAD)",
];

const DEFAULT_CERTS: [&str; 3] = [
    "IBM AI Practitioner – Coursera",
    "Google Data Analytics Professional Certificate – Coursera",
    "AWS Certified Developer – AWS",
];

pub fn suggestion(category: Category) -> Option<&'static str> {
    match category {
        Category::GitHub => Some("Add a public GitHub link with recent activity."),
        Category::LeetCode => Some("Include your LeetCode (or equivalent) problem-solving profile."),
        Category::Portfolio => {
            Some("Publish a portfolio (Netlify/Vercel/GitHub Pages) with 2–3 write-ups.")
        }
        Category::LinkedIn => Some("Link a public LinkedIn profile with a clear headline/summary."),
        Category::Certifications => Some("Add 1–2 recent role-relevant certifications."),
        Category::Resume => None,
    }
}

/// One suggestion per failed presence test, in category order.
pub fn suggestions(presence: &PresenceSignals) -> Vec<String> {
    Category::PRESENCE
        .iter()
        .filter(|category| !presence.is_present(**category))
        .filter_map(|category| suggestion(*category))
        .map(str::to_string)
        .collect()
}

pub fn get_cert_suggestions(domain: &str) -> Vec<String> {
    let domain = domain.trim().to_lowercase();
    let bucket = if ANALYTICAL_DOMAINS.contains(&domain.as_str()) {
        &ANALYTICAL_CERTS
    } else if TECHNICAL_DOMAINS.contains(&domain.as_str()) {
        &TECHNICAL_CERTS
    } else {
        &DEFAULT_CERTS
    };
    bucket.iter().map(|cert| cert.to_string()).collect()
}
