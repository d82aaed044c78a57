use indexmap::IndexMap;

const BUILTIN_ROLES: &[(&str, &[&str])] = &[
    (
        "software engineer",
        &[
            "python",
            "java",
            "javascript",
            "react",
            "node",
            "docker",
            "kubernetes",
            "microservices",
            "rest",
            "graphql",
            "aws",
            "gcp",
            "ci/cd",
            "unit testing",
        ],
    ),
    (
        "data scientist",
        &[
            "python",
            "pandas",
            "numpy",
            "sklearn",
            "tensorflow",
            "pytorch",
            "nlp",
            "cv",
            "statistics",
            "sql",
            "experiment",
            "a/b testing",
            "data visualization",
        ],
    ),
    (
        "devops engineer",
        &[
            "ci/cd",
            "docker",
            "kubernetes",
            "terraform",
            "ansible",
            "aws",
            "gcp",
            "azure",
            "monitoring",
            "prometheus",
            "grafana",
            "helm",
            "sre",
        ],
    ),
    (
        "web developer",
        &[
            "html",
            "css",
            "javascript",
            "react",
            "next.js",
            "vue",
            "node",
            "express",
            "rest",
            "graphql",
            "responsive",
            "seo",
        ],
    ),
    (
        "mobile app developer",
        &[
            "android",
            "ios",
            "kotlin",
            "swift",
            "flutter",
            "react native",
            "firebase",
            "push notifications",
            "play store",
            "app store",
        ],
    ),
    (
        "human resources",
        &[
            "recruitment",
            "onboarding",
            "payroll",
            "employee engagement",
            "hrms",
            "policy",
            "compliance",
            "talent acquisition",
            "grievance",
            "training",
        ],
    ),
    (
        "marketing",
        &[
            "seo",
            "sem",
            "campaign",
            "content",
            "email marketing",
            "social media",
            "analytics",
            "branding",
            "roi",
            "conversion",
            "google ads",
        ],
    ),
    (
        "sales",
        &[
            "crm",
            "pipeline",
            "lead generation",
            "negotiation",
            "quota",
            "prospecting",
            "closing",
            "upsell",
            "cross-sell",
            "demo",
        ],
    ),
    (
        "finance",
        &[
            "budgeting",
            "forecasting",
            "reconciliation",
            "audit",
            "financial analysis",
            "p&l",
            "variance",
            "sap",
            "tally",
            "excel",
        ],
    ),
    (
        "customer service",
        &[
            "crm",
            "zendesk",
            "freshdesk",
            "sla",
            "csat",
            "ticketing",
            "call handling",
            "escalation",
            "knowledge base",
            "communication",
        ],
    ),
];

/// Role title → ordered keyword list. Built once, then shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleKeywordCatalog {
    roles: IndexMap<String, Vec<String>>,
}

impl Default for RoleKeywordCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RoleKeywordCatalog {
    pub fn builtin() -> Self {
        let mut catalog = Self {
            roles: IndexMap::new(),
        };
        for (title, keywords) in BUILTIN_ROLES {
            catalog.insert(title, keywords.iter().map(|keyword| keyword.to_string()));
        }
        catalog
    }

    /// Adds or replaces a role. Titles and keywords are lowercased; duplicate
    /// keywords keep their first position.
    pub fn insert(&mut self, title: &str, keywords: impl IntoIterator<Item = String>) {
        let mut deduped: Vec<String> = Vec::new();
        for keyword in keywords {
            let keyword = keyword.trim().to_lowercase();
            if !keyword.is_empty() && !deduped.contains(&keyword) {
                deduped.push(keyword);
            }
        }
        self.roles.insert(title.trim().to_lowercase(), deduped);
    }

    /// First catalog title contained in the caller's role title wins.
    pub fn resolve(&self, role_title: &str) -> Option<(&str, &[String])> {
        let wanted = role_title.to_lowercase().replace('_', " ");
        self.roles
            .iter()
            .find(|(title, _)| wanted.contains(title.as_str()))
            .map(|(title, keywords)| (title.as_str(), keywords.as_slice()))
    }

    pub fn keywords_for(&self, role_title: &str) -> &[String] {
        self.resolve(role_title)
            .map(|(_, keywords)| keywords)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.roles
            .iter()
            .map(|(title, keywords)| (title.as_str(), keywords.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_ten_roles_in_order() {
        let catalog = RoleKeywordCatalog::builtin();
        assert_eq!(catalog.len(), 10);
        let titles: Vec<_> = catalog.iter().map(|(title, _)| title).collect();
        assert_eq!(titles.first(), Some(&"software engineer"));
        assert_eq!(titles.last(), Some(&"customer service"));
        assert_eq!(catalog.keywords_for("software engineer").len(), 14);
    }

    #[test]
    fn resolve_matches_catalog_title_inside_caller_title() {
        let catalog = RoleKeywordCatalog::builtin();
        let (title, keywords) = catalog
            .resolve("Senior Data Scientist II")
            .expect("role should resolve");
        assert_eq!(title, "data scientist");
        assert_eq!(keywords[0], "python");
    }

    #[test]
    fn resolve_accepts_form_slugs() {
        let catalog = RoleKeywordCatalog::builtin();
        let (title, _) = catalog
            .resolve("devops_engineer")
            .expect("slug should resolve");
        assert_eq!(title, "devops engineer");
    }

    #[test]
    fn unknown_role_resolves_to_nothing() {
        let catalog = RoleKeywordCatalog::builtin();
        assert!(catalog.resolve("astronaut").is_none());
        assert!(catalog.keywords_for("astronaut").is_empty());
    }

    #[test]
    fn insert_dedupes_and_lowercases() {
        let mut catalog = RoleKeywordCatalog::builtin();
        catalog.insert(
            "QA Engineer",
            ["Selenium", "cypress", "selenium", " "]
                .into_iter()
                .map(String::from),
        );
        assert_eq!(
            catalog.keywords_for("qa engineer"),
            ["selenium".to_string(), "cypress".to_string()]
        );
        assert_eq!(catalog.len(), 11);
    }
}
