//! Static keyword dictionaries — per-industry terms, per-role terms, and the
//! shared action-verb list.
//!
//! Tables are process-wide immutable data, baked in at compile time and read
//! through the lookup functions below. Entries are stored lowercase; the
//! matcher lowercases the corpus once and tests plain substring containment.

/// Known industry identifiers, in dictionary order.
pub const INDUSTRIES: &[&str] = &[
    "technology",
    "healthcare",
    "finance",
    "education",
    "marketing",
    "sales",
];

/// Known role identifiers, in dictionary order.
pub const ROLES: &[&str] = &[
    "Entry",
    "Junior",
    "Mid",
    "Senior",
    "Lead",
    "Principal",
    "Staff",
    "Manager",
    "Director",
    "VP",
    "C-Level",
];

/// Fallback industry applied when a requested identifier is unknown.
pub const DEFAULT_INDUSTRY: &str = "technology";

/// Fallback role applied when a requested identifier is unknown.
pub const DEFAULT_ROLE: &str = "Senior";

const TECHNOLOGY: &[&str] = &[
    "python",
    "java",
    "javascript",
    "typescript",
    "c#",
    "c++",
    "go",
    "rust",
    "php",
    "ruby",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring",
    "laravel",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "gitlab",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "sqlite",
    "microservices",
    "api",
    "rest",
    "graphql",
    "websocket",
    "grpc",
    "ci/cd",
    "devops",
    "agile",
    "scrum",
    "kanban",
    "tdd",
    "bdd",
    "machine learning",
    "ai",
    "data science",
    "analytics",
    "big data",
    "cloud computing",
    "serverless",
    "lambda",
];

const HEALTHCARE: &[&str] = &[
    "patient care",
    "clinical",
    "medical",
    "healthcare",
    "nursing",
    "physician",
    "doctor",
    "hospital",
    "clinic",
    "pharmacy",
    "diagnosis",
    "treatment",
    "therapy",
    "rehabilitation",
    "emr",
    "epic",
    "cerner",
    "allscripts",
    "health information",
    "medical records",
    "hipaa",
    "compliance",
    "quality assurance",
    "patient safety",
    "infection control",
    "medication",
    "prescription",
    "dosage",
    "side effects",
    "contraindications",
    "vital signs",
    "blood pressure",
    "heart rate",
    "temperature",
    "pulse oximetry",
    "iv therapy",
    "catheterization",
    "wound care",
    "dressing changes",
    "medication administration",
    "patient assessment",
    "nursing care plan",
    "discharge planning",
    "patient education",
    "telehealth",
    "remote monitoring",
    "health informatics",
    "clinical decision support",
];

const FINANCE: &[&str] = &[
    "financial analysis",
    "budgeting",
    "forecasting",
    "financial modeling",
    "risk management",
    "investment",
    "portfolio",
    "trading",
    "derivatives",
    "securities",
    "equity",
    "bonds",
    "accounting",
    "gaap",
    "ifrs",
    "audit",
    "compliance",
    "sox",
    "internal controls",
    "financial reporting",
    "p&l",
    "balance sheet",
    "cash flow",
    "revenue recognition",
    "cost accounting",
    "management accounting",
    "financial planning",
    "treasury",
    "credit analysis",
    "loan underwriting",
    "credit risk",
    "market risk",
    "operational risk",
    "regulatory compliance",
    "finra",
    "sec",
    "cftc",
    "basel iii",
    "dodd-frank",
];

const EDUCATION: &[&str] = &[
    "curriculum",
    "lesson planning",
    "instructional design",
    "pedagogy",
    "assessment",
    "student engagement",
    "classroom management",
    "differentiated instruction",
    "special education",
    "iep",
    "504 plan",
    "inclusive education",
    "learning disabilities",
    "educational technology",
    "lms",
    "blackboard",
    "canvas",
    "moodle",
    "google classroom",
    "student information system",
    "sis",
    "gradebook",
    "attendance",
    "parent communication",
    "professional development",
    "continuing education",
    "certification",
    "licensure",
    "educational research",
    "data-driven instruction",
    "student outcomes",
    "academic achievement",
];

const MARKETING: &[&str] = &[
    "digital marketing",
    "seo",
    "sem",
    "ppc",
    "social media marketing",
    "content marketing",
    "email marketing",
    "marketing automation",
    "crm",
    "salesforce",
    "hubspot",
    "marketo",
    "analytics",
    "google analytics",
    "adobe analytics",
    "conversion optimization",
    "a/b testing",
    "user experience",
    "ux",
    "ui",
    "brand management",
    "brand strategy",
    "market research",
    "customer insights",
    "persona development",
    "customer journey",
    "lead generation",
    "lead nurturing",
    "sales funnel",
    "roi",
    "kpi",
    "campaign management",
];

const SALES: &[&str] = &[
    "sales process",
    "lead generation",
    "prospecting",
    "cold calling",
    "qualification",
    "needs assessment",
    "solution selling",
    "consultative selling",
    "relationship building",
    "account management",
    "territory management",
    "pipeline management",
    "forecasting",
    "quota achievement",
    "revenue targets",
    "deal closure",
    "negotiation",
    "contract management",
    "crm",
    "salesforce",
    "hubspot",
    "pipedrive",
    "sales automation",
    "sales enablement",
    "product knowledge",
    "competitive analysis",
    "objection handling",
    "presentation skills",
];

const ROLE_ENTRY: &[&str] = &[
    "entry level",
    "junior",
    "assistant",
    "trainee",
    "intern",
    "graduate",
    "new graduate",
];

const ROLE_JUNIOR: &[&str] = &[
    "junior",
    "associate",
    "assistant",
    "coordinator",
    "specialist",
    "analyst",
];

const ROLE_MID: &[&str] = &[
    "mid level",
    "experienced",
    "specialist",
    "coordinator",
    "analyst",
    "consultant",
];

const ROLE_SENIOR: &[&str] = &[
    "senior",
    "lead",
    "principal",
    "expert",
    "specialist",
    "consultant",
    "advisor",
];

const ROLE_LEAD: &[&str] = &[
    "lead",
    "team lead",
    "senior",
    "principal",
    "architect",
    "manager",
];

const ROLE_PRINCIPAL: &[&str] = &[
    "principal",
    "senior",
    "architect",
    "expert",
    "consultant",
    "advisor",
];

const ROLE_STAFF: &[&str] = &["staff", "senior", "principal", "expert", "specialist"];

const ROLE_MANAGER: &[&str] = &[
    "manager",
    "supervisor",
    "director",
    "lead",
    "head of",
    "team lead",
];

const ROLE_DIRECTOR: &[&str] = &[
    "director",
    "head of",
    "vp",
    "vice president",
    "executive",
    "senior director",
];

const ROLE_VP: &[&str] = &[
    "vp",
    "vice president",
    "executive",
    "senior director",
    "head of",
];

const ROLE_C_LEVEL: &[&str] = &[
    "ceo",
    "cto",
    "cfo",
    "coo",
    "cmo",
    "executive",
    "president",
    "chief",
];

/// Action verbs matched universally, regardless of industry and role.
const ACTION_VERBS: &[&str] = &[
    "developed",
    "implemented",
    "designed",
    "architected",
    "built",
    "created",
    "optimized",
    "improved",
    "enhanced",
    "streamlined",
    "automated",
    "deployed",
    "managed",
    "led",
    "mentored",
    "coached",
    "guided",
    "supervised",
    "analyzed",
    "researched",
    "evaluated",
    "assessed",
    "planned",
    "strategized",
];

/// Exact (case-sensitive) industry lookup. `None` for unknown identifiers.
pub fn industry_keywords(industry: &str) -> Option<&'static [&'static str]> {
    match industry {
        "technology" => Some(TECHNOLOGY),
        "healthcare" => Some(HEALTHCARE),
        "finance" => Some(FINANCE),
        "education" => Some(EDUCATION),
        "marketing" => Some(MARKETING),
        "sales" => Some(SALES),
        _ => None,
    }
}

/// Exact (case-sensitive) role lookup. `None` for unknown identifiers.
pub fn role_keywords(role: &str) -> Option<&'static [&'static str]> {
    match role {
        "Entry" => Some(ROLE_ENTRY),
        "Junior" => Some(ROLE_JUNIOR),
        "Mid" => Some(ROLE_MID),
        "Senior" => Some(ROLE_SENIOR),
        "Lead" => Some(ROLE_LEAD),
        "Principal" => Some(ROLE_PRINCIPAL),
        "Staff" => Some(ROLE_STAFF),
        "Manager" => Some(ROLE_MANAGER),
        "Director" => Some(ROLE_DIRECTOR),
        "VP" => Some(ROLE_VP),
        "C-Level" => Some(ROLE_C_LEVEL),
        _ => None,
    }
}

/// Resolves an industry, substituting [`DEFAULT_INDUSTRY`] for unknown keys.
/// The second element reports whether the fallback was applied.
pub fn resolve_industry(industry: &str) -> (&'static [&'static str], bool) {
    match industry_keywords(industry) {
        Some(keywords) => (keywords, false),
        None => (TECHNOLOGY, true),
    }
}

/// Resolves a role, substituting [`DEFAULT_ROLE`] for unknown keys.
/// The second element reports whether the fallback was applied.
pub fn resolve_role(role: &str) -> (&'static [&'static str], bool) {
    match role_keywords(role) {
        Some(keywords) => (keywords, false),
        None => (ROLE_SENIOR, true),
    }
}

pub fn action_verbs() -> &'static [&'static str] {
    ACTION_VERBS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_industry_resolves() {
        for industry in INDUSTRIES {
            let keywords = industry_keywords(industry);
            assert!(keywords.is_some(), "industry '{industry}' must resolve");
            assert!(!keywords.unwrap().is_empty());
        }
    }

    #[test]
    fn test_every_listed_role_resolves() {
        for role in ROLES {
            let keywords = role_keywords(role);
            assert!(keywords.is_some(), "role '{role}' must resolve");
            assert!(!keywords.unwrap().is_empty());
        }
    }

    #[test]
    fn test_unknown_industry_returns_none() {
        assert!(industry_keywords("aerospace").is_none());
        // Lookup is case-sensitive
        assert!(industry_keywords("Technology").is_none());
    }

    #[test]
    fn test_unknown_role_returns_none() {
        assert!(role_keywords("Wizard").is_none());
        assert!(role_keywords("senior").is_none());
    }

    #[test]
    fn test_resolve_industry_falls_back_to_technology() {
        let (keywords, fell_back) = resolve_industry("aerospace");
        assert!(fell_back);
        assert_eq!(keywords, industry_keywords(DEFAULT_INDUSTRY).unwrap());
    }

    #[test]
    fn test_resolve_role_falls_back_to_senior() {
        let (keywords, fell_back) = resolve_role("Intergalactic");
        assert!(fell_back);
        assert_eq!(keywords, role_keywords(DEFAULT_ROLE).unwrap());
    }

    #[test]
    fn test_resolve_known_key_reports_no_fallback() {
        let (_, fell_back) = resolve_industry("finance");
        assert!(!fell_back);
        let (_, fell_back) = resolve_role("Director");
        assert!(!fell_back);
    }

    /// The matcher lowercases the corpus once and relies on the tables
    /// already being lowercase.
    #[test]
    fn test_all_entries_are_lowercase() {
        let all = INDUSTRIES
            .iter()
            .flat_map(|i| industry_keywords(i).unwrap())
            .chain(ROLES.iter().flat_map(|r| role_keywords(r).unwrap()))
            .chain(action_verbs());
        for keyword in all {
            assert_eq!(
                *keyword,
                keyword.to_lowercase(),
                "dictionary entry '{keyword}' must be lowercase"
            );
        }
    }

    #[test]
    fn test_action_verb_list_size() {
        assert_eq!(action_verbs().len(), 24);
    }
}
