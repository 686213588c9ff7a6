//! Skill dictionary: canonical skill names grouped by category, plus synonyms.

use std::collections::{BTreeSet, HashMap};

/// Canonical skills, grouped by category. All entries are lowercase.
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming_languages",
        &[
            "python", "java", "c", "c++", "c#", "r", "go", "scala", "javascript", "typescript",
            "kotlin", "swift", "php", "ruby", "perl", "objective-c", "rust", "matlab",
            "shell scripting", "bash", "powershell",
        ],
    ),
    (
        "web_development",
        &[
            "html", "html5", "css", "css3", "sass", "less", "jquery", "bootstrap", "react",
            "angular", "vue", "node.js", "express", "next.js", "nuxt.js", "svelte",
        ],
    ),
    (
        "backend_frameworks",
        &[
            "spring", "spring boot", "spring mvc", "hibernate", "jsp", "servlets", "django",
            "flask", "fastapi", "laravel", "symfony", "rails", "asp.net",
        ],
    ),
    (
        "databases",
        &[
            "mysql", "postgresql", "mongodb", "oracle", "sql server", "sqlite", "redis",
            "cassandra", "dynamodb", "couchdb", "snowflake", "bigquery",
        ],
    ),
    (
        "cloud_devops",
        &[
            "aws", "azure", "gcp", "google cloud", "docker", "kubernetes", "jenkins",
            "terraform", "ansible", "puppet", "chef", "openshift", "linux", "unix", "git",
            "github", "gitlab", "bitbucket", "devops", "ci/cd", "helm",
        ],
    ),
    (
        "data_engineering",
        &[
            "hadoop", "spark", "pyspark", "airflow", "kafka", "etl", "databricks", "hive", "pig",
            "oozie",
        ],
    ),
    (
        "machine_learning",
        &[
            "pandas", "numpy", "matplotlib", "seaborn", "scikit-learn", "tensorflow", "keras",
            "pytorch", "nlp", "deep learning", "machine learning", "computer vision", "opencv",
            "transformers",
        ],
    ),
    (
        "mobile_development",
        &["android", "ios", "react native", "flutter", "xamarin", "ionic"],
    ),
    (
        "tools_ides",
        &[
            "postman", "eclipse", "intellij", "pycharm", "netbeans", "visual studio",
            "visual studio code", "vscode", "jira", "confluence", "trello", "slack", "maven",
            "gradle", "ant",
        ],
    ),
    (
        "testing_qa",
        &[
            "selenium", "junit", "testng", "cucumber", "jest", "mocha", "chai", "karma",
            "pytest", "unittest", "postman testing",
        ],
    ),
    (
        "soft_skills",
        &[
            "communication", "teamwork", "problem solving", "leadership", "adaptability",
            "collaboration", "time management", "critical thinking", "creativity",
            "self-motivation", "analytical skills", "presentation", "negotiation", "mentoring",
            "decision making",
        ],
    ),
    (
        "methodologies",
        &[
            "agile", "scrum", "kanban", "waterfall", "sdlc", "project management",
            "stakeholder management", "requirements analysis", "design patterns", "uml",
            "risk management", "quality assurance",
        ],
    ),
];

/// Raw form → canonical form.
pub const SKILL_ALIASES: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("psql", "postgresql"),
    ("postgres", "postgresql"),
    ("node", "node.js"),
    ("nodejs", "node.js"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("expressjs", "express"),
    ("golang", "go"),
    ("k8s", "kubernetes"),
    ("sklearn", "scikit-learn"),
    ("oop", "object oriented programming"),
    ("ci/cd", "cicd"),
    ("c sharp", "c#"),
    ("cpp", "c++"),
    ("dot net", "asp.net"),
];

/// Immutable lookup table of canonical skills and their aliases.
///
/// Built once at startup and shared read-only (`Arc<SkillDictionary>`).
#[derive(Debug, Clone)]
pub struct SkillDictionary {
    skills: BTreeSet<String>,
    aliases: HashMap<String, String>,
}

impl SkillDictionary {
    pub fn new<S, A>(skills: S, aliases: A) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        A: IntoIterator<Item = (String, String)>,
    {
        let aliases: HashMap<String, String> = aliases
            .into_iter()
            .map(|(raw, canonical)| (raw.to_lowercase(), canonical.to_lowercase()))
            .collect();

        let mut skills: BTreeSet<String> = skills
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();
        // Alias targets are recognised even when not listed in a category.
        skills.extend(aliases.values().cloned());

        Self { skills, aliases }
    }

    /// The built-in dictionary shipped with the matcher.
    pub fn builtin() -> Self {
        Self::new(
            SKILL_CATEGORIES
                .iter()
                .flat_map(|(_, skills)| skills.iter().copied()),
            SKILL_ALIASES
                .iter()
                .map(|(raw, canonical)| (raw.to_string(), canonical.to_string())),
        )
    }

    /// Resolves a raw skill mention to its canonical form (identity if no alias).
    pub fn normalize(&self, raw: &str) -> String {
        let raw = raw.trim().to_lowercase();
        self.aliases.get(&raw).cloned().unwrap_or(raw)
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Every canonical entry, multi-word phrases included.
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Every alias spelling, multi-word ones included.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.aliases.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}
