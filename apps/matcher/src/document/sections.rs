//! Section detection: groups resume lines under the header they follow.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Education,
    Experience,
    Skills,
    Projects,
    Certifications,
    Summary,
    Other,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Education => "education",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Certifications => "certifications",
            Section::Summary => "summary",
            Section::Other => "other",
        }
    }
}

/// Header keywords per section, checked in this order.
const SECTION_HEADERS: &[(Section, &[&str])] = &[
    (
        Section::Education,
        &["education", "academic background", "qualifications"],
    ),
    (Section::Experience, &["experience", "work history", "employment"]),
    (Section::Skills, &["skills", "technical skills", "tools"]),
    (Section::Projects, &["projects", "academic projects"]),
    (Section::Certifications, &["certifications", "courses", "training"]),
    (Section::Summary, &["summary", "profile", "objective"]),
];

static HEADER_PATTERNS: Lazy<Vec<(Section, Regex)>> = Lazy::new(|| {
    SECTION_HEADERS
        .iter()
        .flat_map(|(section, keywords)| {
            keywords.iter().map(move |kw| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(kw));
                (*section, Regex::new(&pattern).unwrap())
            })
        })
        .collect()
});

/// Splits text into sections. A line mentioning a header keyword starts a new
/// section and is not kept as content; text before any header lands in `Other`.
pub fn detect_sections(text: &str) -> BTreeMap<Section, String> {
    let mut current = Section::Other;
    let mut sections: BTreeMap<Section, Vec<&str>> = BTreeMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match header_section(line) {
            Some(section) => current = section,
            None => sections.entry(current).or_default().push(line),
        }
    }

    sections
        .into_iter()
        .map(|(section, lines)| (section, lines.join("\n")))
        .collect()
}

fn header_section(line: &str) -> Option<Section> {
    HEADER_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(section, _)| *section)
}
