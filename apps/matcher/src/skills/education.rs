//! Education extraction: degree levels and subject streams.

use serde::{Deserialize, Serialize};

/// Degree level, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeLevel {
    Bachelor,
    Master,
    Phd,
}

impl DegreeLevel {
    pub const ALL: [DegreeLevel; 3] = [DegreeLevel::Bachelor, DegreeLevel::Master, DegreeLevel::Phd];

    pub fn as_str(self) -> &'static str {
        match self {
            DegreeLevel::Bachelor => "bachelor",
            DegreeLevel::Master => "master",
            DegreeLevel::Phd => "phd",
        }
    }

    /// Substrings that signal this level anywhere in a document.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            DegreeLevel::Bachelor => &[
                "bachelor",
                "b.sc",
                "btech",
                "b.tech",
                "bca",
                "bba",
                "undergraduate",
            ],
            DegreeLevel::Master => &[
                "master",
                "m.sc",
                "mtech",
                "m.tech",
                "mca",
                "mba",
                "postgraduate",
            ],
            DegreeLevel::Phd => &["phd", "ph.d", "doctorate", "doctoral"],
        }
    }
}

/// Subject streams, in reporting order.
pub const STREAM_KEYWORDS: &[&str] = &[
    "computer science",
    "information technology",
    "it",
    "electronics",
    "mechanical",
    "civil",
    "electrical",
    "commerce",
    "arts",
    "engineering",
];

/// Education found in one document. Level flags are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationProfile {
    pub bachelor: bool,
    pub master: bool,
    pub phd: bool,
    pub streams: Vec<String>,
}

impl EducationProfile {
    pub fn has_level(&self, level: DegreeLevel) -> bool {
        match level {
            DegreeLevel::Bachelor => self.bachelor,
            DegreeLevel::Master => self.master,
            DegreeLevel::Phd => self.phd,
        }
    }

    fn set_level(&mut self, level: DegreeLevel) {
        match level {
            DegreeLevel::Bachelor => self.bachelor = true,
            DegreeLevel::Master => self.master = true,
            DegreeLevel::Phd => self.phd = true,
        }
    }

    /// Levels flagged in this profile, lowest first.
    pub fn levels(&self) -> Vec<DegreeLevel> {
        DegreeLevel::ALL
            .into_iter()
            .filter(|l| self.has_level(*l))
            .collect()
    }

    /// True when the document states any education requirement or qualification.
    pub fn is_present(&self) -> bool {
        self.bachelor || self.master || self.phd || !self.streams.is_empty()
    }
}

/// Outcome of checking a resume's education against a job's requirements.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationComparison {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl EducationComparison {
    pub fn is_met(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Scans text for degree-level keywords and subject streams (substring match).
pub fn extract_education(text: &str) -> EducationProfile {
    let text = text.to_lowercase();
    let mut profile = EducationProfile::default();

    for level in DegreeLevel::ALL {
        if level.keywords().iter().any(|kw| text.contains(kw)) {
            profile.set_level(level);
        }
    }

    for stream in STREAM_KEYWORDS {
        if text.contains(stream) && !profile.streams.iter().any(|s| s == stream) {
            profile.streams.push(stream.to_string());
        }
    }

    profile
}

/// Compares resume education with what the job asks for.
///
/// A required level is met by that level or any higher one. A required stream
/// must appear in the resume's streams.
pub fn compare_education(resume: &EducationProfile, job: &EducationProfile) -> EducationComparison {
    let mut comparison = EducationComparison::default();

    for required in job.levels() {
        let satisfied = DegreeLevel::ALL
            .into_iter()
            .any(|held| held >= required && resume.has_level(held));
        let name = required.as_str().to_string();
        if satisfied {
            comparison.matched.push(name);
        } else {
            comparison.missing.push(name);
        }
    }

    for stream in &job.streams {
        if resume.streams.contains(stream) {
            comparison.matched.push(stream.clone());
        } else {
            comparison.missing.push(stream.clone());
        }
    }

    comparison
}
