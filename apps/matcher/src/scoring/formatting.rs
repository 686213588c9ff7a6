use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static EXTRA_SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"  +").unwrap());
static BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\-\*\u{2022}]").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattingReport {
    /// Runs of two or more consecutive spaces.
    pub extra_spaces: usize,
    /// `-`, `*` and `•` characters.
    pub bullet_points: usize,
}

pub fn check_formatting(text: &str) -> FormattingReport {
    FormattingReport {
        extra_spaces: EXTRA_SPACES_RE.find_iter(text).count(),
        bullet_points: BULLET_RE.find_iter(text).count(),
    }
}
