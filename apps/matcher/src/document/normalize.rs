use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]+").unwrap());

/// Lowercases and collapses every run of whitespace (line breaks included) to one space.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Layout-preserving cleanup: `\r` becomes `\n`, blank-line runs shrink to one
/// blank line, space/tab runs shrink to a single space. Case is kept.
pub fn clean_text(raw: &str) -> String {
    let text = raw.replace('\r', "\n");
    let text = BLANK_LINES_RE.replace_all(&text, "\n\n");
    let text = SPACES_RE.replace_all(&text, " ");
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(
            normalize_text("  Senior  RUST\tEngineer\r\n\nRemote "),
            "senior rust engineer remote"
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_text(" \n\t "), "");
    }

    #[test]
    fn test_clean_text_keeps_paragraphs() {
        let cleaned = clean_text("Skills\r\r\r\nPython   and\t\tGo\n\n\n\nExperience  ");
        assert_eq!(cleaned, "Skills\n\nPython and Go\n\nExperience");
    }
}
