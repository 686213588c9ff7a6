//! Skill extraction: dictionary scan over a document's text.
//!
//! Two passes, unioned:
//! 1. Token pass: each word-like token is alias-normalized and kept if canonical.
//! 2. Phrase pass: every dictionary entry and alias (multi-word phrases included) is searched
//!    for in the full text and kept, alias-normalized, if it occurs on word boundaries.

use crate::skills::dictionary::SkillDictionary;
use crate::skills::SkillSet;

/// Characters that separate tokens in addition to whitespace.
const TOKEN_SEPARATORS: &[char] = &[
    ',', ';', '(', ')', '[', ']', '{', '}', '"', '\'', '|', '<', '>', '!', '?', '\u{2022}',
];

/// Returns the canonical skills mentioned in `text`.
pub fn extract_skills(text: &str, dictionary: &SkillDictionary) -> SkillSet {
    let text = text.to_lowercase();
    let mut found = SkillSet::new();

    for token in tokenize(&text) {
        let canonical = dictionary.normalize(token);
        if dictionary.contains(&canonical) {
            found.insert(canonical);
        }
    }

    for phrase in dictionary.skills().chain(dictionary.aliases()) {
        if contains_phrase(&text, phrase) {
            found.insert(dictionary.normalize(phrase));
        }
    }

    found
}

/// Splits lowercase text into word-like tokens.
///
/// Internal `.`, `+`, `#`, `/` and `-` are kept so `node.js`, `c++`, `c#` and
/// `ci/cd` survive as single tokens.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || TOKEN_SEPARATORS.contains(&c))
        .map(|t| {
            t.trim_start_matches(['-', '*', '.'])
                .trim_end_matches(['.', ':', '-'])
        })
        .filter(|t| !t.is_empty())
}

/// Substring search that rejects matches glued to a surrounding word.
fn contains_phrase(text: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    text.match_indices(phrase).any(|(start, _)| {
        let before = text[..start].chars().next_back();
        let after = text[start + phrase.len()..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}
