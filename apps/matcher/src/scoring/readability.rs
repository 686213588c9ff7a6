//! Readability scoring using Flesch Reading Ease.
//!
//! Formula: `206.835 - 1.015 * (words/sentences) - 84.6 * (syllables/words)`
//!
//! Higher score = easier to read. 60–70 is plain English; below 30 is very hard.

use serde::Serialize;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease, rounded to two decimals.
    pub score: f64,
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

/// Scores `text`. Returns `None` when it contains no words.
pub fn flesch_reading_ease(text: &str) -> Option<ReadabilityReport> {
    let words: Vec<&str> = text
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return None;
    }

    let sentences = count_sentences(text).max(1);
    let syllables: usize = words.iter().map(|w| count_syllables(w)).sum();

    let words_per_sentence = words.len() as f64 / sentences as f64;
    let syllables_per_word = syllables as f64 / words.len() as f64;
    let score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

    Some(ReadabilityReport {
        score: (score * 100.0).round() / 100.0,
        sentences,
        words: words.len(),
        syllables,
    })
}

/// Counts runs of sentence-ending punctuation that follow some text.
fn count_sentences(text: &str) -> usize {
    let mut count = 0;
    let mut has_text = false;
    for c in text.chars() {
        if matches!(c, '.' | '!' | '?') {
            if has_text {
                count += 1;
                has_text = false;
            }
        } else if c.is_alphanumeric() {
            has_text = true;
        }
    }
    if has_text {
        count += 1;
    }
    count
}

/// Vowel-group heuristic: each run of vowels is a syllable, a trailing silent
/// `e` is dropped, and every word has at least one.
fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().all(|c| c.is_ascii_digit()) {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut count = 0;
    let mut prev_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    if word.len() > 2 && word.ends_with('e') && !word.ends_with("le") && count > 1 {
        count -= 1;
    }

    count.max(1)
}
