use regex::Regex;
use tracing::warn;

/// Number of `keywords` present in `text` as whole words, case-insensitive.
pub fn count_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> usize {
    let text = text.to_lowercase();
    keywords
        .iter()
        .filter(|kw| {
            let kw = kw.as_ref().trim().to_lowercase();
            if kw.is_empty() {
                return false;
            }
            let pattern = format!(r"\b{}\b", regex::escape(&kw));
            match Regex::new(&pattern) {
                Ok(re) => re.is_match(&text),
                Err(e) => {
                    warn!("Skipping keyword '{kw}': {e}");
                    false
                }
            }
        })
        .count()
}
