use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref TERM_RE: Regex = Regex::new(r"(?u)[\p{L}\p{N}]+").expect("valid regex");
}

/// Tokenize text into lower-case terms using NFKC normalization and
/// splitting on non-alphanumeric boundaries. Empty or whitespace-only
/// input yields no tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = text.nfkc().collect::<String>().to_lowercase();
    TERM_RE
        .find_iter(&normalized)
        .map(|m| m.as_str().to_string())
        .collect()
}
