use anyhow::{Context, Result};
use regex::Regex;

/// A literal search term compiled once and reused across searches.
///
/// Case-insensitive patterns use Unicode simple case folding, so every match
/// spans exactly as many chars as the term.
#[derive(Debug, Clone)]
pub struct SearchPattern {
    regex: Regex,
    term: String,
    char_len: usize,
    case_insensitive: bool,
}

impl SearchPattern {
    pub fn new(term: &str, case_insensitive: bool) -> Result<Self> {
        let escaped = regex::escape(term);
        let pattern = if case_insensitive {
            format!("(?i){}", escaped)
        } else {
            escaped
        };
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Failed to build search pattern for {:?}", term))?;

        Ok(Self {
            regex,
            term: term.to_string(),
            char_len: term.chars().count(),
            case_insensitive,
        })
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Length of the term (and of every match) in chars
    pub fn char_len(&self) -> usize {
        self.char_len
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }
}
