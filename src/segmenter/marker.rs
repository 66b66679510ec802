//! Final-reply marker split.
//!
//! The cheapest and most reliable strategy: the persona prompt asks the model
//! to introduce its reply with a fixed phrase, so everything before the first
//! occurrence is deliberation and everything after it is speech.

use regex::Regex;

use super::config::PatternError;

/// Matches `[prefix]phrase[:：]` followed by any whitespace, case-insensitively.
#[derive(Debug, Clone)]
pub struct MarkerPattern {
    regex: Regex,
}

impl MarkerPattern {
    /// Build a marker pattern.
    ///
    /// `prefix` is an optional stylistic lead-in (e.g. a persona's name) that
    /// is consumed when present but not required.
    pub fn new(phrase: &str, prefix: Option<&str>) -> Result<Self, PatternError> {
        if phrase.trim().is_empty() {
            return Err(PatternError::EmptyMarker);
        }

        let prefix = match prefix.filter(|p| !p.is_empty()) {
            Some(p) => format!("(?:{})?", regex::escape(p)),
            None => String::new(),
        };
        let pattern = format!(r"(?i){}{}[:：]?\s*", prefix, regex::escape(phrase));

        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Split at the first marker occurrence.
    ///
    /// Returns trimmed `(before, after)`. The marker itself is dropped; any
    /// later occurrences stay inside `after`.
    pub fn split<'a>(&self, text: &'a str) -> Option<(&'a str, &'a str)> {
        let found = self.regex.find(text)?;
        Some((text[..found.start()].trim(), text[found.end()..].trim()))
    }
}
