//! Literal keyword redaction for speech text.

/// Ordered list of literal substrings to strip from speech.
///
/// Keywords are removed in list order as plain, case-sensitive substrings.
/// Passes repeat until nothing changes, so a removal that joins two halves of
/// a keyword back together is caught too. When keywords overlap the outcome
/// depends on list order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionList {
    keywords: Vec<String>,
}

impl RedactionList {
    /// Create a list, dropping empty keywords.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(Into::into)
                .filter(|k: &String| !k.is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Remove every keyword occurrence from `text`.
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();
        loop {
            let before = result.len();
            for keyword in &self.keywords {
                if result.contains(keyword.as_str()) {
                    result = result.replace(keyword.as_str(), "");
                }
            }
            // Each removal shrinks the text, so an unchanged length means no
            // keyword was present during the whole pass.
            if result.len() == before {
                return result;
            }
        }
    }
}
