//! Thought tag block extraction.
//!
//! Finds `<name>...</name>` blocks where `name` comes from a configured set.
//! The closing tag must repeat the opening name (compared case-insensitively),
//! so `<a>...</b>` is never treated as a block. The `regex` crate has no
//! back-references, so each name gets its own closing pattern and the opening
//! pattern reports which name matched through its capture group index.

use std::ops::Range;

use regex::Regex;

use super::config::PatternError;

/// One matched tag block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBlock<'a> {
    /// Byte range of the whole block, tags included
    pub span: Range<usize>,
    /// Text between the opening and closing tag, untrimmed
    pub content: &'a str,
}

impl TagBlock<'_> {
    /// Whether a byte offset falls inside this block.
    pub fn contains(&self, offset: usize) -> bool {
        self.span.contains(&offset)
    }
}

#[derive(Debug, Clone)]
pub struct TagPattern {
    names: Vec<String>,
    open: Regex,
    closers: Vec<Regex>,
}

impl TagPattern {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, PatternError> {
        if names.is_empty() {
            return Err(PatternError::NoTagNames);
        }

        let mut groups = Vec::with_capacity(names.len());
        let mut closers = Vec::with_capacity(names.len());
        for (index, name) in names.iter().enumerate() {
            let name = name.as_ref().trim();
            if name.is_empty() {
                return Err(PatternError::BlankTagName { index });
            }
            let escaped = regex::escape(name);
            closers.push(Regex::new(&format!("(?i)</{}>", escaped))?);
            groups.push(format!("({})", escaped));
        }
        let open = Regex::new(&format!("(?i)<(?:{})>", groups.join("|")))?;

        Ok(Self {
            names: names.iter().map(|n| n.as_ref().trim().to_string()).collect(),
            open,
            closers,
        })
    }

    /// Accepted tag names.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Find every non-overlapping block, in order of appearance.
    ///
    /// Each block closes at the first matching closing tag after its opening
    /// tag. An opening tag with no matching close is skipped and scanning
    /// resumes right after its `<`.
    ///
    /// Runs in time linear in `text` per tag name: once a closing search for
    /// a name fails from some offset, later openers of that name at or past
    /// that offset are skipped without searching again.
    pub fn find_blocks<'a>(&self, text: &'a str) -> Vec<TagBlock<'a>> {
        let mut blocks = Vec::new();
        let mut pos = 0;
        // Per name: no closing tag exists at or after this offset
        let mut unclosed_from: Vec<Option<usize>> = vec![None; self.closers.len()];

        while pos < text.len() {
            let Some(caps) = self.open.captures_at(text, pos) else {
                break;
            };
            let Some(opening) = caps.get(0) else {
                break;
            };
            let Some(index) = (1..caps.len()).find(|&i| caps.get(i).is_some()) else {
                break;
            };

            let slot = index - 1;
            let closing = match unclosed_from[slot] {
                Some(from) if opening.end() >= from => None,
                _ => self.closers[slot].find_at(text, opening.end()),
            };
            if closing.is_none() {
                let from = unclosed_from[slot].map_or(opening.end(), |f| f.min(opening.end()));
                unclosed_from[slot] = Some(from);
            }

            match closing {
                Some(closing) => {
                    blocks.push(TagBlock {
                        span: opening.start()..closing.end(),
                        content: &text[opening.end()..closing.start()],
                    });
                    pos = closing.end();
                }
                None => {
                    // '<' is one byte, so this stays on a char boundary
                    pos = opening.start() + 1;
                }
            }
        }

        blocks
    }
}
