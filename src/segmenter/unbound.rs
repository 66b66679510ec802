//! Untagged deliberation introduced by a keyword.
//!
//! Fallback for models that forget to wrap their thinking in tags and write
//! something like `思索: ...` instead. The span runs from the keyword to the
//! end of the text, across lines.

use std::ops::Range;

use regex::Regex;
use tracing::trace;

use super::config::PatternError;
use super::tags::TagBlock;

#[derive(Debug, Clone)]
pub struct UnboundPattern {
    head: Regex,
}

impl UnboundPattern {
    /// Build a pattern for `keyword`, optionally followed by `:` or `：`.
    pub fn new(keyword: &str) -> Result<Self, PatternError> {
        if keyword.trim().is_empty() {
            return Err(PatternError::EmptyUnboundKeyword);
        }
        let head = Regex::new(&format!("(?i){}[:：]?", regex::escape(keyword)))?;
        Ok(Self { head })
    }

    /// Locate the unbound span, skipping keywords that sit inside a tag block.
    ///
    /// The first keyword outside every block starts the span, which extends
    /// to the end of `text` and so covers any later keywords as well.
    ///
    /// `blocks` must be sorted and non-overlapping, as returned by
    /// [`TagPattern::find_blocks`](super::tags::TagPattern::find_blocks).
    pub fn find_span(&self, text: &str, blocks: &[TagBlock<'_>]) -> Option<Range<usize>> {
        let mut next_block = 0;
        for head in self.head.find_iter(text) {
            while blocks
                .get(next_block)
                .is_some_and(|b| b.span.end <= head.start())
            {
                next_block += 1;
            }
            if blocks
                .get(next_block)
                .is_some_and(|b| b.contains(head.start()))
            {
                trace!(offset = head.start(), "Skipping keyword inside thought tag");
                continue;
            }
            return Some(head.start()..text.len());
        }
        None
    }
}
