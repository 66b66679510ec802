//! Separation of model deliberation from the final reply.
//!
//! A model prompted to "think before speaking" mixes its chain-of-thought
//! with the reply meant for the user. This module splits the two with a
//! fixed sequence of strategies, falling back gracefully when the expected
//! markers are missing or malformed.
//!
//! # Pipeline
//!
//! 1. **Marker split** - text before the first final-reply marker is thought,
//!    text after it is speech. Success skips steps 2 and 3.
//! 2. **Tag blocks** - `<name>...</name>` blocks with a configured name are
//!    thoughts and are cut out of the reply.
//! 3. **Unbound keyword** - an untagged `keyword: ...` span running to the end
//!    of the text is a thought too, unless it starts inside a tag block.
//! 4. **Redaction** - configured filler words are stripped from the speech.
//!
//! When nothing matches, the entire (trimmed) input is speech.
//!
//! # Module Structure
//!
//! - [`config`] - Compiled engine configuration and display mode
//! - [`marker`], [`tags`], [`unbound`], [`redact`] - One module per step
//! - [`assemble`] - Final user-visible text
//! - [`types`] - Result types

pub mod assemble;
pub mod config;
pub mod marker;
pub mod redact;
pub mod tags;
pub mod types;
pub mod unbound;

use std::ops::Range;

pub use assemble::{assemble, DebugLayout};
pub use config::{DisplayMode, EngineConfig, PatternError};
pub use marker::MarkerPattern;
pub use redact::RedactionList;
pub use tags::{TagBlock, TagPattern};
pub use types::{SegmentationResult, Strategy};
pub use unbound::UnboundPattern;

/// Separate thought from speech in one model response.
///
/// Returns `None` for empty input, meaning there is nothing to process and
/// the caller should leave the response untouched. Never fails: malformed
/// markup simply stays in the speech.
pub fn process(raw_text: &str, config: &EngineConfig) -> Option<SegmentationResult> {
    if raw_text.is_empty() {
        return None;
    }

    let mut result = split(raw_text, config);
    result.speech_text = config.redaction().apply(&result.speech_text);
    Some(result)
}

/// Steps 1-3: find the thought/speech boundary.
fn split(raw_text: &str, config: &EngineConfig) -> SegmentationResult {
    if let Some((thought, speech)) = config.marker().split(raw_text) {
        return SegmentationResult::new(thought, speech, Strategy::Marker);
    }

    let blocks = config.tags().find_blocks(raw_text);
    let unbound = config.unbound().find_span(raw_text, &blocks);

    if blocks.is_empty() && unbound.is_none() {
        return SegmentationResult::passthrough(raw_text.trim());
    }

    let mut fragments: Vec<&str> = blocks.iter().map(|b| b.content.trim()).collect();
    if let Some(span) = &unbound {
        fragments.push(raw_text[span.clone()].trim());
    }
    fragments.retain(|f| !f.is_empty());

    let mut removed: Vec<Range<usize>> = blocks.iter().map(|b| b.span.clone()).collect();
    removed.extend(unbound);
    let cleaned = remove_ranges(raw_text, removed);

    SegmentationResult::new(fragments.join("\n"), cleaned.trim(), Strategy::Extraction)
}

/// Copy `text` without the given byte ranges. Ranges may overlap.
fn remove_ranges(text: &str, mut ranges: Vec<Range<usize>>) -> String {
    ranges.sort_by_key(|r| r.start);

    let mut result = String::with_capacity(text.len());
    let mut cursor = 0;
    for range in ranges {
        if range.start > cursor {
            result.push_str(&text[cursor..range.start]);
        }
        cursor = cursor.max(range.end);
    }
    if cursor < text.len() {
        result.push_str(&text[cursor..]);
    }
    result
}
