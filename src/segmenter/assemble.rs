//! Builds the user-visible text from a segmentation.

use super::config::DisplayMode;
use super::types::SegmentationResult;

/// Default heading shown above the thought text in debug mode.
pub const DEFAULT_HEADER: &str = "【幕后的思绪】";

/// Default divider between thought and speech in debug mode.
pub const DEFAULT_SEPARATOR: &str = "\n\n---\n\n";

/// How thought and speech are laid out in debug mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugLayout {
    pub header: String,
    pub separator: String,
}

impl Default for DebugLayout {
    fn default() -> Self {
        Self {
            header: DEFAULT_HEADER.to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Produce the final text for the user.
///
/// Debug mode shows `header`, the thought, `separator`, then the speech, but
/// only when a thought was found. Every other case yields the speech alone.
pub fn assemble(result: &SegmentationResult, mode: DisplayMode, layout: &DebugLayout) -> String {
    if mode == DisplayMode::Debug && result.has_thought() {
        format!(
            "{}\n{}{}{}",
            layout.header, result.thought_text, layout.separator, result.speech_text
        )
    } else {
        result.speech_text.clone()
    }
}
