//! Data structures produced by the segmenter.

/// Which strategy produced a segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Split at the first final-reply marker
    Marker,
    /// Thought tags and/or an unbound keyword span were extracted
    Extraction,
    /// Nothing matched; the whole text is speech
    Passthrough,
}

impl Strategy {
    /// Short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            Strategy::Marker => "marker",
            Strategy::Extraction => "extraction",
            Strategy::Passthrough => "passthrough",
        }
    }
}

/// Result of separating one model response.
///
/// `speech_text` is what remains after every deliberation fragment has been
/// removed and redaction applied. `thought_text` holds the fragments joined by
/// `\n` in the order they were found; an empty string means no deliberation
/// was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentationResult {
    pub thought_text: String,
    pub speech_text: String,
    pub strategy: Strategy,
}

impl SegmentationResult {
    pub fn new(
        thought_text: impl Into<String>,
        speech_text: impl Into<String>,
        strategy: Strategy,
    ) -> Self {
        Self {
            thought_text: thought_text.into(),
            speech_text: speech_text.into(),
            strategy,
        }
    }

    /// Treat the whole text as speech.
    pub fn passthrough(speech_text: impl Into<String>) -> Self {
        Self::new(String::new(), speech_text, Strategy::Passthrough)
    }

    /// Whether any deliberation text was found.
    pub fn has_thought(&self) -> bool {
        !self.thought_text.is_empty()
    }
}
