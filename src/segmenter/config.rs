//! Compiled configuration for the segmenter.

use crate::config::Config;

use super::assemble::DebugLayout;
use super::marker::MarkerPattern;
use super::redact::RedactionList;
use super::tags::TagPattern;
use super::unbound::UnboundPattern;
use super::types::SegmentationResult;

/// Whether the thought text is shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Show thought and speech (for prompt debugging)
    Debug,
    /// Show speech only
    #[default]
    Normal,
}

impl DisplayMode {
    /// Map the `display_cot_text` flag to a mode.
    pub fn from_flag(display_cot_text: bool) -> Self {
        if display_cot_text {
            DisplayMode::Debug
        } else {
            DisplayMode::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisplayMode::Debug => "debug",
            DisplayMode::Normal => "normal",
        }
    }
}

/// Errors raised while compiling configured patterns.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Marker phrase must not be empty")]
    EmptyMarker,

    #[error("At least one thought tag name is required")]
    NoTagNames,

    #[error("Thought tag name at position {index} is blank")]
    BlankTagName { index: usize },

    #[error("Unbound thought keyword must not be empty")]
    EmptyUnboundKeyword,

    #[error("Failed to compile pattern: {0}")]
    Regex(#[from] regex::Error),
}

/// Everything the segmenter needs for one engine instance.
///
/// Built once and never mutated, so a single value can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    marker: MarkerPattern,
    tags: TagPattern,
    unbound: UnboundPattern,
    redaction: RedactionList,
    display_mode: DisplayMode,
    layout: DebugLayout,
}

impl EngineConfig {
    pub fn new(
        marker: MarkerPattern,
        tags: TagPattern,
        unbound: UnboundPattern,
        redaction: RedactionList,
        display_mode: DisplayMode,
    ) -> Self {
        Self {
            marker,
            tags,
            unbound,
            redaction,
            display_mode,
            layout: DebugLayout::default(),
        }
    }

    /// Compile the patterns described by a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, PatternError> {
        let patterns = &config.patterns;
        let marker = MarkerPattern::new(
            &patterns.marker_phrase,
            Some(patterns.marker_prefix.as_str()),
        )?;
        let tags = TagPattern::new(patterns.tag_names.as_slice())?;
        let unbound = UnboundPattern::new(&patterns.unbound_keyword)?;
        let redaction = RedactionList::new(config.redaction.keywords.iter().cloned());

        Ok(
            Self::new(marker, tags, unbound, redaction, config.display_mode()).with_layout(
                DebugLayout {
                    header: config.display.header.clone(),
                    separator: config.display.separator.clone(),
                },
            ),
        )
    }

    pub fn with_layout(mut self, layout: DebugLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_display_mode(mut self, display_mode: DisplayMode) -> Self {
        self.display_mode = display_mode;
        self
    }

    pub fn marker(&self) -> &MarkerPattern {
        &self.marker
    }

    pub fn tags(&self) -> &TagPattern {
        &self.tags
    }

    pub fn unbound(&self) -> &UnboundPattern {
        &self.unbound
    }

    pub fn redaction(&self) -> &RedactionList {
        &self.redaction
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn layout(&self) -> &DebugLayout {
        &self.layout
    }

    /// Run the segmenter with this configuration.
    pub fn process(&self, raw_text: &str) -> Option<SegmentationResult> {
        super::process(raw_text, self)
    }
}
