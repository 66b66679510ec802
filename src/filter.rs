//! The chain-of-thought filter hook.
//!
//! Ties the segmenter, the thought archive, and the display mode together:
//! every response is split, its thought archived (whatever the display mode),
//! and the text rewritten for the user.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::hook::{LlmResponse, ResponseHook};
use crate::segmenter::{assemble, EngineConfig, PatternError};
use crate::thought_log::{NullSink, ThoughtLog, ThoughtSink};

pub struct CotFilter {
    engine: EngineConfig,
    sink: Arc<dyn ThoughtSink>,
}

impl CotFilter {
    pub fn new(engine: EngineConfig, sink: Arc<dyn ThoughtSink>) -> Self {
        info!(
            display_mode = engine.display_mode().label(),
            "Chain-of-thought filter loaded"
        );
        Self { engine, sink }
    }

    /// Build the filter and its file sink from configuration.
    pub fn from_config(config: &Config) -> Result<Self, PatternError> {
        let engine = EngineConfig::from_config(config)?;
        let sink: Arc<dyn ThoughtSink> = if config.log.enabled {
            Arc::new(ThoughtLog::from_config(&config.log))
        } else {
            Arc::new(NullSink)
        };
        Ok(Self::new(engine, sink))
    }

    pub fn engine(&self) -> &EngineConfig {
        &self.engine
    }

    /// Filter a bare string.
    ///
    /// Returns the text to show the user, or `None` when the input is empty
    /// and should be left alone.
    pub fn filter_text(&self, raw_text: &str) -> Option<String> {
        let result = self.engine.process(raw_text)?;

        if result.has_thought() {
            debug!(
                strategy = result.strategy.label(),
                thought = %result.thought_text,
                "Separated chain-of-thought"
            );
            self.archive(&result.thought_text);
        }

        Some(assemble(
            &result,
            self.engine.display_mode(),
            self.engine.layout(),
        ))
    }

    /// Filter independent responses in parallel.
    pub fn filter_batch(&self, responses: &mut [LlmResponse]) {
        responses
            .par_iter_mut()
            .for_each(|response| self.on_llm_response(Some(response)));
    }

    fn archive(&self, thought: &str) {
        if let Err(e) = self.sink.record(thought) {
            error!(error = %e, "Failed to archive chain-of-thought");
        }
    }
}

impl ResponseHook for CotFilter {
    fn name(&self) -> &str {
        "cot-filter"
    }

    fn on_llm_response(&self, response: Option<&mut LlmResponse>) {
        let Some(response) = response else {
            return;
        };
        if let Some(text) = self.filter_text(&response.completion_text) {
            response.completion_text = text;
        }
    }
}
