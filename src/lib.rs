//! Chain-of-thought filter for persona chat pipelines.
//!
//! Models prompted to reason before answering return their deliberation and
//! their reply in one string. This crate separates the two, archives the
//! deliberation to daily log files, strips unwanted filler words from the
//! reply, and rewrites the response the user sees.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cot_filter::{Config, CotFilter, HookRegistry, LlmResponse, Pipeline};
//! use std::sync::Arc;
//!
//! let filter = CotFilter::from_config(&Config::load()?)?;
//! let mut pipeline = Pipeline::new();
//! pipeline.register(Arc::new(filter));
//!
//! let mut response = LlmResponse::new("<内心独白>...</内心独白>你好。");
//! pipeline.dispatch(Some(&mut response));
//! assert_eq!(response.completion_text, "你好。");
//! ```

pub mod config;
pub mod filter;
pub mod hook;
pub mod segmenter;
pub mod thought_log;

pub use config::Config;
pub use filter::CotFilter;
pub use hook::{HookRegistry, LlmResponse, Pipeline, ResponseHook};
pub use segmenter::{
    assemble, process, DisplayMode, EngineConfig, PatternError, SegmentationResult, Strategy,
};
pub use thought_log::{NullSink, ThoughtLog, ThoughtLogError, ThoughtSink};
