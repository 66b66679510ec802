//! Response-ready hooks.
//!
//! A host pipeline hands each model response to its registered hooks before
//! delivering it. Hooks rewrite `completion_text` in place.

use std::sync::Arc;

/// A model response as seen by hooks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LlmResponse {
    pub completion_text: String,
}

impl LlmResponse {
    pub fn new(completion_text: impl Into<String>) -> Self {
        Self {
            completion_text: completion_text.into(),
        }
    }
}

/// Callback invoked once a model response is ready.
pub trait ResponseHook: Send + Sync {
    /// Name for display/logging.
    fn name(&self) -> &str;

    /// Inspect and possibly rewrite the response.
    ///
    /// `None` means the host has no response object; hooks must treat that
    /// as a no-op.
    fn on_llm_response(&self, response: Option<&mut LlmResponse>);
}

/// Something that accepts response hooks.
pub trait HookRegistry {
    fn register(&mut self, hook: Arc<dyn ResponseHook>);
}

/// Runs registered hooks in registration order.
#[derive(Default)]
pub struct Pipeline {
    hooks: Vec<Arc<dyn ResponseHook>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hooks(&self) -> &[Arc<dyn ResponseHook>] {
        &self.hooks
    }

    /// Pass a response through every hook.
    pub fn dispatch(&self, response: Option<&mut LlmResponse>) {
        match response {
            Some(response) => {
                for hook in &self.hooks {
                    hook.on_llm_response(Some(&mut *response));
                }
            }
            None => {
                for hook in &self.hooks {
                    hook.on_llm_response(None);
                }
            }
        }
    }
}

impl HookRegistry for Pipeline {
    fn register(&mut self, hook: Arc<dyn ResponseHook>) {
        tracing::debug!(hook = hook.name(), "Registered response hook");
        self.hooks.push(hook);
    }
}
