//! Capability interface for the external script engine.
//!
//! The engine owns script definitions and execution; the launcher only sees
//! it through this trait. Notifications flow engine -> UI via [`ScriptEvent`],
//! commands flow UI -> engine via the trait methods.

use std::fmt;

/// Opaque engine-assigned identifier for a script instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptKey(pub u64);

impl fmt::Display for ScriptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for ScriptKey {
    fn from(raw: u64) -> Self {
        ScriptKey(raw)
    }
}

/// A pending notification pushed by the engine during a poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptEvent {
    Added { key: ScriptKey, name: String },
    Removed { key: ScriptKey },
}

/// Commands the launcher can issue to the engine.
///
/// All calls are synchronous on the UI thread; a blocking implementation
/// stalls rendering, which matches the cooperative model of the host loop.
pub trait EngineOps {
    /// Run the script identified by `key`. The result is not consumed
    /// beyond error reporting.
    fn execute(&mut self, key: ScriptKey) -> anyhow::Result<()>;

    /// Ask the engine to begin application shutdown.
    fn quit(&mut self) -> anyhow::Result<()>;

    /// (Pre)load scripts from `path`; an empty path means "load all".
    fn load_scripts(&mut self, path: &str) -> anyhow::Result<()>;

    /// Drain pending engine notifications into `events`. Called once per
    /// render-loop iteration.
    fn poll(&mut self, events: &mut Vec<ScriptEvent>) -> anyhow::Result<()>;
}
