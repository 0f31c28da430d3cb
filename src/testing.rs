//! Test doubles for the collaborator capabilities.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::engine::{EngineOps, ScriptEvent, ScriptKey};

/// Record of every command the launcher issued to the engine.
#[derive(Debug, Default)]
pub struct EngineCalls {
    pub executes: Vec<ScriptKey>,
    pub quits: usize,
    pub loads: Vec<String>,
    pub polls: usize,
}

/// Engine double: events queued via `push` are handed out by `poll`, and
/// every command is recorded. Clones share state, so tests can keep a handle
/// after boxing the double into a launcher.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEngine {
    queue: Arc<Mutex<VecDeque<ScriptEvent>>>,
    calls: Arc<Mutex<EngineCalls>>,
    fail_execute: Arc<Mutex<bool>>,
}

impl ScriptedEngine {
    pub fn push(&self, event: ScriptEvent) {
        self.queue.lock().unwrap().push_back(event);
    }

    pub fn calls(&self) -> Arc<Mutex<EngineCalls>> {
        Arc::clone(&self.calls)
    }

    /// Make the next `execute` call fail.
    pub fn fail_next_execute(&self) {
        *self.fail_execute.lock().unwrap() = true;
    }
}

impl EngineOps for ScriptedEngine {
    fn execute(&mut self, key: ScriptKey) -> anyhow::Result<()> {
        self.calls.lock().unwrap().executes.push(key);
        let mut fail = self.fail_execute.lock().unwrap();
        if *fail {
            *fail = false;
            anyhow::bail!("scripted execute failure for key {key}");
        }
        Ok(())
    }

    fn quit(&mut self) -> anyhow::Result<()> {
        self.calls.lock().unwrap().quits += 1;
        Ok(())
    }

    fn load_scripts(&mut self, path: &str) -> anyhow::Result<()> {
        self.calls.lock().unwrap().loads.push(path.to_string());
        Ok(())
    }

    fn poll(&mut self, events: &mut Vec<ScriptEvent>) -> anyhow::Result<()> {
        self.calls.lock().unwrap().polls += 1;
        events.extend(self.queue.lock().unwrap().drain(..));
        Ok(())
    }
}
