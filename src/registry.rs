//! Script registry: the bridge between engine notifications and the visible
//! action list.
//!
//! One entry per key, insertion order is display order. The registry owns no
//! widgets; each entry holds the [`ActionId`] of the host-owned action it is
//! bound to.

use tracing::{debug, info};

use crate::engine::ScriptKey;
use crate::error::{LauncherError, Result};
use crate::host::{ActionId, WindowHost};

/// One registered script and the host action displaying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEntry {
    pub key: ScriptKey,
    pub name: String,
    pub action: ActionId,
}

/// Ordered key -> action mapping, created empty at window initialization.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    entries: Vec<ScriptEntry>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, key: ScriptKey) -> bool {
        self.entries.iter().any(|entry| entry.key == key)
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = &ScriptEntry> {
        self.entries.iter()
    }

    /// Append a new script action to the window, bound to `name`.
    ///
    /// Duplicate keys are rejected; the existing entry is left untouched.
    pub fn register<H: WindowHost>(
        &mut self,
        host: &mut H,
        key: ScriptKey,
        name: &str,
    ) -> Result<ActionId> {
        if self.contains(key) {
            return Err(LauncherError::DuplicateKey { key });
        }

        let action = host.add_action(name);
        self.entries.push(ScriptEntry {
            key,
            name: name.to_string(),
            action,
        });
        info!(key = key.0, name = name, "script registered");
        Ok(action)
    }

    /// Remove the entry for `key` and destroy its host action.
    pub fn unregister<H: WindowHost>(&mut self, host: &mut H, key: ScriptKey) -> Result<()> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.key == key)
            .ok_or(LauncherError::UnknownKey { key })?;

        let entry = self.entries.remove(index);
        host.remove_action(entry.action)?;
        info!(key = key.0, name = %entry.name, "script unregistered");
        Ok(())
    }

    /// Resolve an activated host action back to its script key.
    pub fn key_for_action(&self, action: ActionId) -> Option<ScriptKey> {
        let key = self
            .entries
            .iter()
            .find(|entry| entry.action == action)
            .map(|entry| entry.key);
        debug!(action = action.0, key = ?key, "resolved action");
        key
    }
}
