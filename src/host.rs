//! Capability interface for the vendor windowing toolkit.
//!
//! The window exclusively owns every action widget; the rest of the crate
//! refers to them only by [`ActionId`]. This keeps widget lifetime questions
//! entirely on the host side: a stale id is a reportable error, never a
//! dangling reference.

use crate::error::{LauncherError, Result};

/// Opaque handle to a clickable action owned by the host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u64);

/// Operations the launcher needs from the host window.
pub trait WindowHost {
    /// Create a clickable action labeled `label` and return its handle.
    fn add_action(&mut self, label: &str) -> ActionId;

    /// Destroy the action behind `id`, removing it from the window.
    fn remove_action(&mut self, id: ActionId) -> Result<()>;

    /// Replace the window title.
    fn set_title(&mut self, title: &str);
}

/// Arena-backed host with no real window. Used by tests and by embedders
/// that wire a toolkit in later; actions are plain labeled slots.
#[derive(Debug, Default)]
pub struct HeadlessHost {
    slots: Vec<Option<String>>,
    title: String,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live actions in the window.
    pub fn action_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn label(&self, id: ActionId) -> Option<&str> {
        self.slots.get(id.0 as usize)?.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl WindowHost for HeadlessHost {
    fn add_action(&mut self, label: &str) -> ActionId {
        // Reuse the first free slot so ids stay dense, like a widget arena.
        if let Some(free) = self.slots.iter().position(|slot| slot.is_none()) {
            self.slots[free] = Some(label.to_string());
            return ActionId(free as u64);
        }
        self.slots.push(Some(label.to_string()));
        ActionId((self.slots.len() - 1) as u64)
    }

    fn remove_action(&mut self, id: ActionId) -> Result<()> {
        match self.slots.get_mut(id.0 as usize) {
            Some(slot) if slot.is_some() => {
                *slot = None;
                Ok(())
            }
            _ => Err(LauncherError::Host(format!(
                "no live action with id {}",
                id.0
            ))),
        }
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}
