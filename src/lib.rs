//! Launchdeck - a launcher UI shell.
//!
//! Bridges an external script engine to a host window: engine notifications
//! mutate a visible list of clickable script actions, and activating an
//! action dispatches back into the engine. Windowing itself stays behind the
//! [`host::WindowHost`] capability; script execution stays behind
//! [`engine::EngineOps`]. A C ABI for native embedders lives in [`ffi`].

pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod host;
pub mod logging;
pub mod menu;
pub mod meta;
pub mod registry;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod app_tests;
