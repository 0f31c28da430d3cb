//! The launcher context: one object owning the host window handle, the menu,
//! and the script registry, passed to every entry point.
//!
//! Lifecycle is strictly `Uninitialized -> Running -> Terminated`, entered
//! once in that order. `tick` is meant to be called once per render-loop
//! iteration by the embedding host; everything runs on that thread.

use tracing::{debug, info, instrument};

use crate::config::Config;
use crate::engine::{EngineOps, ScriptEvent, ScriptKey};
use crate::error::{LauncherError, Result, ResultExt};
use crate::host::{ActionId, WindowHost};
use crate::menu::{Menu, MenuAction};
use crate::meta;
use crate::registry::ScriptRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    Terminated,
}

impl Phase {
    fn name(self) -> &'static str {
        match self {
            Phase::Uninitialized => "Uninitialized",
            Phase::Running => "Running",
            Phase::Terminated => "Terminated",
        }
    }
}

/// Window title with version and build date embedded verbatim.
pub fn window_title(version: &str, build_date: &str) -> String {
    format!("{} [{}][{}]", meta::APP_NAME, version, build_date)
}

pub struct Launcher<H: WindowHost> {
    host: H,
    engine: Box<dyn EngineOps>,
    config: Config,
    version: String,
    build_date: String,
    menu: Menu,
    registry: ScriptRegistry,
    phase: Phase,
    // Reused poll buffer so steady-state ticks do not allocate.
    pending: Vec<ScriptEvent>,
}

impl<H: WindowHost> Launcher<H> {
    pub fn new(
        config: Config,
        version: &str,
        build_date: &str,
        host: H,
        engine: Box<dyn EngineOps>,
    ) -> Self {
        Launcher {
            host,
            engine,
            config,
            version: version.to_string(),
            build_date: build_date.to_string(),
            menu: Menu::default(),
            registry: ScriptRegistry::new(),
            phase: Phase::Uninitialized,
            pending: Vec::new(),
        }
    }

    /// Construct with the crate's own version and build-date stamps.
    pub fn with_build_meta(config: Config, host: H, engine: Box<dyn EngineOps>) -> Self {
        Self::new(config, meta::VERSION, meta::BUILD_DATE, host, engine)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn registry(&self) -> &ScriptRegistry {
        &self.registry
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.phase != expected {
            return Err(LauncherError::Lifecycle {
                expected: expected.name(),
                actual: self.phase.name(),
            });
        }
        Ok(())
    }

    /// Bring the window up: title, chrome menu, then ask the engine to load
    /// scripts before the host enters its render loop.
    #[instrument(skip(self), fields(version = %self.version))]
    pub fn start(&mut self) -> Result<()> {
        self.expect_phase(Phase::Uninitialized)?;

        let title = window_title(&self.version, &self.build_date);
        self.host.set_title(&title);
        self.menu = Menu::standard(&mut self.host);

        let path = self.config.startup_load_path().to_string();
        self.engine
            .load_scripts(&path)
            .map_err(|source| LauncherError::EngineCall {
                op: "load_scripts",
                source,
            })?;

        self.phase = Phase::Running;
        info!(title = %title, "launcher started");
        Ok(())
    }

    /// One render-loop iteration: drain engine notifications and apply them
    /// to the registry. Returns the number of events applied.
    ///
    /// A failing event (duplicate add, delete of an absent key) is logged and
    /// skipped so one bad notification cannot wedge the stream; a failing
    /// poll call is returned to the caller.
    pub fn tick(&mut self) -> Result<usize> {
        self.expect_phase(Phase::Running)?;

        self.pending.clear();
        self.engine
            .poll(&mut self.pending)
            .map_err(|source| LauncherError::EngineCall { op: "poll", source })?;

        let events = std::mem::take(&mut self.pending);
        let mut applied = 0;
        for event in &events {
            if self.apply_event(event).warn_on_err().is_some() {
                applied += 1;
            }
        }
        self.pending = events;

        if applied > 0 {
            debug!(applied, "tick applied script events");
        }
        Ok(applied)
    }

    fn apply_event(&mut self, event: &ScriptEvent) -> Result<()> {
        match event {
            ScriptEvent::Added { key, name } => {
                self.registry.register(&mut self.host, *key, name)?;
            }
            ScriptEvent::Removed { key } => {
                self.registry.unregister(&mut self.host, *key)?;
            }
        }
        Ok(())
    }

    /// User activated the host action `id`. Chrome actions dispatch their
    /// engine command; script actions execute their key.
    pub fn activate(&mut self, id: ActionId) -> Result<()> {
        self.expect_phase(Phase::Running)?;

        if let Some(action) = self.menu.action_for(id) {
            return self.dispatch_menu(action);
        }

        let key = self
            .registry
            .key_for_action(id)
            .ok_or(LauncherError::UnknownAction { id: id.0 })?;
        self.execute(key)
    }

    fn dispatch_menu(&mut self, action: MenuAction) -> Result<()> {
        match action {
            MenuAction::Quit => {
                info!("quit requested");
                self.engine
                    .quit()
                    .map_err(|source| LauncherError::EngineCall { op: "quit", source })
            }
            MenuAction::ReloadScripts => {
                let path = self.config.startup_load_path().to_string();
                self.engine
                    .load_scripts(&path)
                    .map_err(|source| LauncherError::EngineCall {
                        op: "load_scripts",
                        source,
                    })
            }
        }
    }

    fn execute(&mut self, key: ScriptKey) -> Result<()> {
        debug!(key = key.0, "executing script");
        self.engine
            .execute(key)
            .map_err(|source| LauncherError::EngineCall {
                op: "execute",
                source,
            })
    }

    /// Tear down after the render loop exits. Unconditional; the host
    /// destroys all child actions transitively when it goes away.
    pub fn shutdown(&mut self) -> Result<()> {
        self.expect_phase(Phase::Running)?;
        self.phase = Phase::Terminated;
        info!(scripts = self.registry.len(), "launcher terminated");
        Ok(())
    }
}
