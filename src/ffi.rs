//! C ABI for embedding the launcher shell in a native host.
//!
//! The embedder supplies two vtables at construction: one for the script
//! engine (commands flow UI -> engine) and one for the window toolkit
//! (widget operations). Notifications flow engine -> UI through the event
//! sink passed to the engine's `poll` callback. All functions must be called
//! from the one thread driving the render loop.

use std::ffi::{c_char, c_void, CStr};
use std::sync::OnceLock;

use tracing::{error, info, warn};

use crate::app::Launcher;
use crate::config;
use crate::engine::{EngineOps, ScriptEvent, ScriptKey};
use crate::error::ResultExt;
use crate::host::{ActionId, HeadlessHost, WindowHost};
use crate::logging::{self, LoggingGuard};
use crate::meta;

static LOGGING: OnceLock<LoggingGuard> = OnceLock::new();

/// Engine callbacks. `user_data` is passed through untouched. Command
/// callbacks return `true` on success; a `false` return or a missing
/// pointer is reported to the caller as an engine-call failure.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct EngineVtable {
    pub user_data: *mut c_void,
    pub execute: Option<unsafe extern "C" fn(user_data: *mut c_void, key: u64) -> bool>,
    pub quit: Option<unsafe extern "C" fn(user_data: *mut c_void) -> bool>,
    pub load_script:
        Option<unsafe extern "C" fn(user_data: *mut c_void, path: *const c_char) -> bool>,
    pub poll:
        Option<unsafe extern "C" fn(user_data: *mut c_void, sink: *mut LauncherEventSink)>,
}

/// Window toolkit callbacks. When `add_action` is null the launcher falls
/// back to its headless arena host.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct HostVtable {
    pub user_data: *mut c_void,
    pub add_action:
        Option<unsafe extern "C" fn(user_data: *mut c_void, label: *const c_char) -> u64>,
    pub remove_action: Option<unsafe extern "C" fn(user_data: *mut c_void, id: u64) -> bool>,
    pub set_title: Option<unsafe extern "C" fn(user_data: *mut c_void, title: *const c_char)>,
}

/// Buffer the engine pushes notifications into during a poll. Opaque to C.
pub struct LauncherEventSink {
    events: Vec<ScriptEvent>,
}

struct VtableEngine {
    vtable: EngineVtable,
}

impl EngineOps for VtableEngine {
    fn execute(&mut self, key: ScriptKey) -> anyhow::Result<()> {
        let Some(execute) = self.vtable.execute else {
            anyhow::bail!("engine vtable has no execute callback");
        };
        if unsafe { execute(self.vtable.user_data, key.0) } {
            Ok(())
        } else {
            anyhow::bail!("engine execute({key}) reported failure")
        }
    }

    fn quit(&mut self) -> anyhow::Result<()> {
        let Some(quit) = self.vtable.quit else {
            anyhow::bail!("engine vtable has no quit callback");
        };
        if unsafe { quit(self.vtable.user_data) } {
            Ok(())
        } else {
            anyhow::bail!("engine quit reported failure")
        }
    }

    fn load_scripts(&mut self, path: &str) -> anyhow::Result<()> {
        let Some(load_script) = self.vtable.load_script else {
            anyhow::bail!("engine vtable has no load_script callback");
        };
        let c_path = std::ffi::CString::new(path)?;
        if unsafe { load_script(self.vtable.user_data, c_path.as_ptr()) } {
            Ok(())
        } else {
            anyhow::bail!("engine load_script({path:?}) reported failure")
        }
    }

    fn poll(&mut self, events: &mut Vec<ScriptEvent>) -> anyhow::Result<()> {
        // A missing poll callback just means the engine has no push channel.
        let Some(poll) = self.vtable.poll else {
            return Ok(());
        };
        let mut sink = LauncherEventSink { events: Vec::new() };
        unsafe { poll(self.vtable.user_data, &mut sink) };
        events.append(&mut sink.events);
        Ok(())
    }
}

/// Host used by the C surface: embedder callbacks when provided, otherwise
/// the headless arena.
enum FfiHost {
    Callback(HostVtable),
    Headless(HeadlessHost),
}

impl WindowHost for FfiHost {
    fn add_action(&mut self, label: &str) -> ActionId {
        match self {
            FfiHost::Headless(host) => host.add_action(label),
            FfiHost::Callback(vtable) => {
                // Checked non-null in launcher_new.
                let add_action = vtable.add_action.expect("callback host without add_action");
                let c_label = std::ffi::CString::new(label).unwrap_or_default();
                let raw = unsafe { add_action(vtable.user_data, c_label.as_ptr()) };
                ActionId(raw)
            }
        }
    }

    fn remove_action(&mut self, id: ActionId) -> crate::error::Result<()> {
        match self {
            FfiHost::Headless(host) => host.remove_action(id),
            FfiHost::Callback(vtable) => match vtable.remove_action {
                None => {
                    warn!(id = id.0, "host vtable has no remove_action, leaking widget");
                    Ok(())
                }
                Some(remove_action) => {
                    if unsafe { remove_action(vtable.user_data, id.0) } {
                        Ok(())
                    } else {
                        Err(crate::error::LauncherError::Host(format!(
                            "host failed to remove action {}",
                            id.0
                        )))
                    }
                }
            },
        }
    }

    fn set_title(&mut self, title: &str) {
        match self {
            FfiHost::Headless(host) => host.set_title(title),
            FfiHost::Callback(vtable) => {
                if let Some(set_title) = vtable.set_title {
                    if let Ok(c_title) = std::ffi::CString::new(title) {
                        unsafe { set_title(vtable.user_data, c_title.as_ptr()) };
                    }
                }
            }
        }
    }
}

/// Opaque launcher context handed across the boundary.
pub struct LauncherHandle {
    launcher: Launcher<FfiHost>,
}

unsafe fn opt_string(ptr: *const c_char, fallback: &str) -> String {
    if ptr.is_null() {
        return fallback.to_string();
    }
    CStr::from_ptr(ptr)
        .to_str()
        .unwrap_or(fallback)
        .to_string()
}

/// Initialize structured logging (JSONL file + stderr). Optional; call once
/// before `launcher_new` if the embedder has no subscriber of its own.
#[no_mangle]
pub extern "C" fn launcher_init_logging() {
    let config = config::load_config();
    let _ = LOGGING.set(logging::init(&config.log_filter));
}

/// Construct a launcher context.
///
/// # Arguments
/// * `version` / `build_date` - strings embedded in the window title; null
///   falls back to the crate's own build stamps
/// * `engine` - engine command/notification callbacks
/// * `host` - window toolkit callbacks (all-null for headless)
///
/// # Returns
/// Owned pointer, or null on failure. Release with `launcher_free`.
#[no_mangle]
pub extern "C" fn launcher_new(
    version: *const c_char,
    build_date: *const c_char,
    engine: EngineVtable,
    host: HostVtable,
) -> *mut LauncherHandle {
    let (version, build_date) = unsafe {
        (
            opt_string(version, meta::VERSION),
            opt_string(build_date, meta::BUILD_DATE),
        )
    };

    let host = match host.add_action {
        Some(_) => FfiHost::Callback(host),
        None => FfiHost::Headless(HeadlessHost::new()),
    };

    let config = config::load_config();
    let launcher = Launcher::new(
        config,
        &version,
        &build_date,
        host,
        Box::new(VtableEngine { vtable: engine }),
    );
    info!(%version, %build_date, "launcher context created");
    Box::into_raw(Box::new(LauncherHandle { launcher }))
}

/// Bring the window up and ask the engine to load all scripts.
#[no_mangle]
pub extern "C" fn launcher_start(handle: *mut LauncherHandle) -> bool {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        error!("launcher_start: null handle");
        return false;
    };
    handle.launcher.start().log_err().is_some()
}

/// One render-loop iteration: poll the engine and apply pending script
/// changes. Call once per frame.
#[no_mangle]
pub extern "C" fn launcher_poll(handle: *mut LauncherHandle) -> bool {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        error!("launcher_poll: null handle");
        return false;
    };
    handle.launcher.tick().log_err().is_some()
}

/// User activated the action with host id `action_id`.
#[no_mangle]
pub extern "C" fn launcher_activate(handle: *mut LauncherHandle, action_id: u64) -> bool {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        error!("launcher_activate: null handle");
        return false;
    };
    handle.launcher.activate(ActionId(action_id)).log_err().is_some()
}

/// Tear down after the render loop has exited.
#[no_mangle]
pub extern "C" fn launcher_shutdown(handle: *mut LauncherHandle) -> bool {
    let Some(handle) = (unsafe { handle.as_mut() }) else {
        error!("launcher_shutdown: null handle");
        return false;
    };
    handle.launcher.shutdown().log_err().is_some()
}

/// Release a context created by `launcher_new`.
#[no_mangle]
pub extern "C" fn launcher_free(handle: *mut LauncherHandle) {
    if handle.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(handle) });
    info!("launcher context freed");
}

/// Engine-facing notification: a script was added. Only valid on the sink
/// passed into the engine's `poll` callback, for the duration of that call.
#[no_mangle]
pub extern "C" fn launcher_script_change_new(
    sink: *mut LauncherEventSink,
    key: u64,
    name: *const c_char,
) {
    let Some(sink) = (unsafe { sink.as_mut() }) else {
        error!("launcher_script_change_new: null sink");
        return;
    };
    if name.is_null() {
        error!(key, "launcher_script_change_new: null name");
        return;
    }
    let name = unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
    sink.events.push(ScriptEvent::Added {
        key: ScriptKey(key),
        name,
    });
}

/// Engine-facing notification: a script was removed. Same sink rules as
/// `launcher_script_change_new`.
#[no_mangle]
pub extern "C" fn launcher_script_change_delete(sink: *mut LauncherEventSink, key: u64) {
    let Some(sink) = (unsafe { sink.as_mut() }) else {
        error!("launcher_script_change_delete: null sink");
        return;
    };
    sink.events.push(ScriptEvent::Removed {
        key: ScriptKey(key),
    });
}
