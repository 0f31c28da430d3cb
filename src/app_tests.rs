//! End-to-end launcher scenarios against the engine double.

use crate::app::{Launcher, Phase};
use crate::config::Config;
use crate::engine::{ScriptEvent, ScriptKey};
use crate::error::LauncherError;
use crate::host::HeadlessHost;
use crate::menu::MenuAction;
use crate::testing::ScriptedEngine;

fn launcher_with(engine: &ScriptedEngine) -> Launcher<HeadlessHost> {
    Launcher::new(
        Config::default(),
        "1.2.3",
        "2024-01-01",
        HeadlessHost::new(),
        Box::new(engine.clone()),
    )
}

#[test]
fn test_register_activate_unregister_roundtrip() {
    let engine = ScriptedEngine::default();
    let calls = engine.calls();
    let mut launcher = launcher_with(&engine);
    launcher.start().unwrap();
    let chrome = launcher.host().action_count();

    // Engine announces build.lua under key 7.
    engine.push(ScriptEvent::Added {
        key: ScriptKey(7),
        name: "build.lua".into(),
    });
    assert_eq!(launcher.tick().unwrap(), 1);
    assert_eq!(launcher.host().action_count(), chrome + 1);

    let entry = launcher.registry().iter().next().unwrap().clone();
    assert_eq!(entry.key, ScriptKey(7));
    assert_eq!(entry.name, "build.lua");
    assert_eq!(launcher.host().label(entry.action), Some("build.lua"));

    // User clicks it; the engine sees exactly that key.
    launcher.activate(entry.action).unwrap();
    assert_eq!(calls.lock().unwrap().executes, vec![ScriptKey(7)]);

    // Engine withdraws the script; the action disappears and can no longer
    // be activated.
    engine.push(ScriptEvent::Removed { key: ScriptKey(7) });
    assert_eq!(launcher.tick().unwrap(), 1);
    assert_eq!(launcher.host().action_count(), chrome);
    assert!(matches!(
        launcher.activate(entry.action),
        Err(LauncherError::UnknownAction { .. })
    ));
    assert_eq!(calls.lock().unwrap().executes, vec![ScriptKey(7)]);
}

#[test]
fn test_poll_happens_once_per_tick() {
    let engine = ScriptedEngine::default();
    let calls = engine.calls();
    let mut launcher = launcher_with(&engine);
    launcher.start().unwrap();

    for _ in 0..3 {
        launcher.tick().unwrap();
    }
    assert_eq!(calls.lock().unwrap().polls, 3);
}

#[test]
fn test_events_spread_over_multiple_ticks() {
    let engine = ScriptedEngine::default();
    let mut launcher = launcher_with(&engine);
    launcher.start().unwrap();

    engine.push(ScriptEvent::Added {
        key: ScriptKey(1),
        name: "first".into(),
    });
    assert_eq!(launcher.tick().unwrap(), 1);

    // Nothing pending: tick is a no-op.
    assert_eq!(launcher.tick().unwrap(), 0);

    engine.push(ScriptEvent::Added {
        key: ScriptKey(2),
        name: "second".into(),
    });
    engine.push(ScriptEvent::Removed { key: ScriptKey(1) });
    assert_eq!(launcher.tick().unwrap(), 2);

    let keys: Vec<ScriptKey> = launcher.registry().iter().map(|e| e.key).collect();
    assert_eq!(keys, vec![ScriptKey(2)]);
}

#[test]
fn test_removal_of_unknown_key_does_not_stop_the_stream() {
    let engine = ScriptedEngine::default();
    let mut launcher = launcher_with(&engine);
    launcher.start().unwrap();

    engine.push(ScriptEvent::Removed { key: ScriptKey(99) });
    engine.push(ScriptEvent::Added {
        key: ScriptKey(1),
        name: "survivor".into(),
    });

    // The bogus removal is skipped; the add still applies.
    assert_eq!(launcher.tick().unwrap(), 1);
    assert!(launcher.registry().contains(ScriptKey(1)));
}

#[test]
fn test_reload_scripts_menu_item_reloads() {
    let engine = ScriptedEngine::default();
    let calls = engine.calls();
    let mut launcher = launcher_with(&engine);
    launcher.start().unwrap();

    let reload = launcher
        .menu()
        .action_ids()
        .find(|id| launcher.menu().action_for(*id) == Some(MenuAction::ReloadScripts))
        .unwrap();
    launcher.activate(reload).unwrap();

    let calls = calls.lock().unwrap();
    assert_eq!(calls.loads.len(), 2); // startup + reload
    assert_eq!(calls.quits, 0);
    assert!(calls.executes.is_empty());
}

#[test]
fn test_shutdown_after_session() {
    let engine = ScriptedEngine::default();
    let mut launcher = launcher_with(&engine);
    launcher.start().unwrap();

    engine.push(ScriptEvent::Added {
        key: ScriptKey(5),
        name: "deploy.lua".into(),
    });
    launcher.tick().unwrap();
    launcher.shutdown().unwrap();
    assert_eq!(launcher.phase(), Phase::Terminated);
}
