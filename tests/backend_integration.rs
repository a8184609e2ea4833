//! Backend integration tests: event dispatch, mouse normalization,
//! key bindings and configuration files working together.

use std::fs;
use std::path::PathBuf;

use raylib::prelude::KeyboardKey;

use telon::backend::Backend;
use telon::backend::config::WindowConfig;
use telon::backend::event::{MouseButton, Signal, WindowEvent};
use telon::backend::keys::{ControlKey, KeyBindings};
use telon::backend::screenshot;

fn scratch_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("telon_it_{}_{}", tag, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn backend_640x480() -> Backend {
    Backend::new(640, 480)
}

#[test]
fn mouse_deltas_accumulate_across_frames() {
    let mut backend = backend_640x480();

    // Three frames of mouse motion, one event each.
    let first = backend.process_events([WindowEvent::MouseMoved { x: 320.0, y: 240.0 }]);
    let second = backend.process_events([WindowEvent::MouseMoved { x: 330.0, y: 240.0 }]);
    let third = backend.process_events([WindowEvent::MouseMoved { x: 330.0, y: 220.0 }]);

    // Center of the window is stage origin; the first arrival reports the
    // full displacement from the initial (0, 0) stage position.
    match first[0] {
        Signal::MouseMoved { x, y, dx, dy } => {
            assert_eq!((x, y), (0.0, 0.0));
            assert_eq!((dx, dy), (0.0, 0.0));
        }
        ref other => panic!("unexpected signal {other:?}"),
    }
    match second[0] {
        Signal::MouseMoved { x, dx, dy, .. } => {
            assert_eq!(x, 10.0);
            assert_eq!((dx, dy), (10.0, 0.0));
        }
        ref other => panic!("unexpected signal {other:?}"),
    }
    match third[0] {
        Signal::MouseMoved { y, dx, dy, .. } => {
            assert_eq!(y, 20.0);
            assert_eq!((dx, dy), (0.0, 20.0));
        }
        ref other => panic!("unexpected signal {other:?}"),
    }
}

#[test]
fn border_motion_is_dropped_but_later_motion_still_tracks() {
    let mut backend = backend_640x480();
    backend.process_events([WindowEvent::MouseMoved { x: 320.0, y: 240.0 }]);

    // Events on the window border produce nothing and leave the stored
    // position untouched.
    let on_border = backend.process_events([
        WindowEvent::MouseMoved { x: 0.0, y: 100.0 },
        WindowEvent::MouseMoved { x: 100.0, y: 0.0 },
    ]);
    assert!(on_border.is_empty());
    assert_eq!(backend.mouse_position(), (0.0, 0.0));

    let resumed = backend.process_events([WindowEvent::MouseMoved { x: 325.0, y: 240.0 }]);
    match resumed[0] {
        Signal::MouseMoved { dx, dy, .. } => assert_eq!((dx, dy), (5.0, 0.0)),
        ref other => panic!("unexpected signal {other:?}"),
    }
}

#[test]
fn far_corner_is_clamped_to_stage_limits() {
    let mut backend = Backend::new(1280, 960);
    let signals = backend.process_events([WindowEvent::MouseMoved {
        x: 1279.0,
        y: 959.0,
    }]);
    match signals[0] {
        Signal::MouseMoved { x, y, .. } => {
            assert_eq!(x, 320.0);
            assert_eq!(y, -240.0);
        }
        ref other => panic!("unexpected signal {other:?}"),
    }
    assert_eq!(backend.mouse_position(), (320.0, -240.0));
}

#[test]
fn click_and_release_report_stage_coordinates() {
    let mut backend = backend_640x480();
    let signals = backend.process_events([
        WindowEvent::MouseButtonPressed {
            button: MouseButton::Left,
            x: 320.0,
            y: 140.0,
        },
        WindowEvent::MouseButtonReleased {
            button: MouseButton::Left,
            x: 320.0,
            y: 140.0,
        },
    ]);
    assert_eq!(signals.len(), 2);
    match signals[0] {
        Signal::MouseDown { button, x, y } => {
            assert_eq!(button, MouseButton::Left);
            assert_eq!((x, y), (0.0, 100.0));
        }
        ref other => panic!("unexpected signal {other:?}"),
    }
    assert!(matches!(signals[1], Signal::MouseUp { .. }));
}

#[test]
fn hotkeys_and_quit_combination_dispatch() {
    let mut backend = backend_640x480();
    let signals = backend.process_events([
        WindowEvent::KeyPressed {
            key: KeyboardKey::KEY_P,
            alt: true,
        },
        WindowEvent::KeyPressed {
            key: KeyboardKey::KEY_F4,
            alt: false,
        },
        WindowEvent::KeyPressed {
            key: KeyboardKey::KEY_Q,
            alt: true,
        },
        // Plain Q is nobody's hotkey.
        WindowEvent::KeyPressed {
            key: KeyboardKey::KEY_Q,
            alt: false,
        },
    ]);
    assert_eq!(signals.len(), 3);
    assert!(matches!(signals[0], Signal::TogglePause));
    assert!(matches!(signals[1], Signal::SaveScreenshot));
    assert!(matches!(signals[2], Signal::Quit));
}

#[test]
fn close_request_and_text_entry_dispatch() {
    let mut backend = backend_640x480();
    let signals = backend.process_events([
        WindowEvent::TextEntered('h'),
        WindowEvent::TextEntered('i'),
        WindowEvent::CloseRequested,
    ]);
    assert!(matches!(signals[0], Signal::KeyCharacter('h')));
    assert!(matches!(signals[1], Signal::KeyCharacter('i')));
    assert!(matches!(signals[2], Signal::Quit));
}

#[test]
fn bindings_survive_a_json_round_trip_on_disk() {
    let dir = scratch_dir("bindings");
    let path = dir.join("keys.json");

    let mut bindings = KeyBindings::default();
    bindings.bind(ControlKey::Action, KeyboardKey::KEY_X);
    bindings.bind(ControlKey::Up, KeyboardKey::KEY_W);
    bindings.save_to_file(&path).unwrap();

    let loaded = KeyBindings::load_from_file(&path).unwrap();
    assert_eq!(loaded.key(ControlKey::Action), KeyboardKey::KEY_X);
    assert_eq!(loaded.key(ControlKey::Up), KeyboardKey::KEY_W);
    // Untouched controls keep their defaults.
    assert_eq!(loaded.key(ControlKey::Left), KeyboardKey::KEY_LEFT);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn config_round_trip_feeds_the_backend() {
    let dir = scratch_dir("config");
    let path = dir.join("config.ini");

    let mut config = WindowConfig::with_path(&path);
    config.width = 800;
    config.height = 600;
    config.title = "it".to_string();
    config.save_to_file().unwrap();

    let mut reloaded = WindowConfig::with_path(&path);
    reloaded.load_from_file().unwrap();
    assert_eq!(reloaded.window_size(), (800, 600));
    assert_eq!(reloaded.title, "it");

    let backend = Backend::from_config(&reloaded);
    assert_eq!(backend.window_size(), (800, 600));

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn screenshot_numbering_continues_after_existing_captures() {
    let dir = scratch_dir("captures");
    fs::write(dir.join("imagen_1.png"), b"x").unwrap();
    fs::write(dir.join("imagen_7.png"), b"x").unwrap();
    fs::write(dir.join("unrelated.png"), b"x").unwrap();

    let path = screenshot::next_capture_path(&dir);
    assert_eq!(path, dir.join("imagen_8.png"));

    fs::remove_dir_all(&dir).ok();
}
