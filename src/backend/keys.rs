//! Key tables: held-control bindings and the fixed hotkey map.
//!
//! Two separate vocabularies live here. [`KeyBindings`] maps the six
//! pollable controls (directions, action, select) to native key codes and
//! can be round-tripped through a JSON file with human-readable key names.
//! [`hotkey_signal`] is the fixed, non-rebindable table that turns key
//! presses into engine [`Signal`]s during event processing.

use std::fs;
use std::path::Path;

use log::info;
use raylib::ffi::KeyboardKey;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::backend::event::Signal;
use crate::error::{Error, Result};

/// Abstract held-state controls the engine may poll every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKey {
    Left,
    Right,
    Up,
    Down,
    /// Primary action button.
    Action,
    /// Menu confirm / selection.
    Select,
}

impl ControlKey {
    pub const ALL: [ControlKey; 6] = [
        ControlKey::Left,
        ControlKey::Right,
        ControlKey::Up,
        ControlKey::Down,
        ControlKey::Action,
        ControlKey::Select,
    ];
}

/// Key-name table used by the JSON binding format. Only keys listed here
/// are rebindable.
const KEY_NAMES: &[(&str, KeyboardKey)] = &[
    ("A", KeyboardKey::KEY_A),
    ("B", KeyboardKey::KEY_B),
    ("C", KeyboardKey::KEY_C),
    ("D", KeyboardKey::KEY_D),
    ("E", KeyboardKey::KEY_E),
    ("F", KeyboardKey::KEY_F),
    ("G", KeyboardKey::KEY_G),
    ("H", KeyboardKey::KEY_H),
    ("I", KeyboardKey::KEY_I),
    ("J", KeyboardKey::KEY_J),
    ("K", KeyboardKey::KEY_K),
    ("L", KeyboardKey::KEY_L),
    ("M", KeyboardKey::KEY_M),
    ("N", KeyboardKey::KEY_N),
    ("O", KeyboardKey::KEY_O),
    ("P", KeyboardKey::KEY_P),
    ("Q", KeyboardKey::KEY_Q),
    ("R", KeyboardKey::KEY_R),
    ("S", KeyboardKey::KEY_S),
    ("T", KeyboardKey::KEY_T),
    ("U", KeyboardKey::KEY_U),
    ("V", KeyboardKey::KEY_V),
    ("W", KeyboardKey::KEY_W),
    ("X", KeyboardKey::KEY_X),
    ("Y", KeyboardKey::KEY_Y),
    ("Z", KeyboardKey::KEY_Z),
    ("Left", KeyboardKey::KEY_LEFT),
    ("Right", KeyboardKey::KEY_RIGHT),
    ("Up", KeyboardKey::KEY_UP),
    ("Down", KeyboardKey::KEY_DOWN),
    ("Space", KeyboardKey::KEY_SPACE),
    ("Enter", KeyboardKey::KEY_ENTER),
    ("Escape", KeyboardKey::KEY_ESCAPE),
    ("Tab", KeyboardKey::KEY_TAB),
    ("LeftShift", KeyboardKey::KEY_LEFT_SHIFT),
    ("LeftControl", KeyboardKey::KEY_LEFT_CONTROL),
];

pub fn key_name(key: KeyboardKey) -> Option<&'static str> {
    KEY_NAMES.iter().find(|(_, k)| *k == key).map(|(n, _)| *n)
}

pub fn key_from_name(name: &str) -> Option<KeyboardKey> {
    KEY_NAMES.iter().find(|(n, _)| *n == name).map(|(_, k)| *k)
}

/// Rebindable control-to-key mapping.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: FxHashMap<ControlKey, KeyboardKey>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut map = FxHashMap::default();
        map.insert(ControlKey::Left, KeyboardKey::KEY_LEFT);
        map.insert(ControlKey::Right, KeyboardKey::KEY_RIGHT);
        map.insert(ControlKey::Up, KeyboardKey::KEY_UP);
        map.insert(ControlKey::Down, KeyboardKey::KEY_DOWN);
        map.insert(ControlKey::Action, KeyboardKey::KEY_SPACE);
        map.insert(ControlKey::Select, KeyboardKey::KEY_ENTER);
        Self { map }
    }
}

impl KeyBindings {
    /// Native key bound to `control`.
    pub fn key(&self, control: ControlKey) -> KeyboardKey {
        // Every control has a default; map is never missing an entry
        // unless someone built it by hand, in which case fall back.
        self.map
            .get(&control)
            .copied()
            .unwrap_or(KeyboardKey::KEY_NULL)
    }

    pub fn bind(&mut self, control: ControlKey, key: KeyboardKey) {
        self.map.insert(control, key);
    }

    /// Parse bindings from the JSON object format, e.g.
    /// `{"left": "A", "action": "Space"}`. Controls not mentioned keep
    /// their defaults; unknown control or key names are a config error.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: BindingsFile = serde_json::from_str(json).map_err(|e| Error::Config {
            message: format!("key bindings: {e}"),
        })?;

        let mut bindings = Self::default();
        for (control, name) in file.entries() {
            let Some(name) = name else { continue };
            let key = key_from_name(&name).ok_or_else(|| Error::Config {
                message: format!("key bindings: unknown key '{name}'"),
            })?;
            bindings.bind(control, key);
        }
        Ok(bindings)
    }

    /// Serialize to the JSON object format accepted by [`from_json`].
    ///
    /// [`from_json`]: KeyBindings::from_json
    pub fn to_json(&self) -> Result<String> {
        let name_of = |c| key_name(self.key(c)).map(str::to_owned);
        let file = BindingsFile {
            left: name_of(ControlKey::Left),
            right: name_of(ControlKey::Right),
            up: name_of(ControlKey::Up),
            down: name_of(ControlKey::Down),
            action: name_of(ControlKey::Action),
            select: name_of(ControlKey::Select),
        };
        serde_json::to_string_pretty(&file).map_err(|e| Error::Config {
            message: format!("key bindings: {e}"),
        })
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let bindings = Self::from_json(&json)?;
        info!("Loaded key bindings from {}", path.display());
        Ok(bindings)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        info!("Saved key bindings to {}", path.display());
        Ok(())
    }
}

/// On-disk shape of the bindings file. Unknown fields are rejected so a
/// typoed control name fails loudly instead of silently keeping a default.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct BindingsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    left: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    up: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    down: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    select: Option<String>,
}

impl BindingsFile {
    fn entries(self) -> [(ControlKey, Option<String>); 6] {
        [
            (ControlKey::Left, self.left),
            (ControlKey::Right, self.right),
            (ControlKey::Up, self.up),
            (ControlKey::Down, self.down),
            (ControlKey::Action, self.action),
            (ControlKey::Select, self.select),
        ]
    }
}

/// Fixed hotkey table for key-press dispatch.
///
/// Alt+Q (quit) is handled separately by the event processor; everything
/// else lives here. Unmapped keys return `None` and are ignored.
pub fn hotkey_signal(key: KeyboardKey, alt: bool) -> Option<Signal> {
    match key {
        KeyboardKey::KEY_P if alt => Some(Signal::TogglePause),
        KeyboardKey::KEY_F4 => Some(Signal::SaveScreenshot),
        KeyboardKey::KEY_F6 => Some(Signal::ListActors),
        KeyboardKey::KEY_F7 => Some(Signal::PrintHandlers),
        KeyboardKey::KEY_F8
        | KeyboardKey::KEY_F9
        | KeyboardKey::KEY_F10
        | KeyboardKey::KEY_F11
        | KeyboardKey::KEY_F12 => Some(Signal::DebugKey(key)),
        KeyboardKey::KEY_ESCAPE => Some(Signal::Escape),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let b = KeyBindings::default();
        assert_eq!(b.key(ControlKey::Left), KeyboardKey::KEY_LEFT);
        assert_eq!(b.key(ControlKey::Action), KeyboardKey::KEY_SPACE);
        assert_eq!(b.key(ControlKey::Select), KeyboardKey::KEY_ENTER);
    }

    #[test]
    fn test_json_round_trip() {
        let mut b = KeyBindings::default();
        b.bind(ControlKey::Action, KeyboardKey::KEY_J);
        let json = b.to_json().unwrap();
        let back = KeyBindings::from_json(&json).unwrap();
        for control in ControlKey::ALL {
            assert_eq!(back.key(control), b.key(control), "{control:?}");
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let b = KeyBindings::from_json(r#"{"action": "W"}"#).unwrap();
        assert_eq!(b.key(ControlKey::Action), KeyboardKey::KEY_W);
        assert_eq!(b.key(ControlKey::Left), KeyboardKey::KEY_LEFT);
    }

    #[test]
    fn test_unknown_key_name_rejected() {
        assert!(KeyBindings::from_json(r#"{"action": "HyperKey"}"#).is_err());
        assert!(KeyBindings::from_json(r#"{"warp": "W"}"#).is_err());
    }

    #[test]
    fn test_key_name_table_both_directions() {
        assert_eq!(key_from_name("Space"), Some(KeyboardKey::KEY_SPACE));
        assert_eq!(key_name(KeyboardKey::KEY_SPACE), Some("Space"));
        assert_eq!(key_from_name("NoSuchKey"), None);
    }

    #[test]
    fn test_hotkey_table() {
        assert_eq!(
            hotkey_signal(KeyboardKey::KEY_P, true),
            Some(Signal::TogglePause)
        );
        // P without Alt is not the pause hotkey.
        assert_eq!(hotkey_signal(KeyboardKey::KEY_P, false), None);
        assert_eq!(
            hotkey_signal(KeyboardKey::KEY_F4, false),
            Some(Signal::SaveScreenshot)
        );
        assert_eq!(
            hotkey_signal(KeyboardKey::KEY_F9, false),
            Some(Signal::DebugKey(KeyboardKey::KEY_F9))
        );
        assert_eq!(
            hotkey_signal(KeyboardKey::KEY_ESCAPE, false),
            Some(Signal::Escape)
        );
        assert_eq!(hotkey_signal(KeyboardKey::KEY_Z, false), None);
    }
}
