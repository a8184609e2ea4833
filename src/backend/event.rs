//! Native window events and the normalized signals made from them.
//!
//! [`WindowEvent`] is the closed vocabulary of native events the backend
//! understands; the raylib layer translates its per-frame polling into
//! these. [`Signal`] is what the engine runtime loop actually consumes:
//! coordinates in stage space, keys collapsed into abstract actions.

use raylib::ffi::KeyboardKey;

/// Mouse button identifier, decoupled from the native library's numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u8),
}

/// A native event, as polled from the window library.
///
/// Mouse coordinates are raw window pixels (Y down, origin top-left).
/// `Resized` and `FocusChanged` are recognized but deliberately unhandled
/// by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    CloseRequested,
    KeyPressed { key: KeyboardKey, alt: bool },
    TextEntered(char),
    MouseMoved { x: f32, y: f32 },
    MouseButtonPressed { button: MouseButton, x: f32, y: f32 },
    MouseButtonReleased { button: MouseButton, x: f32, y: f32 },
    MouseWheelMoved { delta: f32 },
    Resized { width: i32, height: i32 },
    FocusChanged { gained: bool },
}

/// A normalized engine-level signal emitted by event processing.
///
/// Positions are stage coordinates (Y up, origin at the view center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// The window was closed or a quit hotkey fired.
    Quit,
    TogglePause,
    SaveScreenshot,
    /// Dump the live actor list to the console.
    ListActors,
    /// Dump every registered event handler to the console.
    PrintHandlers,
    /// One of the debugger hotkeys (F8..F12) was pressed.
    DebugKey(KeyboardKey),
    Escape,
    /// A decoded character from text input.
    KeyCharacter(char),
    MouseMoved { x: f32, y: f32, dx: f32, dy: f32 },
    MouseDown { button: MouseButton, x: f32, y: f32 },
    MouseUp { button: MouseButton, x: f32, y: f32 },
    MouseWheel { delta: f32 },
}
