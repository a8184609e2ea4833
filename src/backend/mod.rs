//! Window/input/event backend.
//!
//! [`Backend`] is the explicit per-window context the engine runtime loop
//! drives once per frame: it drains the native event queue, normalizes
//! coordinates into stage space, tracks the camera view and the last known
//! mouse position, and emits engine-level [`Signal`]s. It owns no native
//! handles itself; the raylib side lives in [`crate::runner`].
//!
//! Submodules:
//! - [`event`] – native event vocabulary and emitted signals
//! - [`keys`] – control bindings and the fixed hotkey table
//! - [`screenshot`] – numbered capture naming
//! - [`config`] – INI window configuration

pub mod config;
pub mod event;
pub mod keys;
pub mod screenshot;

use log::debug;
use raylib::ffi::KeyboardKey;
use smallvec::SmallVec;

use crate::backend::config::WindowConfig;
use crate::backend::event::{Signal, WindowEvent};
use crate::backend::keys::{KeyBindings, hotkey_signal};
use crate::space;

/// Signals emitted for one frame's worth of events. Rarely more than a
/// handful, so they live inline.
pub type Signals = SmallVec<[Signal; 8]>;

/// Per-window backend state.
///
/// Single-threaded by design: exactly one logical thread owns this context
/// together with the window and all drawable state. Mouse position and
/// camera view are only ever mutated through event processing and the
/// camera setter.
#[derive(Debug, Clone)]
pub struct Backend {
    window_width: u32,
    window_height: u32,
    /// Camera view center in native view coordinates.
    camera_x: f32,
    camera_y: f32,
    /// Last normalized mouse position, stage coordinates. Deltas are
    /// computed against this because the native layer only reports
    /// absolute positions.
    mouse_x: f32,
    mouse_y: f32,
    bindings: KeyBindings,
}

impl Backend {
    pub fn new(window_width: u32, window_height: u32) -> Self {
        Self {
            window_width,
            window_height,
            camera_x: 0.0,
            camera_y: 0.0,
            mouse_x: 0.0,
            mouse_y: 0.0,
            bindings: KeyBindings::default(),
        }
    }

    pub fn from_config(config: &WindowConfig) -> Self {
        Self::new(config.width, config.height)
    }

    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Camera view center, native view coordinates.
    pub fn camera(&self) -> (f32, f32) {
        (self.camera_x, self.camera_y)
    }

    pub fn set_camera(&mut self, x: f32, y: f32) {
        self.camera_x = x;
        self.camera_y = y;
    }

    /// Last normalized mouse position, stage coordinates.
    pub fn mouse_position(&self) -> (f32, f32) {
        (self.mouse_x, self.mouse_y)
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Convert window pixels into camera view coordinates (still Y-down).
    pub fn to_view(&self, x: f32, y: f32) -> (f32, f32) {
        (
            x - self.window_width as f32 / 2.0 + self.camera_x,
            y - self.window_height as f32 / 2.0 + self.camera_y,
        )
    }

    /// Drain one frame's native events, in arrival order, into normalized
    /// engine signals.
    ///
    /// Must consume the whole queue every frame; nothing carries over.
    /// Unrecognized or unhandled event kinds are ignored rather than
    /// surfaced.
    pub fn process_events(&mut self, events: impl IntoIterator<Item = WindowEvent>) -> Signals {
        let mut out = Signals::new();
        for event in events {
            debug!("native event: {event:?}");
            match event {
                WindowEvent::CloseRequested => out.push(Signal::Quit),
                WindowEvent::KeyPressed { key, alt } => {
                    if let Some(signal) = hotkey_signal(key, alt) {
                        out.push(signal);
                    }
                    if key == KeyboardKey::KEY_Q && alt {
                        out.push(Signal::Quit);
                    }
                }
                WindowEvent::TextEntered(ch) => out.push(Signal::KeyCharacter(ch)),
                WindowEvent::MouseMoved { x, y } => self.on_mouse_moved(x, y, &mut out),
                WindowEvent::MouseButtonPressed { button, x, y } => {
                    let (x, y) = self.to_stage(x, y);
                    out.push(Signal::MouseDown { button, x, y });
                }
                WindowEvent::MouseButtonReleased { button, x, y } => {
                    let (x, y) = self.to_stage(x, y);
                    out.push(Signal::MouseUp { button, x, y });
                }
                WindowEvent::MouseWheelMoved { delta } => {
                    out.push(Signal::MouseWheel { delta });
                }
                // Recognized but not translated into signals.
                WindowEvent::Resized { .. } | WindowEvent::FocusChanged { .. } => {}
            }
        }
        out
    }

    /// Pixel position to stage coordinates (view conversion plus Y flip).
    fn to_stage(&self, x: f32, y: f32) -> (f32, f32) {
        let (vx, vy) = self.to_view(x, y);
        (vx, space::from_native_y(vy))
    }

    fn on_mouse_moved(&mut self, x: f32, y: f32, out: &mut Signals) {
        // Events on the top/left window border are suppressed outright:
        // no signal, no state update. Inherited contract; the first pixel
        // row and column never report.
        if x <= 0.0 || y <= 0.0 {
            return;
        }

        let (sx, sy) = self.to_stage(x, y);
        let (sx, sy) = space::clamp_mouse(sx, sy);

        let dx = sx - self.mouse_x;
        let dy = sy - self.mouse_y;
        self.mouse_x = sx;
        self.mouse_y = sy;

        out.push(Signal::MouseMoved {
            x: sx,
            y: sy,
            dx,
            dy,
        });
    }
}
