//! Thin raylib layer: the native window and everything that must touch it.
//!
//! Everything here is a direct pass-through to raylib; the interesting
//! logic (coordinate normalization, event dispatch, frame bookkeeping)
//! lives in [`crate::backend`] and [`crate::stage`] and is driven with
//! plain data. This module only:
//! - owns the window, the texture store and the default font,
//! - polls native input into [`WindowEvent`]s once per frame,
//! - replays entity [`DrawState`](crate::stage::DrawState)s as draw calls,
//! - saves numbered screenshots and centers the window on the desktop.
//!
//! Window creation failure is fatal (raylib aborts the process); there is
//! no degraded windowless mode.

use std::ffi::CString;
use std::path::{Path, PathBuf};

use log::{info, warn};
use raylib::core::window::{get_current_monitor, get_monitor_height, get_monitor_width};
use raylib::ffi;
use raylib::prelude::*;

use crate::backend::Backend;
use crate::backend::config::WindowConfig;
use crate::backend::event::{MouseButton as StageButton, WindowEvent};
use crate::backend::keys::{ControlKey, KeyBindings};
use crate::backend::screenshot;
use crate::canvas::Canvas;
use crate::color::Color as StageColor;
use crate::error::{Error, Result};
use crate::stage::text::TextMeasurer;
use crate::stage::{Actor, ImageHandle, Text};

/// Loaded textures keyed by the [`ImageHandle`] key.
pub struct TextureStore {
    map: rustc_hash::FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self {
            map: rustc_hash::FxHashMap::default(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Presentable GPU texture for an offscreen [`Canvas`].
pub struct CanvasTexture {
    texture: Texture2D,
}

/// The native window plus its GPU-side stores.
pub struct Window {
    rl: RaylibHandle,
    thread: RaylibThread,
    textures: TextureStore,
    font: WeakFont,
    prev_mouse: Vector2,
    focused: bool,
}

impl Window {
    /// Create the native window. Failure to create it aborts startup;
    /// raylib has no recoverable path here.
    pub fn open(config: &WindowConfig) -> Self {
        let (mut rl, thread) = raylib::init()
            .size(config.width as i32, config.height as i32)
            .title(&config.title)
            .build();
        unsafe {
            if config.vsync {
                ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            } else {
                ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
            }
        }
        rl.set_target_fps(config.target_fps);
        // Escape is dispatched as a signal, not a window-close key.
        rl.set_exit_key(None);
        if config.fullscreen && !rl.is_window_fullscreen() {
            rl.toggle_fullscreen();
        }

        let font = rl.get_font_default();
        let prev_mouse = rl.get_mouse_position();
        Self {
            rl,
            thread,
            textures: TextureStore::new(),
            font,
            prev_mouse,
            focused: true,
        }
    }

    /// Load an image into the texture store, returning the handle entities
    /// and grids work with.
    pub fn load_image(&mut self, path: &str) -> Result<ImageHandle> {
        let texture =
            self.rl
                .load_texture(&self.thread, path)
                .map_err(|e| Error::ResourceLoad {
                    path: path.to_string(),
                    reason: e.to_string(),
                })?;
        let handle = ImageHandle::new(path, texture.width() as u32, texture.height() as u32);
        self.textures.map.insert(path.to_string(), texture);
        Ok(handle)
    }

    pub fn should_close(&self) -> bool {
        self.rl.window_should_close()
    }

    pub fn frame_time(&self) -> f32 {
        self.rl.get_frame_time()
    }

    pub fn show_mouse_cursor(&mut self) {
        self.rl.show_cursor();
    }

    pub fn hide_mouse_cursor(&mut self) {
        self.rl.hide_cursor();
    }

    /// Whether the native key bound to `control` is held right now.
    pub fn control_held(&self, bindings: &KeyBindings, control: ControlKey) -> bool {
        self.rl.is_key_down(bindings.key(control))
    }

    /// Translate this frame's native input state into the backend's event
    /// vocabulary. Empties raylib's key/char queues completely.
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();

        if self.rl.window_should_close() {
            events.push(WindowEvent::CloseRequested);
        }

        let alt = self.rl.is_key_down(KeyboardKey::KEY_LEFT_ALT)
            || self.rl.is_key_down(KeyboardKey::KEY_RIGHT_ALT);
        while let Some(key) = self.rl.get_key_pressed() {
            events.push(WindowEvent::KeyPressed { key, alt });
        }
        while let Some(ch) = self.rl.get_char_pressed() {
            events.push(WindowEvent::TextEntered(ch));
        }

        let mouse = self.rl.get_mouse_position();
        if mouse != self.prev_mouse {
            self.prev_mouse = mouse;
            events.push(WindowEvent::MouseMoved {
                x: mouse.x,
                y: mouse.y,
            });
        }

        for (native, button) in [
            (MouseButton::MOUSE_BUTTON_LEFT, StageButton::Left),
            (MouseButton::MOUSE_BUTTON_RIGHT, StageButton::Right),
            (MouseButton::MOUSE_BUTTON_MIDDLE, StageButton::Middle),
        ] {
            if self.rl.is_mouse_button_pressed(native) {
                events.push(WindowEvent::MouseButtonPressed {
                    button,
                    x: mouse.x,
                    y: mouse.y,
                });
            }
            if self.rl.is_mouse_button_released(native) {
                events.push(WindowEvent::MouseButtonReleased {
                    button,
                    x: mouse.x,
                    y: mouse.y,
                });
            }
        }

        let wheel = self.rl.get_mouse_wheel_move();
        if wheel != 0.0 {
            events.push(WindowEvent::MouseWheelMoved { delta: wheel });
        }

        if self.rl.is_window_resized() {
            events.push(WindowEvent::Resized {
                width: self.rl.get_screen_width(),
                height: self.rl.get_screen_height(),
            });
        }
        let focused = self.rl.is_window_focused();
        if focused != self.focused {
            self.focused = focused;
            events.push(WindowEvent::FocusChanged { gained: focused });
        }

        events
    }

    /// Center the window on the desktop. A failed desktop query is a
    /// recoverable no-op.
    pub fn center(&mut self) {
        match self.desktop_size() {
            Ok((dw, dh)) => {
                let (w, h) = (self.rl.get_screen_width(), self.rl.get_screen_height());
                let (x, y) = crate::space::centered_window_position(dw, dh, w, h);
                self.rl.set_window_position(x, y);
            }
            Err(_) => warn!("desktop resolution unavailable, window centering skipped"),
        }
    }

    fn desktop_size(&self) -> Result<(i32, i32)> {
        let monitor = get_current_monitor();
        let (w, h) = (get_monitor_width(monitor), get_monitor_height(monitor));
        if w <= 0 || h <= 0 {
            return Err(Error::DesktopQuery);
        }
        Ok((w, h))
    }

    /// Save the current frame as the next `imagen_<N>.png` in `dir`.
    pub fn capture_screenshot(&mut self, dir: &Path) -> Result<PathBuf> {
        let path = screenshot::next_capture_path(dir);
        let image = self.rl.load_image_from_screen(&self.thread);
        let Some(path_str) = path.to_str() else {
            return Err(Error::Screenshot { path });
        };
        // The safe `Image::export_image` wrapper discards raylib's success
        // flag, so go through the FFI call to keep the failure check.
        let c_path = CString::new(path_str).unwrap();
        if !unsafe { ffi::ExportImage(*image, c_path.as_ptr()) } {
            return Err(Error::Screenshot { path });
        }
        info!("Saved screenshot {}", path.display());
        Ok(path)
    }

    /// Upload `canvas`' presentable image into a fresh GPU texture.
    pub fn create_canvas_texture(&mut self, canvas: &Canvas) -> Result<CanvasTexture> {
        let image = Image::gen_image_color(
            canvas.width() as i32,
            canvas.height() as i32,
            Color::BLANK,
        );
        let texture = self
            .rl
            .load_texture_from_image(&self.thread, &image)
            .map_err(|e| Error::ResourceLoad {
                path: "<canvas>".into(),
                reason: e.to_string(),
            })?;
        let mut ct = CanvasTexture { texture };
        self.update_canvas_texture(&mut ct, canvas);
        Ok(ct)
    }

    /// Re-upload `canvas`' presentable bytes. Call after `Canvas::refresh`.
    pub fn update_canvas_texture(&mut self, target: &mut CanvasTexture, canvas: &Canvas) {
        // Raw update; the texture was created with the same dimensions and
        // RGBA8 layout as the presentable image.
        unsafe {
            ffi::UpdateTexture(
                *target.texture,
                canvas.presentable_bytes().as_ptr().cast(),
            );
        }
    }

    /// Text measurement against the window's default font.
    pub fn measurer(&self) -> RaylibMeasurer {
        RaylibMeasurer {
            font: *self.font.as_ref(),
        }
    }

    /// Run one frame of drawing: clear to `clear_color`, then hand a
    /// camera-space draw pass to `draw`.
    pub fn frame<F>(&mut self, backend: &Backend, clear_color: StageColor, draw: F)
    where
        F: FnOnce(&mut RaylibMode2D<RaylibDrawHandle>, &FrameAssets),
    {
        let (cam_x, cam_y) = backend.camera();
        let camera = Camera2D {
            target: Vector2 { x: cam_x, y: cam_y },
            offset: Vector2 {
                x: self.rl.get_screen_width() as f32 / 2.0,
                y: self.rl.get_screen_height() as f32 / 2.0,
            },
            rotation: 0.0,
            zoom: 1.0,
        };
        let assets = FrameAssets {
            textures: &self.textures,
            font: &self.font,
        };

        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::from(clear_color));
        let mut d2 = d.begin_mode2D(camera);
        draw(&mut d2, &assets);
    }
}

/// Read-only handles a draw pass may need.
pub struct FrameAssets<'a> {
    pub textures: &'a TextureStore,
    pub font: &'a WeakFont,
}

/// Replay an actor's draw state as a `draw_texture_pro` call.
pub fn draw_actor(
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
    assets: &FrameAssets,
    actor: &Actor,
) {
    use crate::stage::Anchored;

    let Some(texture) = assets.textures.get(&actor.image().key) else {
        warn!("texture '{}' not loaded, actor skipped", actor.image().key);
        return;
    };

    let state = actor.draw_state();
    let mut src = actor.source_rect();
    if state.flip_h {
        // Negative source width mirrors horizontally.
        src.width = -src.width;
    }
    let (w, h) = actor.size();
    let dest = Rectangle {
        x: state.position.x,
        y: state.position.y,
        width: w,
        height: h,
    };
    let origin = Vector2 {
        x: state.origin.x * state.scale,
        y: state.origin.y * state.scale,
    };
    d2.draw_texture_pro(texture, src, dest, origin, state.rotation, Color::from(state.tint));
}

/// Replay a text entity's draw state as a `draw_text_pro` call.
pub fn draw_text_entity(
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
    assets: &FrameAssets,
    text: &Text,
) {
    use crate::stage::Anchored;

    let state = text.draw_state();
    let color = text.color().modulate(state.tint);
    d2.draw_text_pro(
        assets.font,
        text.content(),
        state.position,
        state.origin,
        state.rotation,
        text.font_size() * state.scale,
        TEXT_SPACING,
        Color::from(color),
    );
}

/// Draw a canvas' presentable texture with its top-left at a stage
/// position.
pub fn draw_canvas(
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
    canvas_texture: &CanvasTexture,
    x: f32,
    y: f32,
) {
    d2.draw_texture(
        &canvas_texture.texture,
        x as i32,
        crate::space::to_native_y(y) as i32,
        Color::WHITE,
    );
}

/// Filled circle with an outline, at a stage position.
pub fn draw_circle_stage(
    d2: &mut RaylibMode2D<RaylibDrawHandle>,
    x: f32,
    y: f32,
    radius: f32,
    fill: StageColor,
    outline: StageColor,
) {
    let center = Vector2 {
        x,
        y: crate::space::to_native_y(y),
    };
    d2.draw_circle_v(center, radius, Color::from(fill));
    d2.draw_circle_lines(center.x as i32, center.y as i32, radius, Color::from(outline));
}

const TEXT_SPACING: f32 = 1.0;

/// [`TextMeasurer`] backed by the window's font.
pub struct RaylibMeasurer {
    font: ffi::Font,
}

impl TextMeasurer for RaylibMeasurer {
    fn measure(&self, content: &str, size: f32) -> (f32, f32) {
        let Ok(c_text) = CString::new(content) else {
            return (0.0, 0.0);
        };
        let measured =
            unsafe { ffi::MeasureTextEx(self.font, c_text.as_ptr(), size, TEXT_SPACING) };
        (measured.x, measured.y)
    }
}
