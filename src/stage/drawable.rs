//! Shared draw attributes and the stage-space attribute adapter.

use raylib::prelude::Vector2;

use crate::color::Color;
use crate::space;

/// Native-space draw attributes shared by every stage entity.
///
/// Position is in native view pixels (Y down, origin at the camera view
/// center), rotation in clockwise degrees, `origin` is the pivot in pixels
/// relative to the source rectangle's top-left (same convention as the
/// render layer's `draw_texture_pro` call).
#[derive(Debug, Clone)]
pub struct DrawState {
    pub position: Vector2,
    pub rotation: f32,
    pub scale: f32,
    pub tint: Color,
    pub flip_h: bool,
    pub origin: Vector2,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            rotation: 0.0,
            scale: 1.0,
            tint: Color::WHITE,
            flip_h: false,
            origin: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

/// Stage-space attribute adapter over a [`DrawState`].
///
/// Entities implement the three accessors; every conversion between stage
/// and native semantics comes from the provided methods, so all entities
/// agree on the same arithmetic. Setters write through to the draw state
/// immediately; there is no batching.
pub trait Anchored {
    fn draw_state(&self) -> &DrawState;
    fn draw_state_mut(&mut self) -> &mut DrawState;

    /// Rendered size in pixels, scale applied.
    fn size(&self) -> (f32, f32);

    /// Position in stage coordinates (Y up, origin at the view center).
    fn position(&self) -> (f32, f32) {
        let p = self.draw_state().position;
        (p.x, space::from_native_y(p.y))
    }

    fn set_position(&mut self, x: f32, y: f32) {
        self.draw_state_mut().position = Vector2 {
            x,
            y: space::to_native_y(y),
        };
    }

    /// Rotation in counter-clockwise stage degrees, normalized to [0, 360).
    fn rotation(&self) -> f32 {
        space::from_native_rotation(self.draw_state().rotation)
    }

    fn set_rotation(&mut self, degrees: f32) {
        self.draw_state_mut().rotation = space::to_native_rotation(degrees);
    }

    /// Uniform scale factor.
    fn scale(&self) -> f32 {
        self.draw_state().scale
    }

    fn set_scale(&mut self, scale: f32) {
        self.draw_state_mut().scale = scale;
    }

    /// Set opacity from the stage's 0-50 transparency level.
    ///
    /// Resets the tint to white with the mapped alpha, mirroring how the
    /// native color channel doubles as the opacity control.
    fn set_transparency(&mut self, level: i32) {
        let alpha = space::alpha_for_transparency(level);
        self.draw_state_mut().tint = Color::WHITE.with_alpha(alpha);
    }

    fn flip_horizontal(&self) -> bool {
        self.draw_state().flip_h
    }

    fn set_flip_horizontal(&mut self, flip: bool) {
        self.draw_state_mut().flip_h = flip;
    }

    /// Pivot in pixels from the top-left of the entity's source rectangle.
    fn set_pivot(&mut self, x: f32, y: f32) {
        self.draw_state_mut().origin = Vector2 { x, y };
    }

    fn width(&self) -> f32 {
        self.size().0
    }

    fn height(&self) -> f32 {
        self.size().1
    }

    fn area(&self) -> (f32, f32) {
        self.size()
    }

    /// Axis-aligned point containment around the pivot, in stage
    /// coordinates.
    fn hits_point(&self, x: f32, y: f32) -> bool {
        let (px, py) = self.position();
        let (w, h) = self.size();
        (x - px).abs() <= w / 2.0 && (y - py).abs() <= h / 2.0
    }
}
