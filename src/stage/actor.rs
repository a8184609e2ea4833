//! Image-backed sprite entity.

use raylib::prelude::{Rectangle, Vector2};

use crate::stage::ImageHandle;
use crate::stage::drawable::{Anchored, DrawState};

/// A sprite on the stage: an image (or a sub-rectangle of one, when driven
/// by a [`Grid`](crate::grid::Grid)) plus its draw attributes.
#[derive(Debug, Clone)]
pub struct Actor {
    image: ImageHandle,
    src: Rectangle,
    state: DrawState,
}

impl Actor {
    /// Create an actor showing the whole image, pivot at its center.
    pub fn new(image: ImageHandle) -> Self {
        let src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: image.width as f32,
            height: image.height as f32,
        };
        let mut actor = Self {
            image,
            src,
            state: DrawState::default(),
        };
        actor.center_pivot();
        actor
    }

    pub fn image(&self) -> &ImageHandle {
        &self.image
    }

    /// Replace the image, resetting the source rectangle to the full image
    /// and re-centering the pivot.
    pub fn set_image(&mut self, image: ImageHandle) {
        self.src = Rectangle {
            x: 0.0,
            y: 0.0,
            width: image.width as f32,
            height: image.height as f32,
        };
        self.image = image;
        self.center_pivot();
    }

    /// Source sub-rectangle into the image, in pixels.
    pub fn source_rect(&self) -> Rectangle {
        self.src
    }

    /// Point the actor at a shared sprite sheet and one cell of it.
    ///
    /// Used by `Grid::apply_to`; the pivot is re-centered on the cell so
    /// rotation and scale stay anchored to the visible frame.
    pub fn assign_sheet(&mut self, image: ImageHandle, src: Rectangle) {
        self.image = image;
        self.src = src;
        self.center_pivot();
    }

    fn center_pivot(&mut self) {
        self.state.origin = Vector2 {
            x: self.src.width / 2.0,
            y: self.src.height / 2.0,
        };
    }
}

impl Anchored for Actor {
    fn draw_state(&self) -> &DrawState {
        &self.state
    }

    fn draw_state_mut(&mut self) -> &mut DrawState {
        &mut self.state
    }

    fn size(&self) -> (f32, f32) {
        (
            self.src.width * self.state.scale,
            self.src.height * self.state.scale,
        )
    }
}
