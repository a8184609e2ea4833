//! Sprite-sheet frame atlas.
//!
//! A [`Grid`] partitions one shared image into `columns * rows` fixed-size
//! cells and tracks which cell an animation currently shows. Advancing past
//! the last frame wraps to 0 and reports the wrap, which is what lets
//! animation callers distinguish "play once" from "loop".

use raylib::prelude::Rectangle;

use crate::stage::{Actor, ImageHandle};

#[derive(Debug, Clone)]
pub struct Grid {
    image: ImageHandle,
    columns: u32,
    rows: u32,
    frame_count: u32,
    cell_width: u32,
    cell_height: u32,
    frame: u32,
    sub_rect: Rectangle,
}

impl Grid {
    /// Partition `image` into `columns * rows` cells, starting on frame 0.
    ///
    /// Cell sizes use truncating integer division; an image that is not an
    /// exact multiple of the grid simply leaves its trailing pixels unused.
    pub fn new(image: ImageHandle, columns: u32, rows: u32) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let cell_width = image.width / columns;
        let cell_height = image.height / rows;
        let mut grid = Self {
            image,
            columns,
            rows,
            frame_count: columns * rows,
            cell_width,
            cell_height,
            frame: 0,
            sub_rect: Rectangle {
                x: 0.0,
                y: 0.0,
                width: cell_width as f32,
                height: cell_height as f32,
            },
        };
        grid.set_frame(0);
        grid
    }

    /// Select the current frame (0-based, row-major).
    ///
    /// The sub-rectangle is moved by its offset from the previous position
    /// rather than rebuilt, keeping its width/height untouched.
    pub fn set_frame(&mut self, frame: u32) {
        let frame = frame % self.frame_count;
        self.frame = frame;

        let col = frame % self.columns;
        let row = frame / self.columns;

        let dx = (col * self.cell_width) as f32 - self.sub_rect.x;
        let dy = (row * self.cell_height) as f32 - self.sub_rect.y;
        self.sub_rect.x += dx;
        self.sub_rect.y += dy;
    }

    /// Advance to the next frame. Returns `true` exactly when the animation
    /// wrapped back to frame 0.
    pub fn advance(&mut self) -> bool {
        let mut next = self.frame + 1;
        let wrapped = next >= self.frame_count;
        if wrapped {
            next = 0;
        }
        self.set_frame(next);
        wrapped
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn frame_count(&self) -> u32 {
        self.frame_count
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Current sub-rectangle into the source image, in pixels.
    pub fn sub_rect(&self) -> Rectangle {
        self.sub_rect
    }

    /// Horizontal pixel offset of the current frame.
    pub fn dx(&self) -> u32 {
        (self.frame % self.columns) * self.cell_width
    }

    /// Vertical pixel offset of the current frame.
    pub fn dy(&self) -> u32 {
        (self.frame / self.columns) * self.cell_height
    }

    /// Point `actor` at the shared sheet and the current cell.
    pub fn apply_to(&self, actor: &mut Actor) {
        actor.assign_sheet(self.image.clone(), self.sub_rect);
    }
}
