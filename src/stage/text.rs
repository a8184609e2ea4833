//! Measured, center-pivoted text entity.

use crate::color::Color;
use crate::stage::drawable::{Anchored, DrawState};

/// Measures rendered text. The raylib layer implements this against the
/// active font; tests supply fixed metrics.
pub trait TextMeasurer {
    /// Bounding box of `content` rendered at `size`, in pixels.
    fn measure(&self, content: &str, size: f32) -> (f32, f32);
}

/// A text entity.
///
/// Every content or size change re-measures the rendered bounding box and
/// moves the pivot to exactly half of it, so rotation and scale always
/// apply around the visual center. Width/height queries report the
/// measured box, not the nominal font size.
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    size: f32,
    color: Color,
    bounds: (f32, f32),
    state: DrawState,
}

impl Text {
    pub const DEFAULT_SIZE: f32 = 20.0;

    pub fn new(content: impl Into<String>, measurer: &dyn TextMeasurer) -> Self {
        let content = content.into();
        let size = Self::DEFAULT_SIZE;
        let mut text = Self {
            bounds: (0.0, 0.0),
            content,
            size,
            color: Color::BLACK,
            state: DrawState::default(),
        };
        text.remeasure(measurer);
        text
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>, measurer: &dyn TextMeasurer) {
        self.content = content.into();
        self.remeasure(measurer);
    }

    /// Nominal font size ("magnitude"). Distinct from [`Anchored::size`],
    /// which reports the measured bounding box.
    pub fn font_size(&self) -> f32 {
        self.size
    }

    pub fn set_font_size(&mut self, size: f32, measurer: &dyn TextMeasurer) {
        self.size = size;
        self.remeasure(measurer);
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn remeasure(&mut self, measurer: &dyn TextMeasurer) {
        self.bounds = measurer.measure(&self.content, self.size);
        self.set_pivot(self.bounds.0 / 2.0, self.bounds.1 / 2.0);
    }
}

impl Anchored for Text {
    fn draw_state(&self) -> &DrawState {
        &self.state
    }

    fn draw_state_mut(&mut self) -> &mut DrawState {
        &mut self.state
    }

    fn size(&self) -> (f32, f32) {
        self.bounds
    }

    /// Text never participates in pointer collision.
    fn hits_point(&self, _x: f32, _y: f32) -> bool {
        false
    }
}
