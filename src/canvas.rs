//! Offscreen canvas: an ARGB pixel surface with a small raster context.
//!
//! The canvas is decoupled from the window backbuffer: callers draw into
//! the surface through the [`PixelContext`], then call [`Canvas::refresh`]
//! to repack the raw pixels into the presentable RGBA bytes the render
//! layer uploads to a texture. [`Canvas::clear`] deliberately does NOT
//! refresh; the stale presentable image stays visible until the caller
//! asks for a refresh.

use crate::color::Color;

/// Packed ARGB32 pixel surface.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    fn put(&mut self, x: i32, y: i32, argb: u32) {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.pixels[(y as u32 * self.width + x as u32) as usize] = argb;
        }
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }
}

fn pack_argb(c: Color) -> u32 {
    ((c.a as u32) << 24) | ((c.r as u32) << 16) | ((c.g as u32) << 8) | (c.b as u32)
}

/// Raster drawing context over a [`PixelSurface`].
///
/// Holds the current draw color; all primitives clip against the surface
/// bounds. Rebuilt together with the surface on [`Canvas::clear`].
#[derive(Debug, Clone)]
pub struct PixelContext {
    surface: PixelSurface,
    color: Color,
}

impl PixelContext {
    pub fn new(surface: PixelSurface) -> Self {
        Self {
            surface,
            color: Color::BLACK,
        }
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_pixel(&mut self, x: i32, y: i32) {
        self.surface.put(x, y, pack_argb(self.color));
    }

    /// Fill the whole surface with the current color.
    pub fn fill(&mut self) {
        let argb = pack_argb(self.color);
        for px in self.surface.pixels.iter_mut() {
            *px = argb;
        }
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32) {
        let argb = pack_argb(self.color);
        for yy in y..y + h as i32 {
            for xx in x..x + w as i32 {
                self.surface.put(xx, yy, argb);
            }
        }
    }

    /// Bresenham line between two points.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let argb = pack_argb(self.color);
        let (mut x, mut y) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.surface.put(x, y, argb);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Midpoint circle outline.
    pub fn stroke_circle(&mut self, cx: i32, cy: i32, radius: u32) {
        let argb = pack_argb(self.color);
        let mut x = radius as i32;
        let mut y = 0i32;
        let mut err = 1 - x;
        while x >= y {
            for (px, py) in [
                (cx + x, cy + y),
                (cx - x, cy + y),
                (cx + x, cy - y),
                (cx - x, cy - y),
                (cx + y, cy + x),
                (cx - y, cy + x),
                (cx + y, cy - x),
                (cx - y, cy - x),
            ] {
                self.surface.put(px, py, argb);
            }
            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }
}

/// Offscreen drawing canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    context: PixelContext,
    presentable: Vec<u8>,
}

impl Canvas {
    /// Allocate a zeroed surface and synchronize the presentable image
    /// from it once.
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            context: PixelContext::new(PixelSurface::new(width, height)),
            presentable: vec![0; (width * height * 4) as usize],
        };
        canvas.refresh();
        canvas
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn context(&self) -> &PixelContext {
        &self.context
    }

    /// Drawing access. Call [`Canvas::refresh`] afterwards to make the
    /// changes visible.
    pub fn context_mut(&mut self) -> &mut PixelContext {
        &mut self.context
    }

    /// Repack the ARGB surface into the presentable RGBA byte image.
    ///
    /// Must be called after any external drawing on the surface.
    pub fn refresh(&mut self) {
        for (i, px) in self.context.surface.pixels().iter().enumerate() {
            let o = i * 4;
            self.presentable[o] = (px >> 16) as u8;
            self.presentable[o + 1] = (px >> 8) as u8;
            self.presentable[o + 2] = *px as u8;
            self.presentable[o + 3] = (px >> 24) as u8;
        }
    }

    /// Throw away the surface and its context, reallocating both zeroed.
    ///
    /// The presentable image is intentionally left stale; callers that
    /// want the cleared state visible immediately must call
    /// [`Canvas::refresh`] themselves.
    pub fn clear(&mut self) {
        self.context = PixelContext::new(PixelSurface::new(self.width, self.height));
    }

    /// RGBA bytes for texture upload, row-major.
    pub fn presentable_bytes(&self) -> &[u8] {
        &self.presentable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pixel_then_refresh_shows_rgba() {
        let mut c = Canvas::new(4, 4);
        c.context_mut().set_color(Color::new(10, 20, 30, 40));
        c.context_mut().set_pixel(1, 2);
        c.refresh();
        let o = (2 * 4 + 1) * 4;
        assert_eq!(&c.presentable_bytes()[o..o + 4], &[10, 20, 30, 40]);
    }

    #[test]
    fn test_drawing_without_refresh_is_not_presentable() {
        let mut c = Canvas::new(2, 2);
        c.context_mut().set_color(Color::WHITE);
        c.context_mut().fill();
        assert!(c.presentable_bytes().iter().all(|b| *b == 0));
        c.refresh();
        assert!(c.presentable_bytes().iter().all(|b| *b == 255));
    }

    #[test]
    fn test_clear_reallocates_but_keeps_presentable_stale() {
        let mut c = Canvas::new(2, 2);
        c.context_mut().set_color(Color::RED);
        c.context_mut().fill();
        c.refresh();
        c.clear();
        // Surface is zeroed...
        assert_eq!(c.context().surface().pixel(0, 0), Some(0));
        // ...but the presentable image still shows the old fill.
        assert_eq!(c.presentable_bytes()[0], 255);
        c.refresh();
        assert_eq!(c.presentable_bytes()[0], 0);
    }

    #[test]
    fn test_primitives_clip_to_surface() {
        let mut c = Canvas::new(4, 4);
        let ctx = c.context_mut();
        ctx.set_color(Color::WHITE);
        ctx.fill_rect(-2, -2, 10, 10);
        ctx.line(-5, 0, 10, 0);
        ctx.stroke_circle(0, 0, 6);
        // Nothing panicked and in-bounds pixels were written.
        assert_ne!(c.context().surface().pixel(0, 0), Some(0));
    }

    #[test]
    fn test_line_endpoints() {
        let mut c = Canvas::new(8, 8);
        c.context_mut().set_color(Color::WHITE);
        c.context_mut().line(0, 0, 7, 7);
        assert_ne!(c.context().surface().pixel(0, 0), Some(0));
        assert_ne!(c.context().surface().pixel(7, 7), Some(0));
        assert_ne!(c.context().surface().pixel(3, 3), Some(0));
    }
}
