//! Fits the fixed world rectangle into whatever canvas the terminal gives us.

use super::canvas::Rect;

/// Uniform world-to-pixel mapping, centered with letterbox margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Pixels per world unit.
    pub scale: f64,
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn fit(canvas_w: usize, canvas_h: usize, world_w: f64, world_h: f64) -> Self {
        let scale = (canvas_w as f64 / world_w).min(canvas_h as f64 / world_h);
        let width = (world_w * scale).round() as i32;
        let height = (world_h * scale).round() as i32;
        Self {
            scale,
            left: (canvas_w as i32 - width) / 2,
            top: (canvas_h as i32 - height) / 2,
            width,
            height,
        }
    }

    pub fn x(&self, wx: f64) -> i32 {
        self.left + (wx * self.scale).floor() as i32
    }

    pub fn y(&self, wy: f64) -> i32 {
        self.top + (wy * self.scale).floor() as i32
    }

    /// Pixel length of a world distance, at least one pixel.
    pub fn len(&self, w: f64) -> i32 {
        ((w * self.scale).round() as i32).max(1)
    }

    /// World coordinates of a pixel's center.
    pub fn to_world(&self, px: i32, py: i32) -> (f64, f64) {
        (
            (px - self.left) as f64 / self.scale + 0.5 / self.scale,
            (py - self.top) as f64 / self.scale + 0.5 / self.scale,
        )
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x0: self.left,
            y0: self.top,
            x1: self.left + self.width,
            y1: self.top + self.height,
        }
    }
}
