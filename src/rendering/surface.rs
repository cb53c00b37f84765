use macroquad::prelude::*;

use crate::error::LifeError;

/// Seam between the renderer and the drawing backend.
///
/// The renderer only needs to size the surface once and issue rectangle
/// and line primitives; anything that can do that can host the grid.
pub trait Surface {
    /// Size the surface in pixels. Called once at renderer construction.
    fn resize(&mut self, width_px: f32, height_px: f32) -> Result<(), LifeError>;

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);

    /// Stroke a straight line
    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color);

    /// Whether the surface has been torn down since acquisition.
    /// A lost surface fails the next render instead of crashing the loop.
    fn is_lost(&self) -> bool {
        false
    }
}

/// The application window as a drawing surface
pub struct ScreenSurface {
    width_px: f32,
    height_px: f32,
}

impl ScreenSurface {
    /// Acquire the window surface. Fails with `SurfaceUnavailable` when no
    /// window exists yet, in which case the caller should stay idle and
    /// retry once the host has one.
    pub fn acquire() -> Result<Self, LifeError> {
        if screen_width() <= 0.0 || screen_height() <= 0.0 {
            return Err(LifeError::SurfaceUnavailable);
        }

        Ok(Self {
            width_px: screen_width(),
            height_px: screen_height(),
        })
    }

    pub const fn size(&self) -> (f32, f32) {
        (self.width_px, self.height_px)
    }
}

impl Surface for ScreenSurface {
    fn resize(&mut self, width_px: f32, height_px: f32) -> Result<(), LifeError> {
        if width_px <= 0.0 || height_px <= 0.0 {
            return Err(LifeError::SurfaceUnavailable);
        }
        request_new_screen_size(width_px, height_px);
        self.width_px = width_px;
        self.height_px = height_px;
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(x, y, w, h, color);
    }

    fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color) {
        macroquad::prelude::draw_line(x1, y1, x2, y2, thickness, color);
    }

    fn is_lost(&self) -> bool {
        screen_width() <= 0.0 || screen_height() <= 0.0
    }
}
