use macroquad::prelude::*;

use super::Surface;
use crate::domain::Universe;
use crate::error::LifeError;

/// Cell edge length in pixels
pub const CELL_SIZE: f32 = 10.0;
/// Gap between cells, also the outer margin
pub const CELL_BORDER: f32 = 1.0;

const GRID_LINE_COLOR: Color = Color::new(0.53, 0.53, 0.53, 1.0); // #888
const DEAD_COLOR: Color = WHITE;
const ALIVE_COLOR: Color = BLACK;

/// Pixel extent of `n` cells plus borders along one axis
pub const fn surface_px(n: usize) -> f32 {
    n as f32 * (CELL_SIZE + CELL_BORDER) + CELL_BORDER
}

/// Pixel offset of cell column/row `i`
const fn cell_px(i: usize) -> f32 {
    i as f32 * (CELL_SIZE + CELL_BORDER) + CELL_BORDER
}

/// Renderer draws grid lines plus one filled rectangle per cell onto a
/// surface sized once at construction. It never mutates grid state.
#[derive(Debug)]
pub struct Renderer<S: Surface> {
    surface: S,
    width: usize,
    height: usize,
}

impl<S: Surface> Renderer<S> {
    /// Take ownership of a surface and size it for a width x height grid.
    /// Dimensions come from the universe once; a resized grid needs a new
    /// renderer.
    pub fn new(mut surface: S, width: usize, height: usize) -> Result<Self, LifeError> {
        surface.resize(surface_px(width), surface_px(height))?;
        Ok(Self { surface, width, height })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[cfg(test)]
    pub(crate) fn surface_ref(&self) -> &S {
        &self.surface
    }

    #[cfg(test)]
    pub(crate) fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Draw one frame of the universe.
    ///
    /// The cell buffer view is acquired exactly once per frame and indexed
    /// in row-major order, so drawing is a straight walk over the grid's
    /// own memory. Fails only if the surface disappeared since startup.
    pub fn render(&mut self, universe: &Universe) -> Result<(), LifeError> {
        if self.surface.is_lost() {
            return Err(LifeError::SurfaceUnavailable);
        }

        self.draw_grid_lines();
        self.draw_cells(universe);
        Ok(())
    }

    fn draw_grid_lines(&mut self) {
        let (right, bottom) = (surface_px(self.width), surface_px(self.height));

        for i in 0..=self.width {
            self.surface
                .draw_line(cell_px(i), 0.0, cell_px(i), bottom, CELL_BORDER, GRID_LINE_COLOR);
        }

        for i in 0..=self.height {
            self.surface
                .draw_line(0.0, cell_px(i), right, cell_px(i), CELL_BORDER, GRID_LINE_COLOR);
        }
    }

    fn draw_cells(&mut self, universe: &Universe) {
        let cells = universe.cells();

        for (idx, cell) in cells.iter().enumerate() {
            let x = idx % self.width;
            let y = idx / self.width;
            let color = if cell.is_alive() { ALIVE_COLOR } else { DEAD_COLOR };

            self.surface
                .fill_rect(cell_px(x), cell_px(y), CELL_SIZE, CELL_SIZE, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;
    use crate::rendering::surface::recording::{DrawOp, RecordingSurface};

    fn universe_3x2() -> Universe {
        Universe::new(3, 2, |x, y| {
            if (x, y) == (2, 1) { Cell::Alive } else { Cell::Dead }
        })
        .unwrap()
    }

    #[test]
    fn test_surface_sized_from_cell_dimensions() {
        let renderer = Renderer::new(RecordingSurface::default(), 3, 2).unwrap();
        // n * (cell + border) + border
        assert_eq!(renderer.surface.size, Some((34.0, 23.0)));
    }

    #[test]
    fn test_unavailable_surface_fails_construction() {
        let surface = RecordingSurface { refuse_resize: true, ..Default::default() };
        assert_eq!(
            Renderer::new(surface, 3, 2).unwrap_err(),
            LifeError::SurfaceUnavailable
        );
    }

    #[test]
    fn test_render_draws_one_rect_per_cell() {
        let universe = universe_3x2();
        let mut renderer = Renderer::new(RecordingSurface::default(), 3, 2).unwrap();
        renderer.render(&universe).unwrap();

        let rects: Vec<_> = renderer
            .surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .collect();
        assert_eq!(rects.len(), 6);
    }

    #[test]
    fn test_render_draws_all_grid_lines() {
        let universe = universe_3x2();
        let mut renderer = Renderer::new(RecordingSurface::default(), 3, 2).unwrap();
        renderer.render(&universe).unwrap();

        let lines = renderer
            .surface
            .ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count();
        // (width + 1) vertical + (height + 1) horizontal
        assert_eq!(lines, 4 + 3);
    }

    #[test]
    fn test_cell_color_follows_state() {
        let universe = universe_3x2();
        let mut renderer = Renderer::new(RecordingSurface::default(), 3, 2).unwrap();
        renderer.render(&universe).unwrap();

        // Last rect is index 5 == (2, 1), the only live cell.
        let colors: Vec<_> = renderer
            .surface
            .ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { color, .. } => Some(*color),
                DrawOp::Line { .. } => None,
            })
            .collect();
        assert_eq!(colors[5], ALIVE_COLOR);
        assert!(colors[..5].iter().all(|&c| c == DEAD_COLOR));
    }

    #[test]
    fn test_rects_land_on_the_pixel_lattice() {
        let universe = universe_3x2();
        let mut renderer = Renderer::new(RecordingSurface::default(), 3, 2).unwrap();
        renderer.render(&universe).unwrap();

        let first_rect = renderer
            .surface
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Rect { x, y, w, h, .. } => Some((*x, *y, *w, *h)),
                DrawOp::Line { .. } => None,
            })
            .unwrap();
        assert_eq!(first_rect, (CELL_BORDER, CELL_BORDER, CELL_SIZE, CELL_SIZE));
    }

    #[test]
    fn test_lost_surface_fails_render() {
        let universe = universe_3x2();
        let mut renderer = Renderer::new(RecordingSurface::default(), 3, 2).unwrap();
        renderer.surface.lost = true;

        assert_eq!(
            renderer.render(&universe).unwrap_err(),
            LifeError::SurfaceUnavailable
        );
    }
}
