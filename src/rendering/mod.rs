mod renderer;
mod surface;

pub use renderer::{CELL_BORDER, CELL_SIZE, Renderer, surface_px};
pub use surface::{ScreenSurface, Surface};

#[cfg(test)]
pub(crate) use surface::recording;
