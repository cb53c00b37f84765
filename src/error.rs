use thiserror::Error;

/// Errors surfaced by the simulation and rendering core.
/// Both variants are construction-time failures; the steady-state loop
/// has no expected errors beyond a surface disappearing mid-run.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LifeError {
    /// Grid dimensions must both be non-zero. Rejected before any allocation.
    #[error("invalid grid dimensions {width}x{height}: width and height must be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    /// The drawing surface could not be acquired or was lost.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,
}
