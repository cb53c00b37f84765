// Domain layer - grid engine, cells, patterns
pub mod domain;

// Application layer - frame scheduling
pub mod application;

// Infrastructure layer - surfaces and rendering
pub mod rendering;

pub mod error;

// Re-exports for convenience
pub use application::{FrameScheduler, LoopHandle, Phase};
pub use domain::{Cell, EdgePolicy, Pattern, Universe, presets};
pub use error::LifeError;
pub use rendering::{Renderer, ScreenSurface, Surface};
