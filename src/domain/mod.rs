mod cell;
mod patterns;
mod topology;
mod universe;

pub use cell::Cell;
pub use patterns::{Pattern, presets};
pub use topology::EdgePolicy;
pub use universe::{PARALLEL_THRESHOLD, Universe};
