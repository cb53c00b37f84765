mod scheduler;

pub use scheduler::{FrameScheduler, LoopHandle, Phase};
