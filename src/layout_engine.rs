pub mod declutter;
pub mod engine;
pub mod fit;
pub mod frames;
pub mod intersect;

pub use engine::{ExposeLayoutEngine, LayoutError, LayoutResult};
pub use frames::{ExposeFrame, FrameId, FrameSet};
