pub mod common;
pub mod expose;
pub mod geometry;
pub mod layout_engine;
pub mod panel;
pub mod ui;

pub use common::config::{Config, Settings};
pub use expose::{ExposeController, Transition};
pub use geometry::{Point, Rect, Size};
pub use layout_engine::{ExposeLayoutEngine, FrameSet, LayoutError, LayoutResult};
pub use panel::{Panel, PanelFlags, PanelId};
