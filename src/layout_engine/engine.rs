use thiserror::Error;
use tracing::debug;

use crate::common::config::Settings;
use crate::geometry::{Rect, Size};
use crate::layout_engine::declutter::declutter;
use crate::layout_engine::fit::fit_and_center;
use crate::layout_engine::frames::FrameSet;
use crate::panel::PanelId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LayoutError {
    /// The container leaves no room once padding is subtracted; scaling
    /// into it would produce zero-size (or inverted) panels.
    #[error("container {width}x{height} cannot fit a layout with padding {padding}")]
    ContainerTooSmall { width: f64, height: f64, padding: f64 },
}

/// Target frames for the presentation layer, plus the one scale factor
/// shared by all of them. Computed fresh per pass, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub frames: Vec<(PanelId, Rect)>,
    pub scale: f64,
}

impl LayoutResult {
    pub fn empty() -> LayoutResult { LayoutResult { frames: Vec::new(), scale: 1.0 } }

    pub fn is_empty(&self) -> bool { self.frames.is_empty() }
}

/// Runs a full overview layout pass: declutter the frames, then fit and
/// center the arrangement in the container.
#[derive(Debug, Clone)]
pub struct ExposeLayoutEngine {
    settings: Settings,
}

impl ExposeLayoutEngine {
    pub fn new(settings: Settings) -> ExposeLayoutEngine { ExposeLayoutEngine { settings } }

    pub fn settings(&self) -> &Settings { &self.settings }

    pub fn calculate(
        &self,
        set: &mut FrameSet,
        container: Size,
    ) -> Result<LayoutResult, LayoutError> {
        if set.is_empty() {
            return Ok(LayoutResult::empty());
        }

        let padding = self.settings.padding;
        if container.width <= padding || container.height <= padding {
            return Err(LayoutError::ContainerTooSmall {
                width: container.width,
                height: container.height,
                padding,
            });
        }

        declutter(set, &self.settings.declutter);
        let scale = fit_and_center(set, container, padding);
        debug!(frames = set.len(), scale, "expose layout computed");

        Ok(LayoutResult {
            frames: set.iter().map(|(_, f)| (f.panel, f.frame)).collect(),
            scale,
        })
    }
}
