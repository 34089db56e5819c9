//! Overview mode transitions. The controller selects eligible panels,
//! captures their frames, runs the layout engine, and applies or undoes
//! the result through the [`Panel`] boundary. Whether the overview is
//! active is derived from the panels' saved-frame slots, so the controller
//! itself carries no mode flag that could fall out of sync.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, instrument, warn};

use crate::common::config::Settings;
use crate::geometry::{Rect, Size};
use crate::layout_engine::{ExposeLayoutEngine, FrameSet, LayoutError};
use crate::panel::{Panel, PanelId};
use crate::ui::overlay;

/// Process-unique identity of a controller, used to key overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControllerId(u64);

impl ControllerId {
    pub fn next() -> ControllerId {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ControllerId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// What the presentation layer should do after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// A guard declined the call; present nothing.
    None,
    /// Move each panel to its target frame, apply `scale` as a uniform
    /// visual transform per panel, and dim the overlay to `overlay_alpha`.
    Entered {
        frames: Vec<(PanelId, Rect)>,
        scale: f64,
        overlay_alpha: f64,
    },
    /// Move each panel back to its restored frame, undo the visual scale,
    /// and clear the overlay.
    Exited { frames: Vec<(PanelId, Rect)> },
}

pub struct ExposeController {
    id: ControllerId,
    engine: ExposeLayoutEngine,
}

impl ExposeController {
    pub fn new(settings: Settings) -> ExposeController {
        ExposeController {
            id: ControllerId::next(),
            engine: ExposeLayoutEngine::new(settings),
        }
    }

    pub fn id(&self) -> ControllerId { self.id }

    pub fn settings(&self) -> &Settings { self.engine.settings() }

    /// True iff any panel currently has a captured pre-overview frame.
    pub fn is_active<P: Panel>(panels: &[P]) -> bool {
        panels.iter().any(|p| p.in_expose())
    }

    /// Enters the overview: lays out all eligible panels and applies the
    /// target frames. No-op when already active or when nothing is
    /// eligible. On error the panels are left exactly as they were.
    #[instrument(skip(self, panels))]
    pub fn enter<P: Panel>(
        &self,
        panels: &mut [P],
        container: Size,
    ) -> Result<Transition, LayoutError> {
        if Self::is_active(panels) {
            return Ok(Transition::None);
        }

        let mut set = FrameSet::new();
        for (idx, panel) in panels.iter().enumerate() {
            if panel.flags().eligible_for_expose() {
                set.insert(PanelId(idx), panel.frame());
            }
        }
        if set.is_empty() {
            debug!("no eligible panels, staying out of the overview");
            return Ok(Transition::None);
        }

        let result = match self.engine.calculate(&mut set, container) {
            Ok(result) => result,
            Err(err) => {
                warn!(%err, "overview layout failed");
                return Err(err);
            }
        };

        for &(PanelId(idx), target) in &result.frames {
            let panel = &mut panels[idx];
            panel.set_frame_before_expose(Some(panel.frame()));
            panel.set_frame(target);
        }

        let overlay_settings = &self.engine.settings().overlay;
        let overlay_alpha = if overlay_settings.enabled {
            overlay::set_dim_alpha(self.id, overlay_settings.dim_alpha);
            overlay_settings.dim_alpha
        } else {
            0.0
        };

        debug!(panels = result.frames.len(), scale = result.scale, "entered overview");
        Ok(Transition::Entered {
            frames: result.frames,
            scale: result.scale,
            overlay_alpha,
        })
    }

    /// Exits the overview: restores every captured frame and clears the
    /// capture slots. No-op when nothing is captured.
    #[instrument(skip(self, panels))]
    pub fn exit<P: Panel>(&self, panels: &mut [P]) -> Transition {
        if !Self::is_active(panels) {
            return Transition::None;
        }

        let mut restored = Vec::new();
        for (idx, panel) in panels.iter_mut().enumerate() {
            if let Some(frame) = panel.frame_before_expose() {
                panel.set_frame(frame);
                panel.set_frame_before_expose(None);
                restored.push((PanelId(idx), frame));
            }
        }

        if self.engine.settings().overlay.enabled {
            overlay::set_dim_alpha(self.id, 0.0);
        }

        debug!(panels = restored.len(), "exited overview");
        Transition::Exited { frames: restored }
    }
}

impl Drop for ExposeController {
    fn drop(&mut self) { overlay::remove(self.id); }
}
