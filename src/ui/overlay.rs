//! Process-local bookkeeping for the dimming overlay behind the overview.
//! The presentation layer owns the actual view; this records, per
//! controller, the alpha it should currently render. Entries are created
//! lazily on first access and dropped with their controller.

use once_cell::sync::Lazy;
use parking_lot::Mutex;

use crate::common::collections::HashMap;
use crate::expose::ControllerId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayState {
    pub dim_alpha: f64,
}

impl Default for OverlayState {
    fn default() -> Self { Self { dim_alpha: 0.0 } }
}

static OVERLAYS: Lazy<Mutex<HashMap<ControllerId, OverlayState>>> =
    Lazy::new(|| Mutex::new(HashMap::default()));

/// Current overlay state for `controller`, creating the undimmed default on
/// first access.
pub fn state(controller: ControllerId) -> OverlayState {
    *OVERLAYS.lock().entry(controller).or_default()
}

pub fn set_dim_alpha(controller: ControllerId, dim_alpha: f64) {
    OVERLAYS.lock().entry(controller).or_default().dim_alpha = dim_alpha;
}

/// Drops the entry entirely; called when a controller goes away.
pub fn remove(controller: ControllerId) {
    OVERLAYS.lock().remove(&controller);
}
