//! Fits a disjoint arrangement into the container: normalize to the
//! bounding union, derive one uniform scale, recenter.

use tracing::debug;

use crate::geometry::Size;
use crate::layout_engine::frames::FrameSet;

/// Transforms every frame into final container coordinates and returns the
/// shared scale factor, `0 < scale <= 1.0`. Never upscales past 1.0.
///
/// Frame sizes are left untouched: the presentation layer applies `scale`
/// as a visual transform anchored at each panel's center, and the origin
/// correction below accounts for exactly that anchoring.
pub fn fit_and_center(set: &mut FrameSet, container: Size, padding: f64) -> f64 {
    let ids = set.ids().to_vec();
    let Some(union) = set.union_rect(&ids) else {
        return 1.0;
    };

    // Normalize so the arrangement's bounding box starts at (0, 0).
    for &id in &ids {
        if let Some(frame) = set.get_mut(id) {
            frame.frame.origin.x -= union.origin.x;
            frame.frame.origin.y -= union.origin.y;
        }
    }

    let scale = 1.0f64
        .min((container.width - padding) / union.size.width)
        .min((container.height - padding) / union.size.height);

    let scaled_union = Size::new(union.size.width * scale, union.size.height * scale);
    debug!(?union, scale, "fitting arrangement into container");

    let center_x = (container.width - scaled_union.width).max(0.0) / 2.0;
    let center_y = (container.height - scaled_union.height).max(0.0) / 2.0;

    for &id in &ids {
        if let Some(frame) = set.get_mut(id) {
            frame.frame.origin.x *= scale;
            frame.frame.origin.y *= scale;

            // Compensate for the center-anchored visual scale, then center
            // the whole cluster.
            frame.frame.origin.x -= frame.frame.size.width * (1.0 - scale) / 2.0;
            frame.frame.origin.y -= frame.frame.size.height * (1.0 - scale) / 2.0;

            frame.frame.origin.x += center_x;
            frame.frame.origin.y += center_y;
        }
    }

    scale
}
