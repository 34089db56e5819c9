//! Moves overlapping frames apart until no pair overlaps, preserving every
//! frame's size and approximate position.
//!
//! Greedy worst-first with deferred replay: the most-contested frames are
//! peeled off one by one (no movement yet), then replayed in reverse order,
//! each pushed away from the remaining cluster's centroid until it clears.

use tracing::{debug, trace};

use crate::common::config::DeclutterSettings;
use crate::layout_engine::frames::{FrameId, FrameSet};
use crate::layout_engine::intersect::{any_intersection, intersection_count};

/// Resolves all pairwise intersections in `set`, in place. Origins move,
/// sizes never do. Empty and singleton sets are no-ops.
pub fn declutter(set: &mut FrameSet, settings: &DeclutterSettings) {
    let mut working: Vec<FrameId> = set.ids().to_vec();
    let mut stack: Vec<FrameId> = Vec::new();

    // Peel the most-contested frame until the remainder is intersection-free.
    // The sort is stable over insertion order, so ties peel deterministically
    // (earliest-inserted first).
    while any_intersection(set, &working) {
        let mut ranked = working.clone();
        ranked.sort_by_key(|&id| std::cmp::Reverse(intersection_count(set, id, &working)));
        let most_contested = ranked[0];

        stack.push(most_contested);
        working.retain(|&id| id != most_contested);
    }

    if stack.is_empty() {
        return;
    }
    debug!(peeled = stack.len(), settled = working.len(), "resolving intersections");

    // Replay last-peeled-first. Each frame is pushed along a fixed direction
    // away from the current cluster centroid; the floor keeps the step
    // non-zero when the frame sits at or behind the centroid.
    while let Some(id) = stack.pop() {
        working.push(id);

        let mut union = set.rect(id);
        for &member in &working {
            union = union.union(&set.rect(member));
        }
        let g = union.center();

        let home = set.home_center(id);
        let delta_x = (home.x - g.x).max(settings.min_step);
        let delta_y = (home.y - g.y).max(settings.min_step);

        let mut steps = 0usize;
        while intersection_count(set, id, &working) > 0 {
            if let Some(frame) = set.get_mut(id) {
                frame.frame.origin.x += delta_x / settings.step_divisor;
                frame.frame.origin.y += delta_y / settings.step_divisor;
            }
            steps += 1;
        }
        trace!(?id, steps, delta_x, delta_y, "frame cleared");
    }
}
