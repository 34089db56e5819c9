//! Intersection queries over a [`FrameSet`]. Pure reads; decluttering owns
//! all mutation.

use crate::layout_engine::frames::{FrameId, FrameSet};

/// Whether any unordered pair in `members` overlaps. O(n²).
pub fn any_intersection(set: &FrameSet, members: &[FrameId]) -> bool {
    for (i, &a) in members.iter().enumerate() {
        for &b in &members[i + 1..] {
            if set.rect(a).intersects(&set.rect(b)) {
                return true;
            }
        }
    }
    false
}

/// How many members of `members` overlap `frame`, excluding `frame` itself.
/// A frame never intersects itself, however its rect compares.
pub fn intersection_count(set: &FrameSet, frame: FrameId, members: &[FrameId]) -> usize {
    let rect = set.rect(frame);
    members
        .iter()
        .filter(|&&other| other != frame && rect.intersects(&set.rect(other)))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::panel::PanelId;

    fn set_of(rects: &[Rect]) -> (FrameSet, Vec<FrameId>) {
        let mut set = FrameSet::new();
        let ids = rects
            .iter()
            .enumerate()
            .map(|(i, &r)| set.insert(PanelId(i), r))
            .collect();
        (set, ids)
    }

    #[test]
    fn empty_and_singleton_have_no_intersections() {
        let (set, ids) = set_of(&[]);
        assert!(!any_intersection(&set, &ids));

        let (set, ids) = set_of(&[Rect::new(0.0, 0.0, 100.0, 100.0)]);
        assert!(!any_intersection(&set, &ids));
        assert_eq!(intersection_count(&set, ids[0], &ids), 0);
    }

    #[test]
    fn detects_overlapping_pair() {
        let (set, ids) = set_of(&[
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(50.0, 50.0, 100.0, 100.0),
            Rect::new(500.0, 500.0, 10.0, 10.0),
        ]);
        assert!(any_intersection(&set, &ids));
        assert_eq!(intersection_count(&set, ids[0], &ids), 1);
        assert_eq!(intersection_count(&set, ids[2], &ids), 0);
    }

    #[test]
    fn disjoint_members_report_nothing() {
        let (set, ids) = set_of(&[
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(20.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 20.0, 10.0, 10.0),
        ]);
        assert!(!any_intersection(&set, &ids));
        for &id in &ids {
            assert_eq!(intersection_count(&set, id, &ids), 0);
        }
    }

    #[test]
    fn coincident_frames_count_each_other_but_not_themselves() {
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let (set, ids) = set_of(&[rect, rect, rect]);

        for &id in &ids {
            assert_eq!(intersection_count(&set, id, &ids), 2);
        }
    }

    #[test]
    fn count_ignores_members_outside_the_working_set() {
        let (set, ids) = set_of(&[
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(10.0, 10.0, 100.0, 100.0),
            Rect::new(20.0, 20.0, 100.0, 100.0),
        ]);
        // Working set excludes ids[2]; it must not be counted.
        let working = &ids[..2];
        assert_eq!(intersection_count(&set, ids[0], working), 1);
    }
}
