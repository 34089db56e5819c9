use slotmap::SlotMap;

use crate::geometry::{Point, Rect};
use crate::panel::PanelId;

slotmap::new_key_type! {
    /// Identity of one working frame for the lifetime of a layout pass.
    /// Two frames with coinciding rects are still distinct; every "same
    /// frame" comparison goes through this key, never through coordinates.
    pub struct FrameId;
}

/// Working state for one eligible panel during a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExposeFrame {
    pub panel: PanelId,
    /// Mutated in place by decluttering and the fit transform.
    pub frame: Rect,
    /// Center of the panel's on-screen frame at capture time. Fixes the
    /// outward displacement direction while the working frame moves.
    pub home_center: Point,
}

/// The collection a layout pass operates over: an arena of frames plus
/// their insertion order, which doubles as the deterministic tie-break
/// order for decluttering.
#[derive(Debug, Default)]
pub struct FrameSet {
    frames: SlotMap<FrameId, ExposeFrame>,
    order: Vec<FrameId>,
}

impl FrameSet {
    pub fn new() -> FrameSet { FrameSet::default() }

    pub fn insert(&mut self, panel: PanelId, frame: Rect) -> FrameId {
        let id = self.frames.insert(ExposeFrame {
            panel,
            frame,
            home_center: frame.center(),
        });
        self.order.push(id);
        id
    }

    pub fn len(&self) -> usize { self.order.len() }

    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    /// All frame ids, in insertion order.
    pub fn ids(&self) -> &[FrameId] { &self.order }

    pub fn get(&self, id: FrameId) -> Option<&ExposeFrame> { self.frames.get(id) }

    pub fn get_mut(&mut self, id: FrameId) -> Option<&mut ExposeFrame> { self.frames.get_mut(id) }

    /// The current rect of `id`. Zero rect for a stale id; layout passes
    /// only hold ids they inserted.
    pub fn rect(&self, id: FrameId) -> Rect {
        self.frames.get(id).map(|f| f.frame).unwrap_or_default()
    }

    pub fn home_center(&self, id: FrameId) -> Point {
        self.frames.get(id).map(|f| f.home_center).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FrameId, &ExposeFrame)> + '_ {
        self.order.iter().filter_map(|&id| self.frames.get(id).map(|f| (id, f)))
    }

    /// Smallest rect containing every member of `ids`; None when empty.
    pub fn union_rect(&self, ids: &[FrameId]) -> Option<Rect> {
        ids.iter().map(|&id| self.rect(id)).reduce(|acc, r| acc.union(&r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insertion_order_is_preserved() {
        let mut set = FrameSet::new();
        let a = set.insert(PanelId(0), Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = set.insert(PanelId(1), Rect::new(5.0, 5.0, 10.0, 10.0));
        let c = set.insert(PanelId(2), Rect::new(50.0, 0.0, 10.0, 10.0));

        assert_eq!(set.ids(), &[a, b, c]);
        let panels: Vec<_> = set.iter().map(|(_, f)| f.panel).collect();
        assert_eq!(panels, vec![PanelId(0), PanelId(1), PanelId(2)]);
    }

    #[test]
    fn identity_distinguishes_coincident_frames() {
        let mut set = FrameSet::new();
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        let a = set.insert(PanelId(0), rect);
        let b = set.insert(PanelId(1), rect);

        assert_ne!(a, b);
        assert_eq!(set.rect(a), set.rect(b));
    }

    #[test]
    fn home_center_is_fixed_at_insert() {
        let mut set = FrameSet::new();
        let id = set.insert(PanelId(0), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert_eq!(set.home_center(id), Point::new(50.0, 50.0));

        set.get_mut(id).unwrap().frame.origin = Point::new(500.0, 500.0);
        assert_eq!(set.home_center(id), Point::new(50.0, 50.0));
    }

    #[test]
    fn union_rect_of_empty_is_none() {
        let set = FrameSet::new();
        assert_eq!(set.union_rect(&[]), None);
    }

    #[test]
    fn union_rect_spans_members() {
        let mut set = FrameSet::new();
        let a = set.insert(PanelId(0), Rect::new(0.0, 0.0, 10.0, 10.0));
        let b = set.insert(PanelId(1), Rect::new(40.0, -20.0, 10.0, 10.0));

        assert_eq!(set.union_rect(&[a]), Some(Rect::new(0.0, 0.0, 10.0, 10.0)));
        assert_eq!(set.union_rect(&[a, b]), Some(Rect::new(0.0, -20.0, 50.0, 30.0)));
    }
}
