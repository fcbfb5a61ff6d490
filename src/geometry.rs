//! Layout rectangles, before/after snapshots and the inverse-offset rule used
//! to animate items into their new position.

use std::collections::BTreeMap;

/// Bounding box of an element in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Translation that keeps an element visually where it used to be.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    /// `before - after` for the top-left corner.
    pub fn between(before: Rect, after: Rect) -> Self {
        Self {
            dx: before.left - after.left,
            dy: before.top - after.top,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// One item that has to be animated from `offset` back to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub index: usize,
    pub offset: Offset,
}

/// Outcome for a single item across one toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Nothing to animate: hidden on one side, or did not move.
    Settled,
    /// Rendered before and after at different positions.
    Moved(Offset),
}

impl Transition {
    pub fn classify(before: Option<Rect>, after: Option<Rect>) -> Self {
        match (before, after) {
            (Some(before), Some(after)) => {
                let offset = Offset::between(before, after);
                if offset.is_zero() {
                    Transition::Settled
                } else {
                    Transition::Moved(offset)
                }
            }
            _ => Transition::Settled,
        }
    }
}

/// Positions of the rendered items at one instant, keyed by item index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    rects: BTreeMap<usize, Rect>,
}

impl Snapshot {
    /// Build a snapshot from per-item measurements; `None` means the item is
    /// not rendered and is left out.
    pub fn capture<I>(measurements: I) -> Self
    where
        I: IntoIterator<Item = (usize, Option<Rect>)>,
    {
        let rects = measurements
            .into_iter()
            .filter_map(|(index, rect)| rect.map(|rect| (index, rect)))
            .collect();
        Self { rects }
    }

    pub fn get(&self, index: usize) -> Option<Rect> {
        self.rects.get(&index).copied()
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.rects.contains_key(&index)
    }

    /// Moves for every item present in both snapshots whose position changed.
    pub fn moves_to(&self, after: &Snapshot) -> Vec<Move> {
        self.rects
            .iter()
            .filter_map(|(&index, &before)| {
                match Transition::classify(Some(before), after.get(index)) {
                    Transition::Moved(offset) => Some(Move { index, offset }),
                    Transition::Settled => None,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_before_minus_after() {
        let before = Rect::new(300.0, 40.0, 100.0, 100.0);
        let after = Rect::new(100.0, 40.0, 100.0, 100.0);
        assert_eq!(
            Offset::between(before, after),
            Offset {
                dx: 200.0,
                dy: 0.0
            }
        );
    }

    #[test]
    fn identical_rects_do_not_move() {
        let r = Rect::new(10.0, 20.0, 5.0, 5.0);
        assert_eq!(Transition::classify(Some(r), Some(r)), Transition::Settled);
    }

    #[test]
    fn size_change_alone_does_not_move() {
        let before = Rect::new(10.0, 20.0, 5.0, 5.0);
        let after = Rect::new(10.0, 20.0, 50.0, 50.0);
        assert_eq!(
            Transition::classify(Some(before), Some(after)),
            Transition::Settled
        );
    }

    #[test]
    fn crossing_visibility_boundary_is_settled() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert_eq!(Transition::classify(None, Some(r)), Transition::Settled);
        assert_eq!(Transition::classify(Some(r), None), Transition::Settled);
        assert_eq!(Transition::classify(None, None), Transition::Settled);
    }

    #[test]
    fn moves_only_for_items_in_both_snapshots() {
        let before = Snapshot::capture([
            (0, Some(Rect::new(0.0, 0.0, 10.0, 10.0))),
            (1, Some(Rect::new(10.0, 0.0, 10.0, 10.0))),
            (2, Some(Rect::new(20.0, 0.0, 10.0, 10.0))),
            (3, None),
        ]);
        let after = Snapshot::capture([
            (0, None),
            (1, Some(Rect::new(0.0, 0.0, 10.0, 10.0))),
            (2, Some(Rect::new(20.0, 0.0, 10.0, 10.0))),
            (3, Some(Rect::new(10.0, 0.0, 10.0, 10.0))),
        ]);

        assert_eq!(before.len(), 3);
        assert!(!before.contains(3));
        assert_eq!(
            before.moves_to(&after),
            vec![Move {
                index: 1,
                offset: Offset { dx: 10.0, dy: 0.0 }
            }]
        );
    }
}
