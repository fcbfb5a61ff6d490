//! Orchestrates a filter toggle: measure, mutate, measure, animate.
//!
//! The controller never touches the DOM directly. Tiles, chips and the
//! animator are reached through the traits below, so the browser layer and
//! the tests supply their own implementations.

use crate::filter::{FilterSelector, FilterState, Toggle};
use crate::geometry::{Move, Rect, Snapshot};
use crate::visibility::{is_visible, Tagged};

/// A gallery item as seen by the controller.
pub trait Tile: Tagged {
    /// Current layout box, or `None` if the item is not rendered.
    ///
    /// Reflects what is actually laid out, not the last visibility decision.
    fn measure(&self) -> Option<Rect>;

    /// Include the item in layout or remove it.
    fn set_shown(&self, shown: bool);
}

/// A filter control bound to one `category:value` pair.
pub trait Chip {
    /// `None` for chips whose attribute could not be parsed.
    fn selector(&self) -> Option<&FilterSelector>;

    fn set_active(&self, active: bool);
}

/// Plays the moves computed for one toggle.
pub trait Animator<T> {
    /// Called right after the "before" measurement. Any animation still in
    /// flight must be snapped to rest so the "after" measurement sees plain
    /// layout.
    fn interrupt(&mut self, _tiles: &[T]) {}

    fn play(&mut self, tiles: &[T], moves: &[Move]);
}

pub struct FilterController<T, C, A> {
    state: FilterState,
    tiles: Vec<T>,
    chips: Vec<C>,
    animator: A,
}

impl<T, C, A> FilterController<T, C, A>
where
    T: Tile,
    C: Chip,
    A: Animator<T>,
{
    pub fn new(tiles: Vec<T>, chips: Vec<C>, animator: A) -> Self {
        Self {
            state: FilterState::new(),
            tiles,
            chips,
            animator,
        }
    }

    /// Establish the baseline: apply the (empty) state and sync every chip.
    pub fn initialize(&mut self) -> Vec<Move> {
        self.transition(|_| {})
    }

    /// Toggle `value` in `category` and animate the resulting layout change.
    pub fn toggle(&mut self, category: &str, value: &str) -> Vec<Move> {
        self.transition(|state| {
            let outcome = state.toggle(category, value);
            match outcome {
                Toggle::Activated { replaced } => {
                    log::debug!("filter {category}={value} on (replaced {replaced:?})");
                }
                Toggle::Deactivated => log::debug!("filter {category}={value} off"),
            }
        })
    }

    /// Activate the chip at `index`. Malformed or unknown chips do nothing.
    pub fn activate_chip(&mut self, index: usize) -> Option<Vec<Move>> {
        let selector = self.chips.get(index)?.selector()?.clone();
        Some(self.toggle(&selector.category, &selector.value))
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn tiles(&self) -> &[T] {
        &self.tiles
    }

    pub fn chips(&self) -> &[C] {
        &self.chips
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Indices of the items matching the current state.
    pub fn visible_indices(&self) -> Vec<usize> {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| is_visible(*tile, &self.state))
            .map(|(index, _)| index)
            .collect()
    }

    /// The four phases run strictly in sequence so no measurement observes a
    /// half-applied layout.
    fn transition(&mut self, mutate: impl FnOnce(&mut FilterState)) -> Vec<Move> {
        let before = self.snapshot();
        self.animator.interrupt(&self.tiles);

        mutate(&mut self.state);
        self.render();

        let after = self.snapshot();
        let moves = before.moves_to(&after);
        log::debug!(
            "{} rendered before, {} after, {} moving",
            before.len(),
            after.len(),
            moves.len()
        );

        if !moves.is_empty() {
            self.animator.play(&self.tiles, &moves);
        }
        moves
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot::capture(
            self.tiles
                .iter()
                .enumerate()
                .map(|(index, tile)| (index, tile.measure())),
        )
    }

    fn render(&self) {
        for tile in &self.tiles {
            tile.set_shown(is_visible(tile, &self.state));
        }
        for chip in &self.chips {
            let active = chip
                .selector()
                .is_some_and(|selector| selector.is_selected_in(&self.state));
            chip.set_active(active);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::cell::Cell;

    use super::*;

    /// Fixed-position tile; shown state only affects whether it measures.
    struct StaticTile {
        style: Option<&'static str>,
        rect: Rect,
        shown: Cell<bool>,
    }

    impl Tagged for StaticTile {
        fn tags(&self, category: &str) -> Option<Cow<'_, str>> {
            (category == "style").then_some(self.style?).map(Cow::Borrowed)
        }
    }

    impl Tile for StaticTile {
        fn measure(&self) -> Option<Rect> {
            self.shown.get().then_some(self.rect)
        }

        fn set_shown(&self, shown: bool) {
            self.shown.set(shown);
        }
    }

    struct StaticChip {
        selector: Option<FilterSelector>,
        active: Cell<bool>,
    }

    impl Chip for StaticChip {
        fn selector(&self) -> Option<&FilterSelector> {
            self.selector.as_ref()
        }

        fn set_active(&self, active: bool) {
            self.active.set(active);
        }
    }

    #[derive(Default)]
    struct CountingAnimator {
        plays: usize,
    }

    impl Animator<StaticTile> for CountingAnimator {
        fn play(&mut self, _tiles: &[StaticTile], _moves: &[Move]) {
            self.plays += 1;
        }
    }

    fn controller() -> FilterController<StaticTile, StaticChip, CountingAnimator> {
        let tile = |style, left| StaticTile {
            style,
            rect: Rect::new(left, 0.0, 10.0, 10.0),
            shown: Cell::new(true),
        };
        let chip = |raw: &str| StaticChip {
            selector: FilterSelector::parse(raw),
            active: Cell::new(false),
        };
        FilterController::new(
            vec![tile(Some("a"), 0.0), tile(Some("b"), 10.0), tile(None, 20.0)],
            vec![chip("style:a"), chip("style:b"), chip("broken")],
            CountingAnimator::default(),
        )
    }

    #[test]
    fn initialize_shows_everything_without_animating() {
        let mut c = controller();
        assert!(c.initialize().is_empty());
        assert_eq!(c.animator.plays, 0);
        assert!(c.tiles().iter().all(|t| t.shown.get()));
        assert!(c.chips().iter().all(|chip| !chip.active.get()));
    }

    #[test]
    fn chip_activation_syncs_sibling_chips() {
        let mut c = controller();
        c.initialize();

        c.activate_chip(0);
        let active: Vec<bool> = c.chips().iter().map(|chip| chip.active.get()).collect();
        assert_eq!(active, vec![true, false, false]);

        c.activate_chip(1);
        let active: Vec<bool> = c.chips().iter().map(|chip| chip.active.get()).collect();
        assert_eq!(active, vec![false, true, false]);
        assert_eq!(c.visible_indices(), vec![1]);
    }

    #[test]
    fn malformed_and_unknown_chips_are_noops() {
        let mut c = controller();
        c.initialize();
        assert_eq!(c.activate_chip(2), None);
        assert_eq!(c.activate_chip(99), None);
        assert!(c.state().is_empty());
    }

    #[test]
    fn stationary_tiles_are_not_animated() {
        let mut c = controller();
        c.initialize();
        let moves = c.toggle("style", "a");
        assert!(moves.is_empty());
        assert_eq!(c.animator.plays, 0);
        assert_eq!(
            c.tiles().iter().map(|t| t.shown.get()).collect::<Vec<_>>(),
            vec![true, false, false]
        );
    }
}
