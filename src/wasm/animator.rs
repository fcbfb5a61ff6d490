use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{HtmlElement, Window};

use crate::controller::Animator;
use crate::geometry::Move;

use super::dom::DomTile;

const TX: &str = "--tx";
const TY: &str = "--ty";

/// Plays moves by offsetting tiles through `--tx`/`--ty` and letting a CSS
/// transition relax them on the next frame.
pub struct CssAnimator {
    window: Window,
    transition: String,
    /// Bumped on every play and interrupt; a frame callback only relaxes if
    /// its generation is still current.
    generation: Rc<Cell<u64>>,
    in_flight: Vec<HtmlElement>,
}

impl CssAnimator {
    pub fn new(window: Window, transition: impl Into<String>) -> Self {
        Self {
            window,
            transition: transition.into(),
            generation: Rc::new(Cell::new(0)),
            in_flight: Vec::new(),
        }
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }
}

impl Animator<DomTile> for CssAnimator {
    fn interrupt(&mut self, _tiles: &[DomTile]) {
        self.bump();
        if self.in_flight.is_empty() {
            return;
        }
        for element in &self.in_flight {
            let style = element.style();
            let _ = style.set_property("transition", "none");
            let _ = style.remove_property(TX);
            let _ = style.remove_property(TY);
        }
        // Commit the jump to rest before transitions come back.
        let _ = self.in_flight[0].offset_height();
        for element in self.in_flight.drain(..) {
            let _ = element.style().remove_property("transition");
        }
    }

    fn play(&mut self, tiles: &[DomTile], moves: &[Move]) {
        let generation = self.bump();

        let mut moving = Vec::with_capacity(moves.len());
        for mv in moves {
            let Some(tile) = tiles.get(mv.index) else {
                continue;
            };
            let element = tile.element().clone();
            let style = element.style();
            let _ = style.set_property("transition", "none");
            let _ = style.set_property(TX, &format!("{}px", mv.offset.dx));
            let _ = style.set_property(TY, &format!("{}px", mv.offset.dy));
            moving.push(element);
        }
        let Some(first) = moving.first() else {
            return;
        };
        // Force layout so the offset is painted before the transition returns.
        let _ = first.offset_height();
        log::debug!("moving {} tiles (generation {generation})", moving.len());

        self.in_flight = moving.clone();
        let current = Rc::clone(&self.generation);
        let transition = self.transition.clone();
        let relax = Closure::once_into_js(move || {
            if current.get() != generation {
                log::trace!("generation {generation} superseded");
                return;
            }
            for element in &moving {
                let style = element.style();
                let _ = style.set_property("transition", &transition);
                let _ = style.remove_property(TX);
                let _ = style.remove_property(TY);
            }
        });
        if let Err(err) = self.window.request_animation_frame(relax.unchecked_ref()) {
            log::warn!("requestAnimationFrame failed: {err:?}");
        }
    }
}
