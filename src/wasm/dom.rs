use std::borrow::Cow;

use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, EventTarget, HtmlElement, Window};

use crate::controller::{Chip, Tile};
use crate::error::GalleryError;
use crate::filter::FilterSelector;
use crate::geometry::Rect;
use crate::visibility::Tagged;

/// All descendants of `root` matching `selector` that cast to `E`.
///
/// An invalid selector yields an empty list.
pub(crate) fn query_all<E: JsCast>(root: &Element, selector: &str) -> Vec<E> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::warn!("bad selector {selector:?}: {err:?}");
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<E>().ok())
        .collect()
}

/// Attach `handler` for the page lifetime.
pub(crate) fn listen<E>(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(E) + 'static,
) -> Result<(), GalleryError>
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

pub(crate) fn is_activation_key(key: &str) -> bool {
    key == "Enter" || key == " "
}

/// Whether the element currently takes part in layout, judged by its
/// computed `display`.
pub(crate) fn is_rendered(window: &Window, element: &Element) -> bool {
    match window.get_computed_style(element) {
        Ok(Some(style)) => style
            .get_property_value("display")
            .map(|display| display != "none")
            .unwrap_or(true),
        _ => true,
    }
}

pub(crate) fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// A gallery item element.
pub struct DomTile {
    element: HtmlElement,
    window: Window,
}

impl DomTile {
    pub fn new(element: HtmlElement, window: Window) -> Self {
        Self { element, window }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl Tagged for DomTile {
    fn tags(&self, category: &str) -> Option<Cow<'_, str>> {
        self.element.dataset().get(category).map(Cow::Owned)
    }
}

impl Tile for DomTile {
    fn measure(&self) -> Option<Rect> {
        let rect = is_rendered(&self.window, &self.element).then(|| rect_of(&self.element));
        log::trace!("measure {:?}", rect);
        rect
    }

    fn set_shown(&self, shown: bool) {
        let style = self.element.style();
        let result = if shown {
            style.remove_property("display").map(drop)
        } else {
            style.set_property("display", "none")
        };
        if let Err(err) = result {
            log::debug!("display toggle failed: {err:?}");
        }
    }
}

/// A filter chip element.
pub struct DomChip {
    element: HtmlElement,
    selector: Option<FilterSelector>,
    active_class: String,
}

impl DomChip {
    pub fn new(element: HtmlElement, attribute: &str, active_class: &str) -> Self {
        let raw = element.dataset().get(attribute);
        let selector = raw.as_deref().and_then(FilterSelector::parse);
        if selector.is_none() {
            log::debug!("chip without usable {attribute:?}: {raw:?}");
        }
        Self {
            element,
            selector,
            active_class: active_class.to_owned(),
        }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl Chip for DomChip {
    fn selector(&self) -> Option<&FilterSelector> {
        self.selector.as_ref()
    }

    fn set_active(&self, active: bool) {
        let _ = self
            .element
            .class_list()
            .toggle_with_force(&self.active_class, active);
    }
}
