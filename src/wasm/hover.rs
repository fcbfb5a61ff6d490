use web_sys::{HtmlElement, PointerEvent, Window};

use crate::error::GalleryError;
use crate::hover::{hover_transform, HoverParams, HoverTransform};

use super::dom::{is_rendered, listen, rect_of};

fn apply(element: &HtmlElement, transform: HoverTransform) {
    let style = element.style();
    let _ = style.set_property("transform-origin", &transform.origin_css());
    let _ = style.set_property("--scale", &transform.scale.to_string());
}

/// Scale `element` on pointer-enter without letting it spill past the
/// viewport; reset on pointer-leave.
pub(crate) fn bind(
    element: &HtmlElement,
    window: &Window,
    params: HoverParams,
) -> Result<(), GalleryError> {
    let target = element.clone();
    let win = window.clone();
    listen(element, "pointerenter", move |_: PointerEvent| {
        if !is_rendered(&win, &target) {
            return;
        }
        let Some(viewport_width) = win.inner_width().ok().and_then(|w| w.as_f64()) else {
            return;
        };
        apply(&target, hover_transform(rect_of(&target), viewport_width, &params));
    })?;

    let target = element.clone();
    listen(element, "pointerleave", move |_: PointerEvent| {
        apply(&target, HoverTransform::REST);
    })
}
