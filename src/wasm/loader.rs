use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{AddEventListenerOptions, Element, HtmlImageElement};

use super::dom::query_all;

/// Tag every matching image with `loaded_class` once it has decoded.
///
/// Returns how many images were already complete.
pub(crate) fn mark_loaded(root: &Element, selector: &str, loaded_class: &str) -> usize {
    let mut complete = 0;
    for img in query_all::<HtmlImageElement>(root, selector) {
        if img.complete() {
            let _ = img.class_list().add_1(loaded_class);
            complete += 1;
            continue;
        }

        let target = img.clone();
        let class = loaded_class.to_owned();
        let on_load = Closure::once_into_js(move || {
            let _ = target.class_list().add_1(&class);
        });
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        if let Err(err) = img.add_event_listener_with_callback_and_add_event_listener_options(
            "load",
            on_load.unchecked_ref(),
            &options,
        ) {
            log::debug!("load listener failed: {err:?}");
        }
    }
    complete
}
