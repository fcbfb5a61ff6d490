use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use crate::config::{GalleryConfig, SideButtonConfig};
use crate::error::GalleryError;

use super::dom::{is_activation_key, listen, query_all};

/// Category dropdowns and the side button's label/icon swap.
pub struct MenuController {
    headers: Vec<HtmlElement>,
    open_class: String,
    side_button: Option<HtmlElement>,
    side: SideButtonConfig,
}

impl MenuController {
    pub fn new(root: &Element, config: &GalleryConfig) -> Self {
        let side_button = root
            .query_selector(&format!("#{}", config.side_button.id))
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if side_button.is_none() {
            log::debug!("no side button #{}", config.side_button.id);
        }
        Self {
            headers: query_all(root, &config.header_selector),
            open_class: config.active_class.clone(),
            side_button,
            side: config.side_button.clone(),
        }
    }

    pub fn headers(&self) -> &[HtmlElement] {
        &self.headers
    }

    /// Open or close the group a header belongs to.
    pub fn toggle_group(&self, header: &Element) {
        let Some(group) = header.parent_element() else {
            return;
        };
        let _ = group.class_list().toggle(&self.open_class);
    }

    /// Text mode: the category label in the label font.
    pub fn show_label(&self) {
        let Some(button) = &self.side_button else {
            return;
        };
        button.set_class_name("");
        button.set_text_content(Some(&self.side.label_text));
        let _ = button
            .style()
            .set_property("font-family", &self.side.label_font);
    }

    /// Icon mode: no text, icon classes in the icon font.
    pub fn show_icon(&self) {
        let Some(button) = &self.side_button else {
            return;
        };
        button.set_text_content(Some(""));
        button.set_class_name(&self.side.icon_class);
        let _ = button
            .style()
            .set_property("font-family", &self.side.icon_font);
    }

    pub(crate) fn bind(self: &Rc<Self>) -> Result<(), GalleryError> {
        for header in &self.headers {
            header.set_tab_index(0);

            let menu = Rc::clone(self);
            let target = header.clone();
            listen(header, "click", move |_: Event| menu.toggle_group(&target))?;

            let menu = Rc::clone(self);
            let target = header.clone();
            listen(header, "keydown", move |event: KeyboardEvent| {
                if is_activation_key(&event.key()) {
                    event.prevent_default();
                    menu.toggle_group(&target);
                }
            })?;
        }

        if let Some(button) = &self.side_button {
            let menu = Rc::clone(self);
            listen(button, "pointerenter", move |_: Event| menu.show_label())?;
            let menu = Rc::clone(self);
            listen(button, "pointerleave", move |_: Event| menu.show_icon())?;
        }
        Ok(())
    }
}
