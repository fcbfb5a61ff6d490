use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Event, HtmlElement, KeyboardEvent};

use crate::config::GalleryConfig;
use crate::controller::FilterController;
use crate::error::GalleryError;
use crate::filter::FilterState;

use super::animator::CssAnimator;
use super::dom::{is_activation_key, listen, query_all, DomChip, DomTile};
use super::menu::MenuController;
use super::{hover, loader};

type Controller = FilterController<DomTile, DomChip, CssAnimator>;

/// Everything bound to one gallery root.
pub struct Gallery {
    controller: Rc<RefCell<Controller>>,
    menu: Rc<MenuController>,
}

impl Gallery {
    /// Discover tiles, chips, headers and images under `root`, wire their
    /// events and apply the initial (empty) filter state.
    pub fn mount(root: &Element, config: &GalleryConfig) -> Result<Self, GalleryError> {
        let window = web_sys::window().ok_or(GalleryError::NoWindow)?;

        let complete = loader::mark_loaded(root, &config.image_selector, &config.loaded_class);
        log::debug!("{complete} images already loaded");

        let tile_elements: Vec<HtmlElement> = query_all(root, &config.item_selector);
        for element in &tile_elements {
            hover::bind(element, &window, config.hover)?;
        }
        let tiles = tile_elements
            .into_iter()
            .map(|element| DomTile::new(element, window.clone()))
            .collect();

        let chips: Vec<DomChip> = query_all::<HtmlElement>(root, &config.chip_selector)
            .into_iter()
            .map(|element| DomChip::new(element, &config.chip_attribute, &config.active_class))
            .collect();
        let chip_elements: Vec<HtmlElement> =
            chips.iter().map(|chip| chip.element().clone()).collect();

        let animator = CssAnimator::new(window, config.move_transition.clone());
        let controller = Rc::new(RefCell::new(FilterController::new(tiles, chips, animator)));
        controller.borrow_mut().initialize();

        for (index, element) in chip_elements.iter().enumerate() {
            bind_chip(&controller, index, element)?;
        }

        let menu = Rc::new(MenuController::new(root, config));
        menu.bind()?;

        log::info!(
            "gallery mounted: {} tiles, {} chips, {} headers",
            controller.borrow().tiles().len(),
            chip_elements.len(),
            menu.headers().len()
        );
        Ok(Self { controller, menu })
    }

    /// Same as activating a chip for `category:value`.
    pub fn toggle(&self, category: &str, value: &str) {
        with_controller(&self.controller, |controller| {
            controller.toggle(category, value);
        });
    }

    /// Copy of the current filter state.
    pub fn state(&self) -> FilterState {
        self.controller.borrow().state().clone()
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.controller.borrow().visible_indices()
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }
}

fn with_controller(controller: &Rc<RefCell<Controller>>, f: impl FnOnce(&mut Controller)) {
    match controller.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => log::warn!("toggle while a toggle is running; ignored"),
    }
}

fn activate(controller: &Rc<RefCell<Controller>>, index: usize) {
    with_controller(controller, |controller| {
        if controller.activate_chip(index).is_none() {
            log::debug!("chip {index} has no filter");
        }
    });
}

fn bind_chip(
    controller: &Rc<RefCell<Controller>>,
    index: usize,
    element: &HtmlElement,
) -> Result<(), GalleryError> {
    element.set_tab_index(0);
    element.set_attribute("role", "button")?;

    let c = Rc::clone(controller);
    listen(element, "click", move |_: Event| activate(&c, index))?;

    let c = Rc::clone(controller);
    listen(element, "keydown", move |event: KeyboardEvent| {
        if is_activation_key(&event.key()) {
            event.prevent_default();
            activate(&c, index);
        }
    })
}
