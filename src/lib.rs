//! Browser behavior for a filterable image gallery.
//!
//! The filter state, visibility rules, layout diffing and hover math are plain
//! Rust and build on any target. The DOM bindings live in [`wasm`] and are
//! only compiled for `wasm32`.

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod hover;
pub mod visibility;

pub use config::GalleryConfig;
pub use controller::{Animator, Chip, FilterController, Tile};
pub use error::GalleryError;
pub use filter::{FilterSelector, FilterState, Toggle};
pub use geometry::{Move, Offset, Rect, Snapshot, Transition};
pub use visibility::{is_visible, Tagged};

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;
    use web_sys::Document;

    use crate::config::{GalleryConfig, CONFIG_ELEMENT_ID};
    use crate::error::GalleryError;

    mod animator;
    mod dom;
    mod gallery;
    mod hover;
    mod loader;
    mod menu;

    pub use gallery::Gallery;
    pub use menu::MenuController;

    fn read_config(document: &Document) -> Result<GalleryConfig, GalleryError> {
        match document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        {
            Some(json) => GalleryConfig::from_json(&json),
            None => Ok(GalleryConfig::default()),
        }
    }

    fn mount(document: &Document, config: &GalleryConfig) {
        let Some(root) = document.document_element() else {
            return;
        };
        // Event listeners keep the gallery alive for the page lifetime.
        if let Err(err) = Gallery::mount(&root, config) {
            log::error!("gallery setup failed: {err}");
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let window = web_sys::window().ok_or(GalleryError::NoWindow)?;
        let document = window.document().ok_or(GalleryError::NoDocument)?;

        let parsed = read_config(&document);
        let level = parsed
            .as_ref()
            .map(|config| config.log_level)
            .unwrap_or_default();
        if let Some(level) = level.to_level() {
            // Already set when several modules share the page.
            let _ = console_log::init_with_level(level);
        }
        let config = parsed.unwrap_or_else(|err| {
            log::warn!("{err}; using defaults");
            GalleryConfig::default()
        });

        if document.ready_state() == "loading" {
            let doc = document.clone();
            let on_ready = Closure::once_into_js(move || mount(&doc, &config));
            document.add_event_listener_with_callback(
                "DOMContentLoaded",
                on_ready.unchecked_ref(),
            )?;
        } else {
            mount(&document, &config);
        }
        Ok(())
    }
}
