//! Page configuration.
//!
//! Every field has a default matching the stock gallery markup, so a page only
//! needs to embed a `<script type="application/json" id="gallery-config">`
//! block to override what differs.

use serde::Deserialize;

use crate::error::GalleryError;
use crate::hover::HoverParams;

/// Id of the optional element holding JSON overrides.
pub const CONFIG_ELEMENT_ID: &str = "gallery-config";

/// Log level setting for the console logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `None` when logging is disabled.
    pub fn to_level(self) -> Option<log::Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(log::Level::Error),
            LogLevel::Warn => Some(log::Level::Warn),
            LogLevel::Info => Some(log::Level::Info),
            LogLevel::Debug => Some(log::Level::Debug),
            LogLevel::Trace => Some(log::Level::Trace),
        }
    }
}

/// Text and font swapped on the side button.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SideButtonConfig {
    pub id: String,
    pub label_text: String,
    pub label_font: String,
    pub icon_class: String,
    pub icon_font: String,
}

impl Default for SideButtonConfig {
    fn default() -> Self {
        Self {
            id: "sideButton".into(),
            label_text: "Categories".into(),
            label_font: "typewriter".into(),
            icon_class: "fa-brands fa-fulcrum".into(),
            icon_font: "FontAwesome".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// Filterable gallery tiles.
    pub item_selector: String,
    /// Filter chips.
    pub chip_selector: String,
    /// `data-*` key on chips holding `category:value`.
    pub chip_attribute: String,
    /// Category headers whose parent opens and closes.
    pub header_selector: String,
    /// Images that get the loaded class once decoded.
    pub image_selector: String,
    /// Applied to active chips and open category groups.
    pub active_class: String,
    pub loaded_class: String,
    /// Inline `transition` used while relaxing a move.
    pub move_transition: String,
    pub hover: HoverParams,
    pub side_button: SideButtonConfig,
    pub log_level: LogLevel,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            item_selector: ".images".into(),
            chip_selector: ".sideSub".into(),
            chip_attribute: "filter".into(),
            header_selector: ".sideDom".into(),
            image_selector: ".imgcrop1".into(),
            active_class: "active".into(),
            loaded_class: "loaded".into(),
            move_transition: "transform 600ms ease".into(),
            hover: HoverParams::default(),
            side_button: SideButtonConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl GalleryConfig {
    pub fn from_json(json: &str) -> Result<Self, GalleryError> {
        Ok(serde_json::from_str(json)?)
    }
}
