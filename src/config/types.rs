// Configuration type definitions

use serde::Deserialize;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Layout configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_filter_menu_width")]
    pub filter_menu_width: u16,
}

pub const DEFAULT_FILTER_MENU_WIDTH: u16 = 34;

fn default_filter_menu_width() -> u16 {
    DEFAULT_FILTER_MENU_WIDTH
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            filter_menu_width: DEFAULT_FILTER_MENU_WIDTH,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}
