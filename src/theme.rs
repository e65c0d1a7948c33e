//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Sanctuary - item-quality colors over a dark stone background

use ratatui::style::{Color, Modifier, Style};

use crate::item::Quality;

/// Core color palette - shared base colors.
/// Only use these directly when a component truly shares the same color.
/// Otherwise, define component-specific constants that reference these.
pub mod palette {
    use super::*;

    // Text colors
    pub const TEXT: Color = Color::Rgb(228, 224, 214);
    pub const TEXT_DIM: Color = Color::Rgb(98, 94, 88);
    pub const TEXT_MUTED: Color = Color::Rgb(140, 134, 124);

    // Background colors - dark stone
    pub const BG_DARK: Color = Color::Rgb(22, 20, 18);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(52, 46, 40);

    // Semantic colors
    pub const ERROR: Color = Color::Rgb(214, 76, 64);

    // Accent colors
    pub const GOLD: Color = Color::Rgb(199, 179, 119);
    pub const GREEN: Color = Color::Rgb(0, 200, 90);
    pub const BLUE: Color = Color::Rgb(105, 105, 255);
    pub const RED: Color = Color::Rgb(214, 76, 64);
    pub const ORANGE: Color = Color::Rgb(255, 168, 0);
    pub const CYAN: Color = Color::Rgb(92, 200, 220);
}

/// Item name colors, matching the in-game rarity colors
pub mod quality {
    use super::*;

    pub const MAGIC: Color = palette::BLUE;
    pub const UNIQUE: Color = palette::GOLD;
    pub const SET: Color = palette::GREEN;
    pub const NORMAL: Color = palette::TEXT;

    pub fn color(quality: Quality) -> Color {
        match quality {
            Quality::Magic => MAGIC,
            Quality::Unique => UNIQUE,
            Quality::Set => SET,
            Quality::Normal => NORMAL,
        }
    }
}

/// Stash pane styles
pub mod stash {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::GOLD;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Color = palette::GOLD;
    pub const LOADING: Color = palette::ORANGE;

    // Stash headers
    pub const HEADER: Style = Style::new()
        .fg(Color::Rgb(228, 224, 214))
        .add_modifier(Modifier::BOLD);
    pub const HEADER_HINT: Color = palette::TEXT_MUTED;
    pub const LOAD_ERROR: Color = palette::ERROR;

    // Item details
    pub const ITEM_TYPE: Color = palette::TEXT_MUTED;
    pub const DETAIL: Color = Color::Rgb(180, 176, 168);
    pub const STAT: Color = palette::BLUE;
    pub const STAT_VALUE: Color = palette::TEXT;
    pub const PROC: Color = palette::CYAN;
    pub const CORRUPTED: Color = palette::RED;
    pub const RANGE: Color = palette::TEXT_DIM;
    pub const ETHEREAL_MODIFIER: Modifier = Modifier::ITALIC;

    // Cursor
    pub const CURSOR_BG: Color = palette::BG_HIGHLIGHT;
    pub const CURSOR_INDICATOR: Color = palette::ORANGE;
    pub const EMPTY: Color = palette::TEXT_DIM;
}

/// Filter menu styles
pub mod filter {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::GOLD;
    pub const BORDER_UNFOCUSED: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const ITEM_COUNT: Style = Style::new()
        .fg(Color::Rgb(199, 179, 119))
        .add_modifier(Modifier::BOLD);
    pub const SECTION: Style = Style::new()
        .fg(Color::Rgb(228, 224, 214))
        .add_modifier(Modifier::BOLD);
    pub const CHECKED: Color = palette::GREEN;
    pub const UNCHECKED: Color = palette::TEXT_DIM;
    pub const LABEL: Color = palette::TEXT;
    pub const LABEL_HIDDEN: Color = palette::TEXT_MUTED;
    pub const COUNT: Color = palette::TEXT_DIM;
    pub const EMPTY: Color = palette::TEXT_DIM;
    pub const CURSOR_BG: Color = palette::BG_HIGHLIGHT;
}

/// Help popup styles
pub mod help {
    use super::*;

    pub const BORDER: Color = palette::GOLD;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new()
        .fg(Color::Rgb(199, 179, 119))
        .add_modifier(Modifier::BOLD);
    pub const SECTION_HEADER: Style = Style::new()
        .fg(Color::Rgb(255, 168, 0))
        .add_modifier(Modifier::BOLD);
    pub const KEY: Style = Style::new()
        .fg(Color::Rgb(92, 200, 220))
        .add_modifier(Modifier::BOLD);
    pub const DESCRIPTION: Color = palette::TEXT;
    pub const FOOTER: Color = palette::TEXT_DIM;
}

/// Bottom help line styles
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Notification overlay styles
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = Color::Rgb(60, 56, 50);
    pub const INFO_BORDER: Color = palette::TEXT_MUTED;

    pub const WARNING_FG: Color = Color::Black;
    pub const WARNING_BG: Color = palette::ORANGE;
    pub const WARNING_BORDER: Color = palette::ORANGE;

    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = palette::RED;
    pub const ERROR_BORDER: Color = Color::Rgb(240, 120, 110);
}
