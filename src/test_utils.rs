//! Shared test utilities for d2stash
//!
//! This module provides common fixtures, proptest strategies and helper
//! functions used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::path::PathBuf;

    use proptest::prelude::*;
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::Config;
    use crate::error::StashError;
    use crate::item::{Item, Quality, Stat};
    use crate::stash::FileLoad;

    /// The two-item Armor fixture: a plain Normal armor and a Unique set armor
    pub fn armor_scenario() -> Vec<Item> {
        let plain = Item::new("Armor", Quality::Normal, 1);
        let mut set_piece = Item::new("Armor", Quality::Unique, 50);
        set_piece.set = Some("Tal Rasha".to_string());
        vec![plain, set_piece]
    }

    /// A small mixed stash with names, sockets, stats and a set item
    pub fn mixed_stash() -> Vec<Item> {
        let mut shako = Item::new("Shako", Quality::Unique, 62);
        shako.name = Some("Harlequin Crest".to_string());
        shako.defense = Some(141.into());
        shako.stats = vec![Stat::value("to all skills", 2.into())];

        let mut flail = Item::new("Flail", Quality::Normal, 30);
        flail.sockets = Some(4.into());
        flail.is_ethereal = true;

        let mut amulet = Item::new("Amulet", Quality::Set, 70);
        amulet.name = Some("Tal Rasha's Adjudication".to_string());
        amulet.set = Some("Tal Rasha's Wrappings".to_string());

        let ring = Item::new("Ring", Quality::Magic, 45);

        vec![shako, flail, amulet, ring]
    }

    /// One good stash and one that failed to parse
    pub fn test_loads() -> Vec<FileLoad> {
        vec![
            FileLoad::new(PathBuf::from("/stashes/shared.json"), Ok(mixed_stash())),
            FileLoad::new(
                PathBuf::from("/stashes/broken.json"),
                Err(StashError::InvalidJson("EOF while parsing a list".to_string())),
            ),
        ]
    }

    /// Helper to create App with already-loaded stashes and default config
    pub fn test_app(loads: Vec<FileLoad>) -> App {
        App::with_stashes(loads, &Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn arb_quality() -> impl Strategy<Value = Quality> {
        prop::sample::select(Quality::ALL.to_vec())
    }

    pub fn arb_item() -> impl Strategy<Value = Item> {
        (
            prop::sample::select(vec!["Armor", "Ring", "Amulet", "Grand Charm", "Monarch"]),
            arb_quality(),
            1i64..=99,
            prop::option::of(0u32..=6),
            prop::option::of(prop::sample::select(vec![
                "Tal Rasha",
                "Immortal King",
                "Sigon's Complete Steel",
            ])),
            any::<bool>(),
        )
            .prop_map(|(item_type, quality, i_level, sockets, set, ethereal)| {
                let mut item = Item::new(item_type, quality, i_level);
                item.sockets = sockets.map(Into::into);
                item.set = set.map(str::to_string);
                item.is_ethereal = ethereal;
                item
            })
    }

    pub fn arb_items() -> impl Strategy<Value = Vec<Item>> {
        prop::collection::vec(arb_item(), 0..40)
    }
}
