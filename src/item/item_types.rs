use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use super::number::number_text;
use super::stat::Stat;

/// Rarity tier of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Magic,
    Unique,
    Set,
    Normal,
}

impl Quality {
    pub const ALL: [Quality; 4] = [
        Quality::Magic,
        Quality::Unique,
        Quality::Set,
        Quality::Normal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Magic => "Magic",
            Quality::Unique => "Unique",
            Quality::Set => "Set",
            Quality::Normal => "Normal",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Gem, rune or jewel sitting in one of an item's sockets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketItem {
    pub i_level: i64,
    pub quality: Quality,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_false"
    )]
    pub is_gem: bool,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_false"
    )]
    pub is_rune: bool,
}

/// One entry of a stash export.
///
/// Only `iLevel`, `quality` and `type` are required. Every other field may be
/// missing or `null`, and both read as absent. `defense` and `sockets` take
/// any JSON number and keep it as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub i_level: i64,
    pub quality: Quality,
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub stats: Vec<Stat>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sockets: Option<Number>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub socketed: Vec<SocketItem>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_false"
    )]
    pub is_ethereal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runeword: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_false"
    )]
    pub is_runeword: bool,
}

impl Item {
    /// Minimal item with only the required fields set
    pub fn new(item_type: &str, quality: Quality, i_level: i64) -> Self {
        Self {
            name: None,
            i_level,
            quality,
            item_type: item_type.to_string(),
            stats: Vec::new(),
            defense: None,
            sockets: None,
            socketed: Vec::new(),
            is_ethereal: false,
            set: None,
            runeword: None,
            is_runeword: false,
        }
    }

    /// Name shown in the stash pane, falling back to the item type
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.item_type)
    }

    /// Key used by the socket table and socket filter.
    ///
    /// A missing socket count and an explicit zero both map to `"0"`.
    pub fn socket_key(&self) -> String {
        self.sockets
            .as_ref()
            .map_or_else(|| "0".to_string(), number_text)
    }

    /// Set the item belongs to. An empty set name counts as no set.
    pub fn set_name(&self) -> Option<&str> {
        self.set.as_deref().filter(|set| !set.is_empty())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn is_false(value: &bool) -> bool {
    !*value
}

#[cfg(test)]
#[path = "item_types_tests.rs"]
mod item_types_tests;
