use serde_json::Value;

use super::item_types::Item;
use crate::error::StashError;

/// Parse the contents of one stash export into its items.
///
/// The file must hold a single JSON array of item objects. A leading UTF-8 byte
/// order mark is ignored since text exports saved on Windows often carry one.
pub fn parse_stash(contents: &str) -> Result<Vec<Item>, StashError> {
    let contents = contents.trim_start_matches('\u{feff}');

    match serde_json::from_str::<Vec<Item>>(contents) {
        Ok(items) => Ok(items),
        Err(err) if err.is_data() => match serde_json::from_str::<Value>(contents) {
            Ok(value) if !value.is_array() => Err(StashError::NotAnArray(json_kind(&value))),
            _ => Err(err.into()),
        },
        Err(err) => Err(err.into()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
