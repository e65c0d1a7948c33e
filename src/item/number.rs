//! Display helpers for JSON numbers kept verbatim from an export

use serde_json::Number;

/// Render a number the way the export's viewer would: integral floats lose
/// their `.0`, everything else prints as written.
pub fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() => value.to_string(),
        _ => number.to_string(),
    }
}

pub fn is_zero(number: &Number) -> bool {
    number.as_f64() == Some(0.0)
}
