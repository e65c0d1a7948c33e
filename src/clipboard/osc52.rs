//! OSC 52 clipboard backend
//!
//! Asks the terminal emulator to set the clipboard, which also works over SSH.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

pub fn copy(text: &str) -> ClipboardResult {
    let mut stdout = io::stdout();
    stdout
        .write_all(encode_osc52(text).as_bytes())
        .map_err(|_| ClipboardError::WriteError)?;
    stdout.flush().map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`, where `c` selects the clipboard buffer
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PREFIX: &str = "\x1b]52;c;";

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_payload_decodes_to_input(text in ".*") {
            let encoded = encode_osc52(&text);

            prop_assert!(encoded.starts_with(PREFIX));
            prop_assert!(encoded.ends_with('\x07'));

            let payload = &encoded[PREFIX.len()..encoded.len() - 1];
            let decoded = STANDARD.decode(payload).unwrap();
            prop_assert_eq!(String::from_utf8(decoded).unwrap(), text);
        }
    }

    #[test]
    fn test_encode_simple() {
        // "hello" in base64 is "aGVsbG8="
        assert_eq!(encode_osc52("hello"), "\x1b]52;c;aGVsbG8=\x07");
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_osc52(""), "\x1b]52;c;\x07");
    }
}
