//! Terminal clipboard
//!
//! OSC 52 writes the clipboard through the terminal itself, which
//! also works over SSH. Terminals that ignore the sequence fail
//! silently; the copy notice is still shown.

use std::io::Write;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use askdeck_core::{ClipboardPort, CoreError, CoreResult};

/// OSC 52 implementation of [`ClipboardPort`]
pub struct Osc52Clipboard;

impl ClipboardPort for Osc52Clipboard {
    fn copy_text(&self, text: &str) -> CoreResult<()> {
        let encoded = STANDARD.encode(text.as_bytes());
        let mut stdout = std::io::stdout();
        stdout
            .write_all(format!("\x1b]52;c;{encoded}\x07").as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| CoreError::ClipboardError(e.to_string()))
    }
}
