//! システムクリップボードへの書き込み（arboard を委譲）

use crate::ports::outbound::Clipboard;
use common::error::Error;

/// arboard を使う Clipboard 実装
#[derive(Debug, Clone, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<(), Error> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| Error::internal(format!("Clipboard unavailable: {}", e)))?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| Error::internal(format!("Clipboard write failed: {}", e)))
    }
}
