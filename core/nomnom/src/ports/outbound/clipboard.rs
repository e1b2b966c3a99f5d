//! クリップボードの Outbound ポート

use common::error::Error;

/// システムクリップボードへのテキスト書き込み抽象
pub trait Clipboard: Send + Sync {
    fn write_text(&self, text: &str) -> Result<(), Error>;
}
