//! トースト通知の Outbound ポート
//!
//! 送信フローの結果をユーザーに見せるためのチャネル。表示（stdout）と
//! テスト（記録）を差し替えられるようにする。

use common::error::Error;

/// ユーザー向けの一時通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// コピー成功、メッセージアプリへ向かう
    MenuCopied,
    /// コピー失敗（スクリーンショットを促す）
    CopyFailed,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::MenuCopied => "菜单已复制！正在前往微信... 🚀",
            Notice::CopyFailed => "复制失败，请截图发送～",
        }
    }
}

/// 通知を受け取る Sink（表示・記録の責務を分離）
pub trait NoticeSink: Send {
    fn notice(&mut self, notice: &Notice) -> Result<(), Error>;
}
