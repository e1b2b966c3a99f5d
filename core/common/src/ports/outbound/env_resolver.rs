//! 環境変数解決の Outbound ポート
//!
//! usecase / wiring は環境変数に直接依存せず、この trait 経由で取得する。

use crate::domain::HomeDir;
use crate::error::Error;

/// 環境変数からの設定解決の抽象
pub trait EnvResolver: Send + Sync {
    /// ホームディレクトリを解決する
    ///
    /// NOMNOM_HOME → $XDG_CONFIG_HOME/nomnom → ~/.config/nomnom の順。
    fn resolve_home_dir(&self) -> Result<HomeDir, Error>;

    /// Gemini の API キー。未設定なら None（AI 機能は静かに無効化される）
    fn gemini_api_key(&self) -> Option<String>;
}
