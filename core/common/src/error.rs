//! エラーハンドリング
//!
//! 全レイヤー共通のエラー型。メッセージと sysexits 互換の終了コードを持つ。

use thiserror::Error as ThisError;

/// 共通エラー型
///
/// バリアントは発生源の分類（引数・環境・HTTP・JSON・I/O・内部）を表し、
/// `exit_code()` で sysexits 互換の終了コードに写像する。
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// 引数不正（使い方の誤り）
    #[error("{0}")]
    InvalidArgument(String),

    /// 環境変数・設定の不備
    #[error("{0}")]
    Env(String),

    /// HTTP / 外部サービス呼び出しの失敗
    #[error("{0}")]
    Http(String),

    /// JSON の生成・解析の失敗
    #[error("{0}")]
    Json(String),

    /// ファイル I/O の失敗
    #[error("{0}")]
    Io(String),

    /// その他の内部エラー
    #[error("{0}")]
    Internal(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// sysexits 互換の終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Env(_) => 78,
            Self::Http(_) => 69,
            Self::Json(_) => 65,
            Self::Io(_) => 74,
            Self::Internal(_) => 70,
        }
    }

    /// 使い方の誤りか（usage を表示すべきか）
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(Error::invalid_argument("x").exit_code(), 64);
        assert_eq!(Error::env("x").exit_code(), 78);
        assert_eq!(Error::http("x").exit_code(), 69);
        assert_eq!(Error::json("x").exit_code(), 65);
        assert_eq!(Error::io_msg("x").exit_code(), 74);
        assert_eq!(Error::internal("x").exit_code(), 70);
    }

    #[test]
    fn test_is_usage() {
        assert!(Error::invalid_argument("bad flag").is_usage());
        assert!(!Error::io_msg("disk").is_usage());
    }

    #[test]
    fn test_display_is_message_only() {
        let e = Error::http("Gemini API error: 503");
        assert_eq!(e.to_string(), "Gemini API error: 503");
    }
}
