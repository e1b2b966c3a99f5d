//! nomnom共通ライブラリ
//!
//! `nomnom`バイナリ（および同系ツール）で共有される基盤を提供します。

/// 標準アダプタ（FileSystem / Clock / IdGenerator / EnvResolver / Log の実装）
pub mod adapter;

/// ドメイン型（Newtype）
pub mod domain;

/// エラーハンドリング
pub mod error;

/// LLMプロバイダ（Gemini 構造化生成）
pub mod llm;

/// Outbound ポート定義
pub mod ports;
