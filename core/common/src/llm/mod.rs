//! LLMプロバイダ
//!
//! 現状は Gemini の構造化生成（JSON モード）のみ。呼び出し側はアダプタ越しに使う。

pub mod gemini;

pub use gemini::GeminiClient;
