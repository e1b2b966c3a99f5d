//! Outbound ポートの標準アダプタ

pub mod console_notice;
pub mod file_catalog_store;
pub mod gemini_enricher;
pub mod system_clipboard;
pub mod weixin_notifier;

pub use console_notice::ConsoleNotice;
pub use file_catalog_store::FileCatalogStore;
pub use gemini_enricher::GeminiDishEnricher;
pub use system_clipboard::SystemClipboard;
pub use weixin_notifier::WeixinNotifier;
