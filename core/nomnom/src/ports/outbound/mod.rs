//! Outbound ポート: アプリが外界（保存・AI・クリップボード・通知）を使うための trait

pub mod catalog_store;
pub mod chef_notifier;
pub mod clipboard;
pub mod dish_enricher;
pub mod notice;

pub use catalog_store::CatalogStore;
pub use chef_notifier::ChefNotifier;
pub use clipboard::Clipboard;
pub use dish_enricher::DishEnricher;
pub use notice::{Notice, NoticeSink};
