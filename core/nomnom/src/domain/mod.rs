//! ドメイン型とドメインロジック
//!
//! カタログ・選択・メニュー文面・ドラフトなど、I/O を持たない純粋な部分。

pub mod catalog;
pub mod command;
pub mod dish;
pub mod draft;
pub mod filter;
pub mod menu_text;
pub mod photo;
pub mod selection;

pub use catalog::Catalog;
pub use command::AppCommand;
pub use dish::{Dish, DishCategory, DishDetails};
pub use draft::{DishDraft, DraftState};
pub use filter::CategoryFilter;
pub use selection::Selection;
