//! ユースケース（セッション状態と操作）

pub mod menu;

pub use menu::{AddDishRequest, AddedDish, AiApplied, MenuUseCase, NotifyOutcome};
