//! 追加フォームのドラフトと AI 生成の状態機械
//!
//! 状態は Idle → Requesting → (結果適用) → Idle。1 つのドラフトにつき
//! 同時に 1 リクエストまで。閉じられた・作り直されたドラフトに遅れて
//! 届いた結果は適用しない（apply が Requesting 以外では何もしない）。

use super::dish::{DishCategory, DishDetails, DEFAULT_EMOJI};
use common::error::Error;

/// ドラフトの AI 生成状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Idle,
    Requesting,
}

/// 追加フォームのドラフト
#[derive(Debug, Clone)]
pub struct DishDraft {
    pub name: String,
    pub category: DishCategory,
    pub description: String,
    pub emoji: String,
    state: DraftState,
}

impl DishDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: DishCategory::Meat,
            description: String::new(),
            emoji: DEFAULT_EMOJI.to_string(),
            state: DraftState::Idle,
        }
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    /// AI 生成を開始する。既に生成中なら拒否（トリガーの二重押し防止）。
    pub fn begin_request(&mut self) -> Result<(), Error> {
        if self.state == DraftState::Requesting {
            return Err(Error::invalid_argument("AI is already generating for this draft"));
        }
        self.state = DraftState::Requesting;
        Ok(())
    }

    /// 生成結果をフォームに反映して Idle に戻す。
    /// Requesting でなければ古い結果とみなして何も適用しない。
    pub fn apply(&mut self, details: &DishDetails) -> bool {
        if self.state != DraftState::Requesting {
            return false;
        }
        self.description = details.description.clone();
        self.emoji = details.emoji.clone();
        self.category = details.category;
        self.state = DraftState::Idle;
        true
    }

    /// 結果なし・失敗でフォームは触らず Idle に戻す
    pub fn settle(&mut self) {
        self.state = DraftState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> DishDetails {
        DishDetails {
            description: "外酥里嫩，酸甜开胃！".to_string(),
            emoji: "🍖".to_string(),
            category: DishCategory::Meat,
        }
    }

    #[test]
    fn test_request_cycle_returns_to_idle() {
        let mut draft = DishDraft::new("糖醋里脊");
        assert_eq!(draft.state(), DraftState::Idle);
        draft.begin_request().unwrap();
        assert_eq!(draft.state(), DraftState::Requesting);
        assert!(draft.apply(&details()));
        assert_eq!(draft.state(), DraftState::Idle);
        assert_eq!(draft.description, "外酥里嫩，酸甜开胃！");
        assert_eq!(draft.emoji, "🍖");
    }

    #[test]
    fn test_double_begin_is_rejected() {
        let mut draft = DishDraft::new("糖醋里脊");
        draft.begin_request().unwrap();
        let err = draft.begin_request().unwrap_err();
        assert!(err.is_usage());
        // 失敗しても生成中のまま
        assert_eq!(draft.state(), DraftState::Requesting);
    }

    #[test]
    fn test_stale_result_is_not_applied() {
        let mut draft = DishDraft::new("糖醋里脊");
        // リクエストしていないドラフトに結果が届いても無視
        assert!(!draft.apply(&details()));
        assert_eq!(draft.description, "");
        assert_eq!(draft.emoji, DEFAULT_EMOJI);
    }

    #[test]
    fn test_settle_after_failure_keeps_fields() {
        let mut draft = DishDraft::new("糖醋里脊");
        draft.description = "手写的描述".to_string();
        draft.begin_request().unwrap();
        draft.settle();
        assert_eq!(draft.state(), DraftState::Idle);
        assert_eq!(draft.description, "手写的描述");
        // 失敗後は再トリガーできる
        draft.begin_request().unwrap();
    }
}
