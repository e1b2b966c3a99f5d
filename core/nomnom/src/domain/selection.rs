//! 今日のメニュー選択（セッション内のみ、永続化しない）

use common::domain::DishId;
use std::collections::BTreeSet;

/// 選択中の料理 id 集合
///
/// カタログ側で料理が削除されたら、呼び出し側が同じステップで
/// ここからも id を取り除く（宙ぶらりんの id を残さない）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<DishId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// id があれば外し、無ければ加える。戻り値は「今選択されているか」。
    pub fn toggle(&mut self, id: DishId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn remove(&mut self, id: &DishId) -> bool {
        self.ids.remove(id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &DishId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &DishId> {
        self.ids.iter()
    }
}
