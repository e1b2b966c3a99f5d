//! 分類フィルタ（セッション内のビュー状態）

use super::dish::{Dish, DishCategory};

/// 一覧表示の分類フィルタ。カタログや選択の中身には影響しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(DishCategory),
}

impl CategoryFilter {
    /// `全部` または分類ラベルからパースする
    pub fn parse(s: &str) -> Option<Self> {
        if s == "全部" {
            return Some(Self::All);
        }
        DishCategory::from_label(s).map(Self::Only)
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => dish.category == *category,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "全部",
            Self::Only(category) => category.label(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;

    #[test]
    fn test_parse() {
        assert_eq!(CategoryFilter::parse("全部"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("素菜"),
            Some(CategoryFilter::Only(DishCategory::Veggie))
        );
        assert_eq!(CategoryFilter::parse("甜品"), None);
    }

    #[test]
    fn test_filter_on_seed_catalog() {
        let catalog = Catalog::seed();
        let veggie = CategoryFilter::Only(DishCategory::Veggie);
        let hits: Vec<&str> = catalog
            .dishes()
            .iter()
            .filter(|d| veggie.matches(d))
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(hits, ["清炒时蔬"]);
    }
}
