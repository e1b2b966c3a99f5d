//! カタログ（料理の全量、並びは新しい順）

use super::dish::{Dish, DishCategory};
use common::domain::DishId;

/// 料理カタログ。追加は先頭に積む（新しい順）。
///
/// 変更（add / remove）のたびに呼び出し側が全量を永続化する前提で、
/// この型自体は I/O を持たない。
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    pub fn new(dishes: Vec<Dish>) -> Self {
        Self { dishes }
    }

    /// 保存データが無いときに使う初期カタログ
    pub fn seed() -> Self {
        Self::new(vec![
            Dish::new(
                DishId::new("1"),
                "红烧肉",
                DishCategory::Meat,
                "肥而不腻，入口即化，家的味道！",
                "🥓",
                None,
            ),
            Dish::new(
                DishId::new("2"),
                "清炒时蔬",
                DishCategory::Veggie,
                "清脆爽口，健康解腻。",
                "🥬",
                None,
            ),
            Dish::new(
                DishId::new("3"),
                "番茄蛋汤",
                DishCategory::Soup,
                "酸酸甜甜，开胃又暖胃。",
                "🍅",
                None,
            ),
            Dish::new(
                DishId::new("4"),
                "可乐鸡翅",
                DishCategory::Meat,
                "小朋友的最爱，甜咸适中。",
                "🍗",
                None,
            ),
        ])
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn get(&self, id: &DishId) -> Option<&Dish> {
        self.dishes.iter().find(|d| &d.id == id)
    }

    pub fn get_mut(&mut self, id: &DishId) -> Option<&mut Dish> {
        self.dishes.iter_mut().find(|d| &d.id == id)
    }

    pub fn contains(&self, id: &DishId) -> bool {
        self.get(id).is_some()
    }

    /// 先頭に追加する。id の一意性は採番側（IdGenerator）が保証する。
    pub fn add(&mut self, dish: Dish) {
        self.dishes.insert(0, dish);
    }

    /// id が一致する料理を取り除く。無ければ何もしない（エラーではない）。
    pub fn remove(&mut self, id: &DishId) -> bool {
        let before = self.dishes.len();
        self.dishes.retain(|d| &d.id != id);
        self.dishes.len() != before
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_four_dishes_in_order() {
        let catalog = Catalog::seed();
        let names: Vec<&str> = catalog.dishes().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["红烧肉", "清炒时蔬", "番茄蛋汤", "可乐鸡翅"]);
    }

    #[test]
    fn test_add_prepends() {
        let mut catalog = Catalog::seed();
        let dish = Dish::new(DishId::new("n1"), "糖醋里脊", DishCategory::Meat, "", "", None);
        catalog.add(dish);
        assert_eq!(catalog.dishes()[0].name, "糖醋里脊");
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut catalog = Catalog::seed();
        assert!(!catalog.remove(&DishId::new("no-such-id")));
        assert_eq!(catalog.len(), 4);
        assert!(catalog.remove(&DishId::new("2")));
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.contains(&DishId::new("2")));
    }
}
