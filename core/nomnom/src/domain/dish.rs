//! 料理（Dish）と分類
//!
//! dishes.json に保存される形そのままの構造体。フィールド名は既存データとの
//! 互換のため imageUrl のみ camelCase。

use common::domain::DishId;
use serde::{Deserialize, Serialize};

/// 説明が空のときに使うプレースホルダ
pub const DEFAULT_DESCRIPTION: &str = "暂无描述";

/// 絵文字が空のときに使うデフォルト
pub const DEFAULT_EMOJI: &str = "🥘";

/// 料理の分類（閉じた列挙）。表示・保存とも中国語ラベルを使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DishCategory {
    #[serde(rename = "荤菜")]
    Meat,
    #[serde(rename = "素菜")]
    Veggie,
    #[serde(rename = "汤羹")]
    Soup,
    #[serde(rename = "主食")]
    Staple,
    #[serde(rename = "小吃")]
    Snack,
}

impl DishCategory {
    /// 全分類（表示順）
    pub const ALL: [DishCategory; 5] = [
        DishCategory::Meat,
        DishCategory::Veggie,
        DishCategory::Soup,
        DishCategory::Staple,
        DishCategory::Snack,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DishCategory::Meat => "荤菜",
            DishCategory::Veggie => "素菜",
            DishCategory::Soup => "汤羹",
            DishCategory::Staple => "主食",
            DishCategory::Snack => "小吃",
        }
    }

    /// 中国語ラベルから分類を得る（未知のラベルは None）
    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == s)
    }
}

impl std::fmt::Display for DishCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// AI が提案する料理メタデータ（説明・絵文字・分類）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishDetails {
    pub description: String,
    pub emoji: String,
    pub category: DishCategory,
}

/// カタログの 1 エントリ
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// カタログ全体で一意。作成時に採番され、以後変更しない。
    pub id: DishId,
    pub name: String,
    pub category: DishCategory,
    pub description: String,
    pub emoji: String,
    /// data: URI の写真。あれば表示は絵文字より優先（テキスト出力では使わない）
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none", default)]
    pub image_url: Option<String>,
    /// 自由ラベル。宣言のみで現状の挙動では未使用。
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub tags: Option<Vec<String>>,
}

impl Dish {
    /// 新しい料理を作る。空の説明・絵文字にはデフォルトを充てる。
    pub fn new(
        id: DishId,
        name: impl Into<String>,
        category: DishCategory,
        description: impl Into<String>,
        emoji: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        let description = description.into();
        let description = if description.trim().is_empty() {
            DEFAULT_DESCRIPTION.to_string()
        } else {
            description
        };
        let emoji = emoji.into();
        let emoji = if emoji.trim().is_empty() {
            DEFAULT_EMOJI.to_string()
        } else {
            emoji
        };
        Self {
            id,
            name: name.into(),
            category,
            description,
            emoji,
            image_url,
            tags: None,
        }
    }
}
