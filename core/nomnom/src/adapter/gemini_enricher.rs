//! Gemini による料理メタデータ生成アダプタ
//!
//! 応答は信頼しない入力として扱い、固定スキーマ（3 つの必須フィールド、
//! 分類は閉じた列挙）に対して検証してから使う。形が合わなければ「結果なし」。

use crate::domain::{DishCategory, DishDetails};
use crate::ports::outbound::DishEnricher;
use common::error::Error;
use common::llm::GeminiClient;
use serde_json::{json, Value};

/// GeminiClient を使う DishEnricher 実装
pub struct GeminiDishEnricher {
    client: GeminiClient,
}

impl GeminiDishEnricher {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    fn prompt(dish_name: &str) -> String {
        format!(
            "Generate a cute, appetizing, and short description (max 20 words) for a \
             Chinese home-cooked dish named \"{}\".\n\
             Also select a single best-fit emoji for it, and categorize it.\n\
             Output in JSON format.",
            dish_name
        )
    }

    fn response_schema() -> Value {
        let categories: Vec<&str> = DishCategory::ALL.iter().map(|c| c.label()).collect();
        json!({
            "type": "OBJECT",
            "properties": {
                "description": {
                    "type": "STRING",
                    "description": "A cute 1-sentence description in Chinese"
                },
                "emoji": {
                    "type": "STRING",
                    "description": "A single emoji representing the food"
                },
                "category": {
                    "type": "STRING",
                    "enum": categories,
                    "description": "The category of the dish"
                }
            },
            "required": ["description", "emoji", "category"]
        })
    }

    /// 応答 JSON を検証して DishDetails にする。形が合わなければ None。
    fn details_from_value(value: &Value) -> Option<DishDetails> {
        let description = value["description"].as_str()?.trim();
        let emoji = value["emoji"].as_str()?.trim();
        let category = DishCategory::from_label(value["category"].as_str()?)?;
        if description.is_empty() || emoji.is_empty() {
            return None;
        }
        Some(DishDetails {
            description: description.to_string(),
            emoji: emoji.to_string(),
            category,
        })
    }
}

impl DishEnricher for GeminiDishEnricher {
    fn generate(&self, dish_name: &str) -> Result<Option<DishDetails>, Error> {
        let value = self
            .client
            .generate_json(&Self::prompt(dish_name), Self::response_schema())?;
        Ok(value.as_ref().and_then(Self::details_from_value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_details_from_valid_value() {
        let v = json!({
            "description": "外酥里嫩，酸甜开胃！",
            "emoji": "🍖",
            "category": "荤菜"
        });
        let details = GeminiDishEnricher::details_from_value(&v).unwrap();
        assert_eq!(details.description, "外酥里嫩，酸甜开胃！");
        assert_eq!(details.emoji, "🍖");
        assert_eq!(details.category, DishCategory::Meat);
    }

    #[test]
    fn test_details_missing_field_is_none() {
        let v = json!({ "description": "好吃", "emoji": "🍜" });
        assert!(GeminiDishEnricher::details_from_value(&v).is_none());
    }

    #[test]
    fn test_details_unknown_category_is_none() {
        let v = json!({
            "description": "好吃",
            "emoji": "🍜",
            "category": "甜品"
        });
        assert!(GeminiDishEnricher::details_from_value(&v).is_none());
    }

    #[test]
    fn test_details_wrong_types_are_none() {
        let v = json!({
            "description": 42,
            "emoji": "🍜",
            "category": "主食"
        });
        assert!(GeminiDishEnricher::details_from_value(&v).is_none());
    }

    #[test]
    fn test_schema_lists_all_categories() {
        let schema = GeminiDishEnricher::response_schema();
        let labels = schema["properties"]["category"]["enum"].as_array().unwrap();
        assert_eq!(labels.len(), 5);
        assert!(labels.iter().any(|l| l == "素菜"));
    }

    #[test]
    fn test_prompt_embeds_dish_name() {
        let p = GeminiDishEnricher::prompt("糖醋里脊");
        assert!(p.contains("\"糖醋里脊\""));
        assert!(p.contains("JSON"));
    }
}
