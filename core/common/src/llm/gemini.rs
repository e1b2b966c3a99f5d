//! Gemini 構造化生成クライアント
//!
//! generateContent を JSON モード（responseMimeType + responseSchema）で 1 回呼び、
//! 応答テキストを JSON としてパースして返す。ストリーミングもリトライもしない。

use crate::error::Error;
use serde_json::{json, Value};

/// デフォルトのモデル名
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini 構造化生成クライアント
///
/// API キーは wiring が環境変数から解決して渡す。キーが無い場合は
/// このクライアント自体を作らない（機能ごと無効化する）のが呼び出し側の契約。
pub struct GeminiClient {
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// 新しいクライアントを作成
    ///
    /// # Arguments
    /// * `api_key` - Gemini API キー
    /// * `model` - モデル名（省略時は `DEFAULT_MODEL`）
    pub fn new(api_key: impl Into<String>, model: Option<String>) -> Self {
        Self {
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_key: api_key.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// 構造化生成を 1 回実行する
    ///
    /// # Returns
    /// * `Ok(Some(Value))` - スキーマ通りのはずの JSON 応答（型検査は呼び出し側）
    /// * `Ok(None)` - 応答にテキストが無い / テキストが JSON として読めない
    /// * `Err(Error)` - HTTP・サービス側の失敗
    pub fn generate_json(&self, prompt: &str, response_schema: Value) -> Result<Option<Value>, Error> {
        let payload = Self::make_request_payload(prompt, response_schema);
        let request_json =
            serde_json::to_string(&payload).map_err(|e| Error::json(e.to_string()))?;
        let response_text = self.make_http_request(&request_json)?;
        Self::parse_json_text(&response_text)
    }

    /// リクエストペイロードを生成（JSON モード）
    fn make_request_payload(prompt: &str, response_schema: Value) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": response_schema
            }
        })
    }

    fn make_http_request(&self, request_json: &str) -> Result<String, Error> {
        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let client = reqwest::blocking::Client::new();
        let response = client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(request_json.to_string())
            .send()
            .map_err(|e| Error::http(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        let response_text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            // エラーレスポンスを解析してメッセージを抽出
            let error_msg = if let Ok(v) = serde_json::from_str::<Value>(&response_text) {
                v["error"]["message"]
                    .as_str()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| format!("HTTP {}: {}", status, response_text))
            } else {
                format!("HTTP {}: {}", status, response_text)
            };
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        Ok(response_text)
    }

    /// レスポンス本文から候補テキストを取り出し、JSON としてパースする
    fn parse_json_text(response_json: &str) -> Result<Option<Value>, Error> {
        let v: Value = serde_json::from_str(response_json)
            .map_err(|e| Error::json(format!("Failed to parse response JSON: {}", e)))?;

        // エラーチェック
        if let Some(error) = v.get("error") {
            let error_msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(Error::http(format!("Gemini API error: {}", error_msg)));
        }

        // テキストを抽出
        let text = v["candidates"][0]["content"]["parts"]
            .as_array()
            .and_then(|parts| parts.iter().find_map(|part| part["text"].as_str()));

        let text = match text {
            Some(t) => t,
            None => return Ok(None),
        };

        // JSON モードでもテキストが壊れていることはあるので、その場合は「結果なし」扱い
        Ok(serde_json::from_str::<Value>(text).ok())
    }
}
