//! AI による料理メタデータ生成の Outbound ポート

use crate::domain::DishDetails;
use common::error::Error;

/// 料理名から説明・絵文字・分類の提案を得る抽象
///
/// usecase は `Option<Arc<dyn DishEnricher>>` として注入を受ける。
/// 資格情報が無い環境では None（機能ごと無効）で、呼び出し自体が起きない。
/// テストでは固定結果を返す実装を渡す。
pub trait DishEnricher: Send + Sync {
    /// 1 回だけ生成を試みる（リトライ・キャッシュなし）
    ///
    /// # Returns
    /// * `Ok(Some(details))` - スキーマ通りの提案が得られた
    /// * `Ok(None)` - 結果なし（応答が想定の形でない等）。失敗ではない
    /// * `Err(Error)` - 通信・サービス側の失敗（呼び出し側が通知を出す）
    fn generate(&self, dish_name: &str) -> Result<Option<DishDetails>, Error>;
}
