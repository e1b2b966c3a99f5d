//! カタログ永続化の Outbound ポート

use crate::domain::Catalog;
use common::error::Error;

/// カタログの読み書き抽象
///
/// 保存は常に全量の置き換え（差分更新・バージョン移行はしない）。
/// 変更と保存の間に中断点を挟まないことで、他のコンポーネントからは
/// 「変更＝保存済み」という 1 ステップに見える。
pub trait CatalogStore: Send + Sync {
    /// 起動時の読み込み。保存データが無ければ初期カタログを返す。
    /// 壊れたデータも初期カタログへのフォールバックとし、起動は失敗させない。
    fn load(&self) -> Result<Catalog, Error>;

    /// 全量を書き出す
    fn save(&self, catalog: &Catalog) -> Result<(), Error>;
}
