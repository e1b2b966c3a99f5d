//! カタログのファイル読み書き（dishes.json、全量置き換え）
//!
//! 読み込み: ファイルが無ければ初期カタログ。壊れていても初期カタログに
//! フォールバックして warn を残す（起動は失敗させない）。
//! 書き込み: JSON 配列を丸ごと書き直す。

use crate::domain::{Catalog, Dish};
use crate::ports::outbound::CatalogStore;
use common::error::Error;
use common::ports::outbound::{now_iso8601, FileSystem, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

/// dishes.json を読み書きする CatalogStore 実装
pub struct FileCatalogStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    logger: Arc<dyn Log>,
}

impl FileCatalogStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>, logger: Arc<dyn Log>) -> Self {
        Self {
            fs,
            path: path.into(),
            logger,
        }
    }

    fn warn_fallback(&self, reason: &str) {
        let mut fields = BTreeMap::new();
        fields.insert(
            "path".to_string(),
            serde_json::json!(self.path.to_string_lossy()),
        );
        fields.insert("reason".to_string(), serde_json::json!(reason));
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: "catalog unreadable, falling back to seed".to_string(),
            layer: Some("adapter".to_string()),
            kind: Some("catalog".to_string()),
            fields: Some(fields),
        });
    }
}

impl CatalogStore for FileCatalogStore {
    fn load(&self) -> Result<Catalog, Error> {
        if !self.fs.exists(&self.path) {
            return Ok(Catalog::seed());
        }
        let content = match self.fs.read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) => {
                self.warn_fallback(&e.to_string());
                return Ok(Catalog::seed());
            }
        };
        match serde_json::from_str::<Vec<Dish>>(&content) {
            Ok(dishes) => Ok(Catalog::new(dishes)),
            Err(e) => {
                self.warn_fallback(&e.to_string());
                Ok(Catalog::seed())
            }
        }
    }

    fn save(&self, catalog: &Catalog) -> Result<(), Error> {
        if let Some(parent) = self.path.parent() {
            self.fs.create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(catalog.dishes())
            .map_err(|e| Error::json(e.to_string()))?;
        self.fs.write(&self.path, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DishCategory;
    use common::adapter::{NoopLog, StdFileSystem};
    use common::domain::DishId;
    use tempfile::tempdir;

    fn store(path: PathBuf) -> FileCatalogStore {
        FileCatalogStore::new(Arc::new(StdFileSystem), path, Arc::new(NoopLog))
    }

    #[test]
    fn test_load_missing_file_seeds() {
        let dir = tempdir().unwrap();
        let store = store(dir.path().join("dishes.json"));
        let catalog = store.load().unwrap();
        assert_eq!(catalog, Catalog::seed());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data/dishes.json");
        let store = store(path.clone());

        let mut catalog = Catalog::seed();
        catalog.add(Dish::new(
            DishId::new("n1"),
            "糖醋里脊",
            DishCategory::Meat,
            "",
            "",
            None,
        ));
        catalog.remove(&DishId::new("3"));
        store.save(&catalog).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_load_corrupt_file_falls_back_to_seed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dishes.json");
        std::fs::write(&path, "{ not json ]").unwrap();
        let store = store(path);
        let catalog = store.load().unwrap();
        assert_eq!(catalog, Catalog::seed());
    }

    #[test]
    fn test_load_wrong_shape_falls_back_to_seed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dishes.json");
        std::fs::write(&path, "{\"dishes\": []}").unwrap();
        let store = store(path);
        let catalog = store.load().unwrap();
        assert_eq!(catalog, Catalog::seed());
    }
}
