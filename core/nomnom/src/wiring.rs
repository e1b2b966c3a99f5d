//! 配線: 標準アダプタで依存を組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FileJsonLog, StdClock, StdEnvResolver, StdFileSystem, StdIdGenerator};
use common::domain::HomeDir;
use common::error::Error;
use common::llm::GeminiClient;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, IdGenerator, Log};

use crate::adapter::{FileCatalogStore, GeminiDishEnricher, SystemClipboard, WeixinNotifier};
use crate::ports::outbound::{CatalogStore, ChefNotifier, Clipboard, DishEnricher};

/// カタログファイル名（ホームディレクトリ直下）
const DISHES_FILE: &str = "dishes.json";

/// JSONL ログのファイル名
const LOG_FILE: &str = "log.jsonl";

/// 標準アダプタ一式
pub struct App {
    pub home_dir: HomeDir,
    pub store: Arc<dyn CatalogStore>,
    pub id_gen: Arc<dyn IdGenerator>,
    pub clock: Arc<dyn Clock>,
    pub fs: Arc<dyn FileSystem>,
    pub enricher: Option<Arc<dyn DishEnricher>>,
    pub clipboard: Arc<dyn Clipboard>,
    pub notifier: Arc<dyn ChefNotifier>,
    pub logger: Arc<dyn Log>,
}

/// 配線: 標準アダプタで App を組み立てる
///
/// GEMINI_API_KEY が無ければ enricher は None（AI 機能は静かに無効化）。
pub fn wire_app(home_dir_override: Option<PathBuf>) -> Result<App, Error> {
    let env_resolver = StdEnvResolver;
    let home_dir = match home_dir_override {
        Some(path) => HomeDir::new(path),
        None => env_resolver.resolve_home_dir()?,
    };

    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let clock: Arc<dyn Clock> = Arc::new(StdClock);
    let logger: Arc<dyn Log> = Arc::new(FileJsonLog::new(
        Arc::clone(&fs),
        home_dir.join(LOG_FILE),
    ));
    let store: Arc<dyn CatalogStore> = Arc::new(FileCatalogStore::new(
        Arc::clone(&fs),
        home_dir.join(DISHES_FILE),
        Arc::clone(&logger),
    ));
    let id_gen: Arc<dyn IdGenerator> = Arc::new(StdIdGenerator::new(Arc::clone(&clock)));
    let enricher: Option<Arc<dyn DishEnricher>> = env_resolver
        .gemini_api_key()
        .map(|key| Arc::new(GeminiDishEnricher::new(GeminiClient::new(key, None))) as _);

    Ok(App {
        home_dir,
        store,
        id_gen,
        clock,
        fs,
        enricher,
        clipboard: Arc::new(SystemClipboard),
        notifier: Arc::new(WeixinNotifier::new()),
        logger,
    })
}
