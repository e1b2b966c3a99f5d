//! テスト用スタブアダプタと組み立てヘルパ

use crate::domain::{Catalog, DishDetails};
use crate::ports::outbound::{
    CatalogStore, ChefNotifier, Clipboard, DishEnricher, Notice, NoticeSink,
};
use crate::usecase::MenuUseCase;
use common::adapter::{NoopLog, StdFileSystem};
use common::domain::DishId;
use common::error::Error;
use common::ports::outbound::{Clock, IdGenerator};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// メモリ上の CatalogStore。保存のたびにスナップショットを記録する。
pub struct MemoryCatalogStore {
    initial: Catalog,
    saved: Mutex<Vec<Catalog>>,
}

impl MemoryCatalogStore {
    pub fn seeded() -> Self {
        Self::with_catalog(Catalog::seed())
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            initial: catalog,
            saved: Mutex::new(Vec::new()),
        }
    }

    pub fn last_saved(&self) -> Option<Catalog> {
        self.saved.lock().unwrap().last().cloned()
    }

    pub fn save_count(&self) -> usize {
        self.saved.lock().unwrap().len()
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn load(&self) -> Result<Catalog, Error> {
        Ok(self.initial.clone())
    }

    fn save(&self, catalog: &Catalog) -> Result<(), Error> {
        self.saved.lock().unwrap().push(catalog.clone());
        Ok(())
    }
}

/// 連番の DishId を返す IdGenerator（決定的）
#[derive(Default)]
pub struct SeqIdGenerator {
    counter: AtomicU64,
}

impl IdGenerator for SeqIdGenerator {
    fn next_id(&self) -> DishId {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        DishId::new(format!("T{:07}", n))
    }
}

/// 固定時刻を返す Clock
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_ms(&self) -> u64 {
        self.0
    }
}

/// 固定結果を返す DishEnricher。呼ばれた回数を数える。
pub struct StubEnricher {
    result: Result<Option<DishDetails>, Error>,
    calls: AtomicUsize,
}

impl StubEnricher {
    pub fn filled(details: DishDetails) -> Self {
        Self {
            result: Ok(Some(details)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn empty() -> Self {
        Self {
            result: Ok(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(Error::http("Gemini API error: 503")),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DishEnricher for StubEnricher {
    fn generate(&self, _dish_name: &str) -> Result<Option<DishDetails>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// 書かれたテキストを記録するクリップボード
#[derive(Default)]
pub struct RecordingClipboard {
    texts: Mutex<Vec<String>>,
}

impl RecordingClipboard {
    pub fn last(&self) -> Option<String> {
        self.texts.lock().unwrap().last().cloned()
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&self, text: &str) -> Result<(), Error> {
        self.texts.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// 常に失敗するクリップボード
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn write_text(&self, _text: &str) -> Result<(), Error> {
        Err(Error::internal("Clipboard write failed: denied"))
    }
}

/// 呼び出し回数だけ数える ChefNotifier
#[derive(Default)]
pub struct RecordingNotifier {
    calls: AtomicUsize,
}

impl RecordingNotifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ChefNotifier for RecordingNotifier {
    fn notify(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

/// 通知を共有バッファに記録する NoticeSink
pub struct RecordingNotices {
    log: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNotices {
    /// (sink, 検査用ハンドル) を返す
    pub fn channel() -> (Box<dyn NoticeSink>, Arc<Mutex<Vec<Notice>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        (
            Box::new(Self {
                log: Arc::clone(&log),
            }),
            log,
        )
    }
}

impl NoticeSink for RecordingNotices {
    fn notice(&mut self, notice: &Notice) -> Result<(), Error> {
        self.log.lock().unwrap().push(*notice);
        Ok(())
    }
}

/// 検査用ハンドル一式
pub struct Handles {
    pub store: Arc<MemoryCatalogStore>,
    pub notifier: Arc<RecordingNotifier>,
    pub notices: Arc<Mutex<Vec<Notice>>>,
}

/// シード済みカタログでユースケースを組み立てる
pub fn use_case(
    enricher: Option<Arc<dyn DishEnricher>>,
    clipboard: Arc<dyn Clipboard>,
) -> (MenuUseCase, Handles) {
    let store = Arc::new(MemoryCatalogStore::seeded());
    let notifier = Arc::new(RecordingNotifier::default());
    let (sink, notices) = RecordingNotices::channel();
    let uc = MenuUseCase::new(
        Arc::clone(&store) as Arc<dyn CatalogStore>,
        Arc::new(SeqIdGenerator::default()),
        Arc::new(FixedClock(1_754_000_000_000)),
        Arc::new(StdFileSystem),
        enricher,
        clipboard,
        Arc::clone(&notifier) as Arc<dyn ChefNotifier>,
        sink,
        Arc::new(NoopLog),
    )
    .unwrap();
    (
        uc,
        Handles {
            store,
            notifier,
            notices,
        },
    )
}
