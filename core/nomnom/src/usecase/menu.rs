//! メニューセッションのユースケース
//!
//! 1 セッション分の状態（カタログ・選択・フィルタ）を持ち、全操作を提供する。
//! カタログの変更は必ず同じステップで永続化する。選択はセッション限りで、
//! 起動時は常に空。

use crate::domain::menu_text::{build_menu_text, menu_date_label};
use crate::domain::photo::{mime_for_path, to_data_uri, MAX_PHOTO_BYTES, PHOTO_TOO_LARGE};
use crate::domain::{Catalog, CategoryFilter, Dish, DishCategory, DishDraft, Selection};
use crate::ports::outbound::{
    CatalogStore, ChefNotifier, Clipboard, DishEnricher, Notice, NoticeSink,
};
use common::domain::DishId;
use common::error::Error;
use common::ports::outbound::{now_iso8601, Clock, FileSystem, IdGenerator, Log, LogLevel, LogRecord};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// 料理追加のリクエスト
#[derive(Debug, Clone, Default)]
pub struct AddDishRequest {
    pub name: String,
    pub category: Option<DishCategory>,
    pub description: Option<String>,
    pub emoji: Option<String>,
    /// AI に説明・絵文字・分類を提案させるか
    pub use_ai: bool,
}

/// AI 提案の適用結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiApplied {
    /// AI を使わなかった
    NotRequested,
    /// 提案がフォームに反映された
    Filled,
    /// 資格情報なし・結果なし（失敗ではない）
    Unavailable,
}

/// 追加された料理の要約
#[derive(Debug, Clone)]
pub struct AddedDish {
    pub id: DishId,
    pub name: String,
    pub ai: AiApplied,
}

/// 送信（エクスポート）の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyOutcome {
    /// コピー成功、メッセージアプリへの遷移も試みた
    Sent { count: usize },
    /// コピー失敗。遷移は行わない
    CopyFailed,
}

/// メニューセッションのユースケース
pub struct MenuUseCase {
    store: Arc<dyn CatalogStore>,
    id_gen: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    fs: Arc<dyn FileSystem>,
    enricher: Option<Arc<dyn DishEnricher>>,
    clipboard: Arc<dyn Clipboard>,
    notifier: Arc<dyn ChefNotifier>,
    notices: Box<dyn NoticeSink>,
    logger: Arc<dyn Log>,
    catalog: Catalog,
    selection: Selection,
    filter: CategoryFilter,
}

impl MenuUseCase {
    /// セッションを開始する（カタログを読み込み、選択は空から）
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        store: Arc<dyn CatalogStore>,
        id_gen: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        fs: Arc<dyn FileSystem>,
        enricher: Option<Arc<dyn DishEnricher>>,
        clipboard: Arc<dyn Clipboard>,
        notifier: Arc<dyn ChefNotifier>,
        notices: Box<dyn NoticeSink>,
        logger: Arc<dyn Log>,
    ) -> Result<Self, Error> {
        let catalog = store.load()?;
        Ok(Self {
            store,
            id_gen,
            clock,
            fs,
            enricher,
            clipboard,
            notifier,
            notices,
            logger,
            catalog,
            selection: Selection::new(),
            filter: CategoryFilter::All,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// AI 機能が使えるか（資格情報が設定されているか）
    pub fn ai_available(&self) -> bool {
        self.enricher.is_some()
    }

    /// 現在のフィルタで見えている料理（カタログ順）
    pub fn dishes_in_view(&self) -> Vec<&Dish> {
        self.catalog
            .dishes()
            .iter()
            .filter(|d| self.filter.matches(d))
            .collect()
    }

    /// 選択中の料理（カタログ順。カタログに無い id は読み飛ばす）
    pub fn picked_dishes(&self) -> Vec<&Dish> {
        self.catalog
            .dishes()
            .iter()
            .filter(|d| self.selection.contains(&d.id))
            .collect()
    }

    /// 料理を追加する。AI 指定時はドラフトの状態機械を通して提案を反映する。
    ///
    /// AI の通信失敗は Err で返し、カタログには何も加えない（手動で再実行）。
    pub fn add_dish(&mut self, req: AddDishRequest) -> Result<AddedDish, Error> {
        let name = req.name.trim();
        if name.is_empty() {
            return Err(Error::invalid_argument("菜名不能为空"));
        }

        let mut draft = DishDraft::new(name);
        if let Some(category) = req.category {
            draft.category = category;
        }
        if let Some(description) = req.description {
            draft.description = description;
        }
        if let Some(emoji) = req.emoji {
            draft.emoji = emoji;
        }

        let ai = if req.use_ai {
            self.enrich_draft(&mut draft)?
        } else {
            AiApplied::NotRequested
        };

        let dish = Dish::new(
            self.id_gen.next_id(),
            draft.name.clone(),
            draft.category,
            draft.description.clone(),
            draft.emoji.clone(),
            None,
        );
        let added = AddedDish {
            id: dish.id.clone(),
            name: dish.name.clone(),
            ai,
        };
        self.catalog.add(dish);
        self.store.save(&self.catalog)?;
        self.log_info("dish added", "catalog", |fields| {
            fields.insert("id".to_string(), serde_json::json!(added.id.as_str()));
            fields.insert("name".to_string(), serde_json::json!(added.name));
        });
        Ok(added)
    }

    /// ドラフトに AI 提案を反映する
    ///
    /// 資格情報が無ければ通信を一切行わず Unavailable。応答の形が合わない
    /// 場合も Unavailable。通信・サービス失敗だけを Err にする。
    fn enrich_draft(&self, draft: &mut DishDraft) -> Result<AiApplied, Error> {
        let enricher = match &self.enricher {
            None => return Ok(AiApplied::Unavailable),
            Some(e) => Arc::clone(e),
        };
        draft.begin_request()?;
        match enricher.generate(&draft.name) {
            Ok(Some(details)) => {
                draft.apply(&details);
                self.log_info("ai details applied", "enrich", |fields| {
                    fields.insert("name".to_string(), serde_json::json!(draft.name));
                });
                Ok(AiApplied::Filled)
            }
            Ok(None) => {
                draft.settle();
                Ok(AiApplied::Unavailable)
            }
            Err(e) => {
                draft.settle();
                self.log_warn("ai generation failed", "enrich", &e);
                Err(e)
            }
        }
    }

    /// 料理を削除する。選択からも同じステップで取り除き、永続化する。
    /// 無い id は何もしない（エラーではない）。
    pub fn delete_dish(&mut self, id: &DishId) -> Result<bool, Error> {
        if !self.catalog.remove(id) {
            return Ok(false);
        }
        self.selection.remove(id);
        self.store.save(&self.catalog)?;
        self.log_info("dish deleted", "catalog", |fields| {
            fields.insert("id".to_string(), serde_json::json!(id.as_str()));
        });
        Ok(true)
    }

    /// 選択を反転する。戻り値は「今選択されているか」。
    pub fn toggle(&mut self, id: DishId) -> bool {
        self.selection.toggle(id)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// 写真を取り込んで data: URI としてカタログに保存する
    pub fn attach_photo(&mut self, id: &DishId, path: &Path) -> Result<(), Error> {
        if !self.catalog.contains(id) {
            return Err(Error::invalid_argument("没有这道菜"));
        }
        let bytes = self.fs.read(path)?;
        if bytes.len() > MAX_PHOTO_BYTES {
            return Err(Error::invalid_argument(PHOTO_TOO_LARGE));
        }
        let uri = to_data_uri(mime_for_path(path), &bytes);
        if let Some(dish) = self.catalog.get_mut(id) {
            dish.image_url = Some(uri);
        }
        self.store.save(&self.catalog)?;
        Ok(())
    }

    /// 今日のメニューを共有する
    ///
    /// 文面を組み立て、クリップボードに書き、成功したら通知のあとで
    /// メッセージアプリへの遷移を試みる。コピー失敗時は通知だけ出して
    /// そこで止まる（遷移しない）。選択は変更しない。
    pub fn notify_chef(&mut self) -> Result<NotifyOutcome, Error> {
        if self.selection.is_empty() {
            return Err(Error::invalid_argument("还没有选菜呢"));
        }
        let date_label = menu_date_label(self.clock.now_ms());
        let text = build_menu_text(&self.catalog, &self.selection, &date_label);
        let count = self.picked_dishes().len();

        match self.clipboard.write_text(&text) {
            Err(e) => {
                self.log_warn("clipboard write failed", "export", &e);
                let _ = self.notices.notice(&Notice::CopyFailed);
                Ok(NotifyOutcome::CopyFailed)
            }
            Ok(()) => {
                let _ = self.notices.notice(&Notice::MenuCopied);
                self.notifier.notify();
                self.log_info("menu exported", "export", |fields| {
                    fields.insert("count".to_string(), serde_json::json!(count));
                });
                Ok(NotifyOutcome::Sent { count })
            }
        }
    }

    fn log_info<F>(&self, message: &str, kind: &str, fill: F)
    where
        F: FnOnce(&mut BTreeMap<String, serde_json::Value>),
    {
        let mut fields = BTreeMap::new();
        fill(&mut fields);
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: message.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some(kind.to_string()),
            fields: Some(fields),
        });
    }

    fn log_warn(&self, message: &str, kind: &str, error: &Error) {
        let mut fields = BTreeMap::new();
        fields.insert("error".to_string(), serde_json::json!(error.to_string()));
        let _ = self.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Warn,
            message: message.to_string(),
            layer: Some("usecase".to_string()),
            kind: Some(kind.to_string()),
            fields: Some(fields),
        });
    }
}
