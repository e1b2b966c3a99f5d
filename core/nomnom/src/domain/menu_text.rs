//! メニュー文面の組み立て
//!
//! 選択中の料理をカタログ順で番号付きリストにする。クリップボードと
//! メッセージアプリに渡す共有テキストで、写真は埋め込めないため
//! 常に絵文字フィールドを使う。

use super::catalog::Catalog;
use super::selection::Selection;
use chrono::{Datelike, Local, TimeZone};

const SEPARATOR: &str = "------------------";

/// 共有メニュー文面を組み立てる
///
/// 前提: 選択が空でないこと（呼び出し側が送信を無効化する）。
/// カタログに存在しない選択 id は黙って読み飛ばす。
pub fn build_menu_text(catalog: &Catalog, selection: &Selection, date_label: &str) -> String {
    let picked: Vec<_> = catalog
        .dishes()
        .iter()
        .filter(|d| selection.contains(&d.id))
        .collect();

    let mut text = format!("📅 {} 菜单来了！\n", date_label);
    text.push_str(SEPARATOR);
    text.push('\n');
    for (index, dish) in picked.iter().enumerate() {
        text.push_str(&format!("{}. {} {}\n", index + 1, dish.name, dish.emoji));
    }
    text.push_str(SEPARATOR);
    text.push('\n');
    text.push_str(&format!("共 {} 道菜，辛苦大厨啦！👨‍🍳❤️", picked.len()));
    text
}

/// ヘッダ用のローカル日付ラベル（例: 8月6日）
pub fn menu_date_label(now_ms: u64) -> String {
    let date = Local
        .timestamp_millis_opt(now_ms as i64)
        .single()
        .unwrap_or_else(Local::now);
    format!("{}月{}日", date.month(), date.day())
}
