//! 大厨への受け渡し（メッセージアプリ deep link）の Outbound ポート

/// メッセージアプリへの遷移を試みる抽象
///
/// fire-and-forget: 成否は観測できず、報告もしない。
/// クリップボードへのコピーが成功したときだけ呼ばれる。
pub trait ChefNotifier: Send + Sync {
    fn notify(&self);
}
