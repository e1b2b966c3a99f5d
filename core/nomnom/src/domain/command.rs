//! CLI から実行するコマンド

/// パース済みの CLI 引数から導かれるコマンド
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// ヘルプを表示して終了
    Help,
    /// 対話セッションを開始（デフォルト）
    Session,
}
