//! Inbound ポート: CLI がアプリを起動するためのインターフェース

use crate::cli::Config;
use common::error::Error;

/// パース済み Config を受け取ってコマンドを実行する
pub trait UseCaseRunner {
    fn run(&self, config: Config) -> Result<i32, Error>;
}
