//! トースト通知の stdout 表示

use crate::ports::outbound::{Notice, NoticeSink};
use common::error::Error;

/// 通知を stdout に 1 行で出す NoticeSink 実装
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotice;

impl NoticeSink for ConsoleNotice {
    fn notice(&mut self, notice: &Notice) -> Result<(), Error> {
        println!("{}", notice.text());
        Ok(())
    }
}
