//! CLI レイヤ（引数パースと対話セッションの表示）

pub mod args;
pub mod repl;

pub use args::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
