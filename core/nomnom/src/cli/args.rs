//! CLI 引数のパース

use crate::domain::AppCommand;
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub help: bool,
    /// -d / --home-dir: dishes.json と log.jsonl の置き場所を上書きする
    pub home_dir: Option<PathBuf>,
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("nomnom")
        .about("Pick today's family dinner menu and send it to the chef")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("home-dir")
                .short('d')
                .long("home-dir")
                .help("Directory for dishes.json and log.jsonl (default: NOMNOM_HOME, else ~/.config/nomnom)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .help("Generate shell completion script (bash, zsh, fish)")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
}

pub fn parse_args() -> Result<ParseOutcome, Error> {
    parse_args_from(std::env::args().collect())
}

fn parse_args_from(args: Vec<String>) -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(*shell));
    }

    Ok(ParseOutcome::Config(Config {
        help: matches.get_flag("help"),
        home_dir: matches.get_one::<PathBuf>("home-dir").cloned(),
    }))
}

pub fn config_to_command(config: &Config) -> AppCommand {
    if config.help {
        AppCommand::Help
    } else {
        AppCommand::Session
    }
}

pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "nomnom", &mut std::io::stdout());
}
