mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;

#[cfg(test)]
mod tests;

use std::io;
use std::process;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{now_iso8601, LogLevel, LogRecord};

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use domain::AppCommand;
use ports::inbound::UseCaseRunner;
use usecase::MenuUseCase;
use wiring::{wire_app, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        match config_to_command(&config) {
            AppCommand::Help => {
                print_help();
                Ok(0)
            }
            AppCommand::Session => {
                self.log_lifecycle("session started");
                let mut uc = MenuUseCase::new(
                    Arc::clone(&self.app.store),
                    Arc::clone(&self.app.id_gen),
                    Arc::clone(&self.app.clock),
                    Arc::clone(&self.app.fs),
                    self.app.enricher.clone(),
                    Arc::clone(&self.app.clipboard),
                    Arc::clone(&self.app.notifier),
                    Box::new(adapter::ConsoleNotice),
                    Arc::clone(&self.app.logger),
                )?;
                let stdin = io::stdin();
                let result = cli::repl::run_session(&mut uc, stdin.lock(), io::stdout());
                self.log_lifecycle("session finished");
                result
            }
        }
    }
}

impl Runner {
    fn log_lifecycle(&self, message: &str) {
        let mut fields = std::collections::BTreeMap::new();
        fields.insert(
            "home_dir".to_string(),
            serde_json::json!(self.app.home_dir.to_string_lossy()),
        );
        let _ = self.app.logger.log(&LogRecord {
            ts: now_iso8601(),
            level: LogLevel::Info,
            message: message.to_string(),
            layer: Some("cli".to_string()),
            kind: Some("lifecycle".to_string()),
            fields: Some(fields),
        });
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("nomnom: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let outcome = parse_args()?;
    let config = match outcome {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_app(config.home_dir.clone())?;
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: nomnom [options]");
}

fn print_help() {
    println!("Usage: nomnom [options]");
    println!();
    println!("Start an interactive session to pick today's family dinner menu,");
    println!("then copy it and hand it to the chef over WeChat.");
    println!();
    println!("Options:");
    println!("  -h, --help               Show this help message");
    println!("  -d, --home-dir <dir>     Directory for dishes.json and log.jsonl");
    println!("                           Default: NOMNOM_HOME, else $XDG_CONFIG_HOME/nomnom (e.g. ~/.config/nomnom)");
    println!("  --generate <shell>       Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Environment:");
    println!("  NOMNOM_HOME      Home directory for the dish catalog and logs.");
    println!("  GEMINI_API_KEY   Enables the AI suggestion in `add --ai`. When unset, the");
    println!("                   feature is disabled and no request is ever sent.");
    println!();
    println!("Session commands:");
    println!("  list / filter / add / photo / rm / pick / picked / clear / send / quit");
    println!("  (type `help` inside the session for details)");
}
