use clap::Parser;
use ostap::api::Assistant;
use ostap::config::{self, AssistantConfig};
use ostap::error::Result;
use ostap::store::fs::FileStore;
use std::io::IsTerminal;

mod args;
mod cli;
use args::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _cli = Cli::parse();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let data_dir = config::data_dir()?;
    let config = AssistantConfig::load(&data_dir).unwrap_or_else(|e| {
        log::warn!("ignoring unreadable config in {}: {}", data_dir.display(), e);
        AssistantConfig::default()
    });
    log::debug!("data directory: {}", data_dir.display());

    let store = FileStore::new(data_dir).with_config(&config);
    let mut assistant = Assistant::new(store, config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let interactive = stdin.is_terminal() && stdout.is_terminal();
    if !stdout.is_terminal() {
        colored::control::set_override(false);
    }

    let mut console = cli::Console::new(stdin.lock(), stdout, interactive);
    console.run(&mut assistant)
}
