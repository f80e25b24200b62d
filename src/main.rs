use clap::Parser;
use std::path::Path;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

mod cli;
mod core;
mod generators;
mod models;
mod storage;
mod strength;
mod synth;
mod utils;

use crate::cli::Args;
use crate::core::config::Config;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔑 Starting PhraseForge - memorable password generator");

    let should_exit = Arc::new(AtomicBool::new(false));

    {
        let should_exit = Arc::clone(&should_exit);
        ctrlc::set_handler(move || {
            log::info!("🔴 Ctrl+C received. Shutting down...");
            should_exit.store(true, Ordering::SeqCst);
        })?;
    }

    // One-shot subcommand mode
    if let Some(command) = args.command {
        if let Err(e) = cli::handlers::handle_command(&config, command) {
            log::error!("Command failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Interactive menu
    cli::menu::run_cli_menu(&config, should_exit)
        .map_err(|e| anyhow::anyhow!("CLI menu error: {}", e))?;

    log::info!("✅ PhraseForge shutdown complete");
    Ok(())
}
