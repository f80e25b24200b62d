// src/cli/handlers.rs
use std::error::Error;

use console::{style, StyledObject};

use crate::core::config::Config;
use crate::models::GenerationConfig;
use crate::storage::SavedStore;
use crate::strength::{classify, StrengthReport, StrengthTier, ZxcvbnOracle};
use crate::synth;
use crate::utils::format_time_ago;

use super::CliCommand;

// Handlers for CLI commands
pub fn handle_command(config: &Config, command: CliCommand) -> Result<(), Box<dyn Error>> {
    match command {
        CliCommand::Generate {
            phrase,
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            no_special,
            count,
        } => {
            let mut options = config.generation_config();
            if let Some(length) = length {
                options.length = length;
            }
            if no_uppercase {
                options.include_uppercase = false;
            }
            if no_lowercase {
                options.include_lowercase = false;
            }
            if no_numbers {
                options.include_numbers = false;
            }
            if no_special {
                options.include_special = false;
            }
            handle_generate(&phrase, &options, count)
        }
        CliCommand::Classify { password } => handle_classify(&password),
        CliCommand::Saved => handle_saved(config),
    }
}

pub fn handle_generate(
    phrase: &str,
    options: &GenerationConfig,
    count: usize,
) -> Result<(), Box<dyn Error>> {
    let oracle = ZxcvbnOracle;
    for _ in 0..count {
        let password = synth::synthesize(phrase, options)?;
        let report = classify(&oracle, &password);
        println!("{}  {}", password, styled_label(&report));
    }
    Ok(())
}

pub fn handle_classify(password: &str) -> Result<(), Box<dyn Error>> {
    let report = classify(&ZxcvbnOracle, password);
    match report.score {
        Some(score) => println!("Strength: {}/4  {}", score, styled_label(&report)),
        None => println!("Strength: {}", styled_label(&report)),
    }
    Ok(())
}

pub fn handle_saved(config: &Config) -> Result<(), Box<dyn Error>> {
    let store = SavedStore::open_default(config.saved_path.as_deref())?;
    let entries = store.list()?;
    if entries.is_empty() {
        println!("No saved passwords yet.");
        return Ok(());
    }
    for entry in entries {
        println!("{}  (saved {})", entry.password, format_time_ago(entry.created_at));
    }
    Ok(())
}

// Tier decides the color; Unknown renders dim.
pub fn styled_label(report: &StrengthReport) -> StyledObject<String> {
    let text = report.label.to_string();
    match report.tier() {
        Some(StrengthTier::Weak) => style(text).red(),
        Some(StrengthTier::Medium) => style(text).yellow(),
        Some(StrengthTier::Strong) => style(text).green(),
        None => style(text).dim(),
    }
}
