// src/cli/menu.rs
use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use console::style;
use copypasta::{ClipboardContext, ClipboardProvider};
use inquire::{Confirm, Select, Text};

use crate::core::config::Config;
use crate::generators::PhraseGenerator;
use crate::models::{GenerationConfig, SavedEntry};
use crate::storage::SavedStore;
use crate::strength::{classify, ZxcvbnOracle};
use crate::synth;
use crate::utils::format_time_ago;

use super::handlers::styled_label;

pub fn run_cli_menu(config: &Config, should_exit: Arc<AtomicBool>) -> Result<(), Box<dyn Error>> {
    println!("🔑 PhraseForge - memorable passwords from a phrase\n");

    let mut generator = PhraseGenerator::new();
    let oracle = ZxcvbnOracle;
    let mut options = config.generation_config();
    let mut phrase = String::new();

    // Main application loop
    let mut exit_requested = false;
    while !exit_requested && !should_exit.load(Ordering::SeqCst) {
        let menu_options = vec![
            "🔐  Generate passwords",
            "♻️  Regenerate one slot",
            "📋  Copy a password",
            "💾  Save a password",
            "📖  View saved passwords",
            "🕘  View session history",
            "⚙️  Change options",
            "❌  Exit",
        ];

        let selection_result = Select::new("Choose an option:", menu_options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Ctrl+C to exit.")
            .prompt_skippable();

        if should_exit.load(Ordering::SeqCst) {
            break;
        }

        match selection_result {
            Ok(Some(selection)) => {
                match selection {
                    "🔐  Generate passwords" => {
                        let input = Text::new("Enter your phrase:").prompt()?;

                        if input.trim().is_empty() {
                            println!("❗ Please enter a phrase first.");
                            continue;
                        }
                        phrase = input;

                        match generator.generate_batch(&phrase, &options) {
                            Ok(batch) => {
                                println!();
                                for (i, password) in batch.iter().enumerate() {
                                    let report = classify(&oracle, password);
                                    println!(
                                        "{:>2}. {}  {}",
                                        i + 1,
                                        style(password).bold(),
                                        styled_label(&report)
                                    );
                                }
                                println!();
                            }
                            Err(e) => println!("❌ Failed to generate passwords: {}", e),
                        }
                    }
                    "♻️  Regenerate one slot" => {
                        if let Some(index) = pick_slot(generator.batch())? {
                            match generator.regenerate_slot(index, &phrase, &options) {
                                Ok(password) => {
                                    let report = classify(&oracle, password);
                                    println!(
                                        "✅ Slot {} is now: {}  {}",
                                        index + 1,
                                        style(password).bold(),
                                        styled_label(&report)
                                    );
                                }
                                Err(e) => println!("❌ Failed to regenerate: {}", e),
                            }
                        }
                    }
                    "📋  Copy a password" => {
                        if let Some(index) = pick_slot(generator.batch())? {
                            let password = generator.batch()[index].clone();
                            match ClipboardContext::new() {
                                Ok(mut clipboard) => match clipboard.set_contents(password) {
                                    Ok(_) => println!("✅ Password copied to clipboard!"),
                                    Err(e) => println!("❌ Failed to copy: {}", e),
                                },
                                Err(e) => println!("❌ Clipboard unavailable: {}", e),
                            }
                        }
                    }
                    "💾  Save a password" => {
                        if let Some(index) = pick_slot(generator.batch())? {
                            let password = generator.batch()[index].clone();
                            let confirm = Confirm::new("Save this password?")
                                .with_default(true)
                                .prompt()?;
                            if confirm {
                                let result = SavedStore::open_default(config.saved_path.as_deref())
                                    .and_then(|store| store.append(&SavedEntry::new(password)));
                                match result {
                                    Ok(_) => println!("✅ Password saved!"),
                                    Err(e) => println!("❌ Failed to save password: {}", e),
                                }
                            }
                        }
                    }
                    "📖  View saved passwords" => {
                        let result = SavedStore::open_default(config.saved_path.as_deref())
                            .and_then(|store| store.list());
                        match result {
                            Ok(entries) if entries.is_empty() => {
                                println!("No saved passwords yet.");
                            }
                            Ok(entries) => {
                                for entry in entries {
                                    println!(
                                        "{}  (saved {})",
                                        entry.password,
                                        format_time_ago(entry.created_at)
                                    );
                                }
                            }
                            Err(e) => println!("❌ Failed to read saved passwords: {}", e),
                        }
                    }
                    "🕘  View session history" => {
                        let history = generator.history();
                        if history.is_empty() {
                            println!("Nothing generated this session yet.");
                        } else {
                            println!("{} passwords generated this session:", history.len());
                            for password in history {
                                println!("  {}", password);
                            }
                        }
                    }
                    "⚙️  Change options" => {
                        let length: usize = Text::new("Password length (12-32):")
                            .with_default(&options.length.to_string())
                            .prompt()
                            .and_then(|s| {
                                s.parse().map_err(|_| {
                                    inquire::InquireError::Custom("Invalid number".into())
                                })
                            })?;

                        let include_uppercase = Confirm::new("Include uppercase letters?")
                            .with_default(options.include_uppercase)
                            .prompt()?;

                        let include_lowercase = Confirm::new("Include lowercase letters?")
                            .with_default(options.include_lowercase)
                            .prompt()?;

                        let include_numbers = Confirm::new("Include numbers?")
                            .with_default(options.include_numbers)
                            .prompt()?;

                        let include_special = Confirm::new("Include special characters?")
                            .with_default(options.include_special)
                            .prompt()?;

                        let updated = GenerationConfig {
                            length,
                            include_uppercase,
                            include_lowercase,
                            include_numbers,
                            include_special,
                        };

                        match synth::validate_config(&updated) {
                            Ok(_) => {
                                options = updated;
                                println!("✅ Options updated");
                            }
                            Err(e) => println!("❌ {}", e),
                        }
                    }
                    "❌  Exit" => {
                        exit_requested = true;
                    }
                    _ => {}
                }
            }
            Ok(None) => {
                exit_requested = true;
            }
            Err(e) => {
                println!("❌ Menu error: {}", e);
                exit_requested = true;
            }
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

// Let the user pick a slot from the current batch; None when the batch is
// empty or the prompt was skipped.
fn pick_slot(batch: &[String]) -> Result<Option<usize>, Box<dyn Error>> {
    if batch.is_empty() {
        println!("❗ No passwords yet. Generate a batch first.");
        return Ok(None);
    }

    let slot_display: Vec<String> = batch
        .iter()
        .enumerate()
        .map(|(i, password)| format!("{:>2}. {}", i + 1, password))
        .collect();

    let selection = Select::new("Which password?", slot_display.clone()).prompt_skippable()?;

    Ok(selection.map(|s| slot_display.iter().position(|d| d == &s).unwrap()))
}
