// src/cli/commands.rs
use clap::Subcommand;

use crate::generators::BATCH_SIZE;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate passwords from a phrase
    Generate {
        /// Seed phrase the passwords are built from
        #[arg(required = true)]
        phrase: String,

        /// Password length (12-32)
        #[arg(long)]
        length: Option<usize>,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_numbers: bool,

        /// Leave out special characters
        #[arg(long)]
        no_special: bool,

        /// Number of passwords to generate
        #[arg(long, default_value_t = BATCH_SIZE)]
        count: usize,
    },

    /// Score a password's strength
    Classify {
        /// Password to score
        #[arg(required = true)]
        password: String,
    },

    /// List saved passwords
    Saved,
}
