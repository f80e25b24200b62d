// src/generators/phrase.rs
use crate::models::GenerationConfig;
use crate::synth::{self, Result};

/// Passwords produced per "generate" action.
pub const BATCH_SIZE: usize = 12;

/// Session-scoped generator: owns the current batch and the append-only
/// history of every password shown. History has no eviction; it lives and
/// dies with the session.
pub struct PhraseGenerator {
    batch: Vec<String>,
    history: Vec<String>,
}

impl PhraseGenerator {
    pub fn new() -> Self {
        PhraseGenerator {
            batch: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Generate a fresh batch of `BATCH_SIZE` passwords, replacing the
    /// current one. The whole batch is appended to the history.
    pub fn generate_batch(
        &mut self,
        phrase: &str,
        config: &GenerationConfig,
    ) -> Result<&[String]> {
        let mut batch = Vec::with_capacity(BATCH_SIZE);
        for _ in 0..BATCH_SIZE {
            batch.push(synth::synthesize(phrase, config)?);
        }
        self.history.extend(batch.iter().cloned());
        self.batch = batch;
        log::debug!(
            "Generated batch of {} passwords ({} in session history)",
            BATCH_SIZE,
            self.history.len()
        );
        Ok(&self.batch)
    }

    /// Replace a single slot of the current batch, leaving the rest
    /// untouched. The replacement is also recorded in the history.
    pub fn regenerate_slot(
        &mut self,
        index: usize,
        phrase: &str,
        config: &GenerationConfig,
    ) -> Result<&str> {
        assert!(index < self.batch.len(), "slot index out of range");
        let password = synth::synthesize(phrase, config)?;
        self.history.push(password.clone());
        self.batch[index] = password;
        Ok(&self.batch[index])
    }

    pub fn batch(&self) -> &[String] {
        &self.batch
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for PhraseGenerator {
    fn default() -> Self {
        Self::new()
    }
}
