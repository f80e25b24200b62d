// src/generators/mod.rs
mod phrase;

pub use phrase::{PhraseGenerator, BATCH_SIZE};
