// src/strength.rs
use thiserror::Error;
use zxcvbn::Score;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("strength oracle failed: {0}")]
    Failed(String),
}

/// Black-box strength estimator. Scores are 0 (very weak) to 4 (very strong).
pub trait StrengthOracle {
    fn score(&self, password: &str) -> Result<u8, OracleError>;
}

// Production oracle backed by the zxcvbn estimator (dictionary words,
// patterns, keyboard sequences).
pub struct ZxcvbnOracle;

impl StrengthOracle for ZxcvbnOracle {
    fn score(&self, password: &str) -> Result<u8, OracleError> {
        let entropy = zxcvbn::zxcvbn(password, &[]);
        match entropy.score() {
            Score::Zero => Ok(0),
            Score::One => Ok(1),
            Score::Two => Ok(2),
            Score::Three => Ok(3),
            Score::Four => Ok(4),
            other => Err(OracleError::Failed(format!("unexpected score {:?}", other))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
    Unknown,
}

impl StrengthLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::VeryWeak,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Medium,
            3 => StrengthLabel::Strong,
            4 => StrengthLabel::VeryStrong,
            _ => StrengthLabel::Unknown,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::VeryWeak => write!(f, "Very Weak"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very Strong"),
            StrengthLabel::Unknown => write!(f, "Unknown"),
        }
    }
}

// Coarse grouping used for display coloring, not part of the label itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrengthTier {
    Weak,
    Medium,
    Strong,
}

impl StrengthTier {
    pub fn from_score(score: u8) -> Self {
        if score < 2 {
            StrengthTier::Weak
        } else if score < 4 {
            StrengthTier::Medium
        } else {
            StrengthTier::Strong
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    /// Raw oracle score, absent when the oracle failed.
    pub score: Option<u8>,
    pub label: StrengthLabel,
}

impl StrengthReport {
    pub fn tier(&self) -> Option<StrengthTier> {
        match self.label {
            StrengthLabel::Unknown => None,
            _ => self.score.map(StrengthTier::from_score),
        }
    }
}

/// Classify a password. Total over all oracle outcomes: an oracle error or
/// an out-of-range score yields the Unknown label instead of propagating.
pub fn classify(oracle: &dyn StrengthOracle, password: &str) -> StrengthReport {
    match oracle.score(password) {
        Ok(score) => StrengthReport {
            score: Some(score),
            label: StrengthLabel::from_score(score),
        },
        Err(e) => {
            log::warn!("Strength oracle error: {}", e);
            StrengthReport {
                score: None,
                label: StrengthLabel::Unknown,
            }
        }
    }
}
