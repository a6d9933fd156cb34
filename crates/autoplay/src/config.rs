use blackjack_core::Chips;
use serde::{Deserialize, Serialize};

/// Shoe seed used when neither the table config nor the caller picks one.
pub const DEFAULT_SEED: u64 = 0xC0FFEE;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub max_rounds: u32,
    /// Flat stake per round, clamped to the bank and the table minimum.
    pub bet: Chips,
    /// Hit below this total, stand at or above it.
    pub stand_on: u8,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            max_rounds: 100,
            bet: 10,
            stand_on: 17,
        }
    }
}
