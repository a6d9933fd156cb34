use blackjack_core::Chips;
use serde::{Deserialize, Serialize};

/// When to walk away from the table early.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetConfig {
    pub target_bank: Option<Chips>,
    pub stop_loss: Option<Chips>,
}

pub fn target_reached(bank: Chips, targets: TargetConfig) -> bool {
    matches!(targets.target_bank, Some(target) if bank >= target)
}

/// True once the session has lost at least `stop_loss` chips.
pub fn stop_loss_hit(starting_bank: Chips, bank: Chips, targets: TargetConfig) -> bool {
    matches!(targets.stop_loss, Some(limit) if starting_bank - bank >= limit)
}
