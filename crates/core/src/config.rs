use crate::{Chips, DealerPolicy, PayoutRatio, RngState};
use serde::{Deserialize, Serialize};

fn default_player_name() -> String {
    "Player".to_string()
}

fn default_starting_bank() -> Chips {
    1000
}

fn default_house_bank() -> Chips {
    1_000_000
}

fn default_min_bet() -> Chips {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    #[serde(default = "default_player_name")]
    pub player_name: String,
    #[serde(default = "default_starting_bank")]
    pub starting_bank: Chips,
    #[serde(default = "default_house_bank")]
    pub house_bank: Chips,
    #[serde(default = "default_min_bet")]
    pub min_bet: Chips,
    #[serde(default)]
    pub dealer_hits_soft_17: bool,
    #[serde(default)]
    pub natural_payout: PayoutRatio,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
            starting_bank: default_starting_bank(),
            house_bank: default_house_bank(),
            min_bet: default_min_bet(),
            dealer_hits_soft_17: false,
            natural_payout: PayoutRatio::NATURAL,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn dealer_policy(&self) -> DealerPolicy {
        DealerPolicy {
            hits_soft_17: self.dealer_hits_soft_17,
        }
    }

    pub fn rng(&self) -> RngState {
        match self.seed {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        }
    }

    /// Smallest stake the table takes; never below one chip.
    pub fn table_minimum(&self) -> Chips {
        self.min_bet.max(1)
    }
}
