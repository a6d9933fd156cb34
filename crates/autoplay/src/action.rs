use crate::AutoplayConfig;
use blackjack_core::{Chips, Input, Phase, PlayerAction, TableSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AutoAction {
    Bet { amount: Chips },
    Hit,
    Stand,
    Continue,
    Quit,
}

impl AutoAction {
    pub fn to_input(self) -> Input {
        match self {
            Self::Bet { amount } => Input::Bet(amount),
            Self::Hit => Input::Action(PlayerAction::Hit),
            Self::Stand => Input::Action(PlayerAction::Stand),
            Self::Continue => Input::Continue(true),
            Self::Quit => Input::Continue(false),
        }
    }

    pub fn short_label(&self) -> String {
        match self {
            Self::Bet { amount } => format!("bet {amount}"),
            Self::Hit => "hit".to_string(),
            Self::Stand => "stand".to_string(),
            Self::Continue => "continue".to_string(),
            Self::Quit => "quit".to_string(),
        }
    }
}

/// Flat bettor that hits below `stand_on`. Returns `None` once the table
/// no longer takes input.
pub fn choose_action(
    snapshot: &TableSnapshot,
    table_minimum: Chips,
    config: &AutoplayConfig,
) -> Option<AutoAction> {
    match snapshot.phase {
        Phase::AwaitingBet => {
            let amount = config.bet.max(table_minimum).min(snapshot.player_bank);
            if amount < table_minimum {
                return Some(AutoAction::Quit);
            }
            Some(AutoAction::Bet { amount })
        }
        Phase::PlayerTurn if snapshot.player_total < config.stand_on => Some(AutoAction::Hit),
        Phase::PlayerTurn => Some(AutoAction::Stand),
        Phase::Settlement => Some(AutoAction::Continue),
        Phase::InitialDeal | Phase::DealerTurn | Phase::Terminal => None,
    }
}
