use crate::{evaluate_hand, hand_value, is_bust, Card, Chips};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RatioError {
    #[error("payout denominator cannot be zero")]
    ZeroDenominator,
}

/// Total return on a stake, stake included. A standard win pays 2/1, a
/// natural pays 5/2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutRatio {
    pub numerator: u32,
    pub denominator: u32,
}

impl PayoutRatio {
    pub const EVEN_MONEY: Self = Self {
        numerator: 2,
        denominator: 1,
    };
    pub const NATURAL: Self = Self {
        numerator: 5,
        denominator: 2,
    };

    pub fn new(numerator: u32, denominator: u32) -> Result<Self, RatioError> {
        if denominator == 0 {
            return Err(RatioError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Rounds toward zero and saturates at the `Chips` range.
    pub fn payout(&self, bet: Chips) -> Chips {
        if self.denominator == 0 {
            return 0;
        }
        let total = i128::from(bet) * i128::from(self.numerator) / i128::from(self.denominator);
        Chips::try_from(total).unwrap_or(if total < 0 { Chips::MIN } else { Chips::MAX })
    }

    /// True when a hand paid at this ratio returns at least an even-money win.
    pub fn at_least_even_money(&self) -> bool {
        u64::from(self.numerator) >= 2 * u64::from(self.denominator)
    }
}

impl Default for PayoutRatio {
    fn default() -> Self {
        Self::NATURAL
    }
}

/// How the house plays its hand. Draws below 17; on a soft 17 it stands
/// unless `hits_soft_17` is set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DealerPolicy {
    pub hits_soft_17: bool,
}

impl DealerPolicy {
    pub const STAND_ON: u8 = 17;

    pub fn should_hit(&self, cards: &[Card]) -> bool {
        let value = hand_value(cards);
        if value.total < Self::STAND_ON {
            return true;
        }
        self.hits_soft_17 && value.soft && value.total == Self::STAND_ON
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    Natural,
    PlayerWin,
    DealerBust,
    PlayerBust,
    DealerWin,
    Push,
}

impl Outcome {
    pub fn player_won(self) -> bool {
        matches!(self, Outcome::Natural | Outcome::PlayerWin | Outcome::DealerBust)
    }

    pub fn dealer_won(self) -> bool {
        matches!(self, Outcome::PlayerBust | Outcome::DealerWin)
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Natural => "blackjack",
            Outcome::PlayerWin => "player wins",
            Outcome::DealerBust => "dealer busts",
            Outcome::PlayerBust => "player busts",
            Outcome::DealerWin => "dealer wins",
            Outcome::Push => "push",
        }
    }
}

/// Compares two finished hands. A player bust loses before the dealer's
/// hand is considered, so a double bust goes to the house.
pub fn decide_outcome(player: &[Card], dealer: &[Card]) -> Outcome {
    if is_bust(player) {
        return Outcome::PlayerBust;
    }
    if is_bust(dealer) {
        return Outcome::DealerBust;
    }
    let player_total = evaluate_hand(player);
    let dealer_total = evaluate_hand(dealer);
    match player_total.cmp(&dealer_total) {
        std::cmp::Ordering::Greater => Outcome::PlayerWin,
        std::cmp::Ordering::Less => Outcome::DealerWin,
        std::cmp::Ordering::Equal => Outcome::Push,
    }
}
