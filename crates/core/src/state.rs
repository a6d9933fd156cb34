use crate::{Card, Chips, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingBet,
    InitialDeal,
    PlayerTurn,
    DealerTurn,
    Settlement,
    Terminal,
}

impl Phase {
    pub const ALL: [Phase; 6] = [
        Phase::AwaitingBet,
        Phase::InitialDeal,
        Phase::PlayerTurn,
        Phase::DealerTurn,
        Phase::Settlement,
        Phase::Terminal,
    ];

    /// Phases the table can rest in while waiting for outside input.
    pub fn awaits_input(self) -> bool {
        matches!(
            self,
            Phase::AwaitingBet | Phase::PlayerTurn | Phase::Settlement
        )
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    Hit,
    Stand,
}

/// Everything the outside world can submit to a table.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Input {
    Bet(Chips),
    Action(PlayerAction),
    Continue(bool),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SeatKind {
    Player,
    Dealer,
}

/// A card as a renderer may see it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CardView {
    Hidden,
    Shown(Card),
}

impl CardView {
    pub fn of(card: &Card) -> Self {
        if card.face_up {
            CardView::Shown(*card)
        } else {
            CardView::Hidden
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            CardView::Hidden => None,
            CardView::Shown(card) => Some(card),
        }
    }
}

/// The finished round, kept after the cards have gone back to the shoe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundResult {
    pub round: u32,
    pub outcome: Outcome,
    pub bet: Chips,
    /// Chips credited to the player, stake included.
    pub payout: Chips,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_total: u8,
    pub dealer_total: u8,
    pub player_bank: Chips,
    pub dealer_bank: Chips,
}

impl RoundResult {
    pub fn net(&self) -> Chips {
        self.payout - self.bet
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableSnapshot {
    pub phase: Phase,
    pub round: u32,
    pub player_name: String,
    pub player_hand: Vec<CardView>,
    pub dealer_hand: Vec<CardView>,
    pub player_total: u8,
    pub player_soft: bool,
    /// `None` while the hole card is face down.
    pub dealer_total: Option<u8>,
    pub player_bank: Chips,
    pub dealer_bank: Chips,
    pub bet: Chips,
    pub deck_remaining: usize,
    pub last_result: Option<RoundResult>,
}
