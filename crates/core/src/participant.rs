use crate::{evaluate_hand, hand_value, Card, Deck, DeckError, HandValue};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type Chips = i64;

/// Largest bank a loaded table config may carry.
pub const MAX_BANK: Chips = 1_000_000_000_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BetError {
    #[error("bet must be positive, got {0}")]
    NotPositive(Chips),
    #[error("bet {bet} exceeds bank {bank}")]
    InsufficientFunds { bet: Chips, bank: Chips },
    #[error("a bet of {0} is already on the table")]
    AlreadyPlaced(Chips),
}

/// Someone seated at the table: a name, a bank, the current hand and the
/// stake riding on it. Bets are debited when placed and credited back on
/// resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    bank: Chips,
    hand: Vec<Card>,
    bet: Chips,
}

impl Participant {
    pub fn new(name: impl Into<String>, bank: Chips) -> Self {
        Self {
            name: name.into(),
            bank,
            hand: Vec::new(),
            bet: 0,
        }
    }

    pub fn bank(&self) -> Chips {
        self.bank
    }

    pub fn bet(&self) -> Chips {
        self.bet
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn total(&self) -> u8 {
        evaluate_hand(&self.hand)
    }

    pub fn hand_value(&self) -> HandValue {
        hand_value(&self.hand)
    }

    pub fn place_bet(&mut self, amount: Chips) -> Result<(), BetError> {
        if self.bet != 0 {
            return Err(BetError::AlreadyPlaced(self.bet));
        }
        if amount <= 0 {
            return Err(BetError::NotPositive(amount));
        }
        if amount > self.bank {
            return Err(BetError::InsufficientFunds {
                bet: amount,
                bank: self.bank,
            });
        }
        self.bank -= amount;
        self.bet = amount;
        Ok(())
    }

    pub fn receive_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn clear_hand(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    /// Credits `payout` (stake included) and hands the cards back.
    pub fn settle_win(&mut self, payout: Chips) -> Vec<Card> {
        self.bank = self.bank.saturating_add(payout);
        self.bet = 0;
        self.clear_hand()
    }

    /// The stake was taken at bet time; nothing else moves.
    pub fn settle_lose(&mut self) -> Vec<Card> {
        self.bet = 0;
        self.clear_hand()
    }

    pub fn settle_push(&mut self) -> Vec<Card> {
        self.bank = self.bank.saturating_add(self.bet);
        self.bet = 0;
        self.clear_hand()
    }
}

/// Shared capability of everyone at the table. The dealer gets it through
/// the participant it wraps rather than by being one.
pub trait Seat {
    fn seat(&self) -> &Participant;
    fn seat_mut(&mut self) -> &mut Participant;

    fn name(&self) -> &str {
        &self.seat().name
    }

    fn bank(&self) -> Chips {
        self.seat().bank()
    }

    fn bet(&self) -> Chips {
        self.seat().bet()
    }

    fn hand(&self) -> &[Card] {
        self.seat().hand()
    }

    fn total(&self) -> u8 {
        self.seat().total()
    }

    fn receive_card(&mut self, card: Card) {
        self.seat_mut().receive_card(card);
    }

    fn clear_hand(&mut self) -> Vec<Card> {
        self.seat_mut().clear_hand()
    }

    fn settle_win(&mut self, payout: Chips) -> Vec<Card> {
        self.seat_mut().settle_win(payout)
    }

    fn settle_lose(&mut self) -> Vec<Card> {
        self.seat_mut().settle_lose()
    }

    fn settle_push(&mut self) -> Vec<Card> {
        self.seat_mut().settle_push()
    }
}

impl Seat for Participant {
    fn seat(&self) -> &Participant {
        self
    }

    fn seat_mut(&mut self) -> &mut Participant {
        self
    }
}

/// The house: a participant plus the shoe it deals from.
#[derive(Debug, Clone)]
pub struct Dealer {
    seat: Participant,
    deck: Deck,
}

impl Dealer {
    pub const NAME: &'static str = "Dealer";

    pub fn new(bank: Chips, deck: Deck) -> Self {
        Self {
            seat: Participant::new(Self::NAME, bank),
            deck,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn deal(&mut self, face_up: bool) -> Result<Card, DeckError> {
        self.deck.draw(face_up)
    }

    pub fn return_cards_to_deck(&mut self, cards: Vec<Card>) {
        self.deck.return_cards(cards);
    }

    /// Mirrors the player's stake. The house bank is not checked and may go
    /// negative.
    pub fn match_bet(&mut self, amount: Chips) -> Result<(), BetError> {
        if self.seat.bet != 0 {
            return Err(BetError::AlreadyPlaced(self.seat.bet));
        }
        if amount <= 0 {
            return Err(BetError::NotPositive(amount));
        }
        self.seat.bank = self.seat.bank.saturating_sub(amount);
        self.seat.bet = amount;
        Ok(())
    }

    /// Pays a premium on top of the pot, e.g. the extra half stake of a
    /// natural.
    pub fn cover(&mut self, amount: Chips) {
        self.seat.bank = self.seat.bank.saturating_sub(amount);
    }

    pub fn hole_card_hidden(&self) -> bool {
        self.seat.hand.iter().any(|card| !card.face_up)
    }

    /// Turns every face-down card up and returns the ones that were hidden.
    pub fn reveal_hole_card(&mut self) -> Vec<Card> {
        let mut revealed = Vec::new();
        for card in &mut self.seat.hand {
            if !card.face_up {
                card.face_up = true;
                revealed.push(*card);
            }
        }
        revealed
    }
}

impl Seat for Dealer {
    fn seat(&self) -> &Participant {
        &self.seat
    }

    fn seat_mut(&mut self) -> &mut Participant {
        &mut self.seat
    }
}
