use crate::{Card, Rank, RngState, Suit};
use thiserror::Error;

pub const STANDARD_DECK_SIZE: usize = 52;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
    #[error("deck already holds {0} cards")]
    NotEmpty(usize),
}

/// Ordered shoe of face-down cards. The top of the deck is the end of
/// `cards`, so drawing is a pop.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: RngState,
}

impl Deck {
    pub fn new(rng: RngState) -> Self {
        Self {
            cards: Vec::with_capacity(STANDARD_DECK_SIZE),
            rng,
        }
    }

    /// Built and shuffled 52-card deck.
    pub fn standard52(rng: RngState) -> Self {
        let mut deck = Self::new(rng);
        deck.fill_standard();
        deck.shuffle();
        deck
    }

    /// Deck whose first element is the next card drawn. Order is kept as
    /// given; nothing is shuffled until cards come back.
    pub fn from_top(cards: Vec<Card>, rng: RngState) -> Self {
        let mut cards: Vec<Card> = cards.into_iter().map(|card| card.turned(false)).collect();
        cards.reverse();
        Self { cards, rng }
    }

    pub fn build(&mut self) -> Result<(), DeckError> {
        if !self.cards.is_empty() {
            return Err(DeckError::NotEmpty(self.cards.len()));
        }
        self.fill_standard();
        Ok(())
    }

    fn fill_standard(&mut self) {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                self.cards.push(Card::new(rank, suit));
            }
        }
    }

    pub fn shuffle(&mut self) {
        self.rng.shuffle(&mut self.cards);
    }

    pub fn draw(&mut self, face_up: bool) -> Result<Card, DeckError> {
        let card = self.cards.pop().ok_or(DeckError::Empty)?;
        Ok(card.turned(face_up))
    }

    pub fn return_cards(&mut self, cards: Vec<Card>) {
        if cards.is_empty() {
            return;
        }
        self.cards
            .extend(cards.into_iter().map(|card| card.turned(false)));
        self.shuffle();
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards from bottom to top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
