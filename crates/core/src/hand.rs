use crate::Card;
use serde::{Deserialize, Serialize};

pub const BLACKJACK: u8 = 21;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandValue {
    pub total: u8,
    /// An Ace is still counted as 11.
    pub soft: bool,
}

/// Best blackjack total for `cards`. Each Ace starts at 11 and is dropped to
/// 1 only while the total is over 21. The result may still be a bust.
pub fn evaluate_hand(cards: &[Card]) -> u8 {
    hand_value(cards).total
}

pub fn hand_value(cards: &[Card]) -> HandValue {
    let mut total: u32 = 0;
    let mut aces = 0u32;
    for card in cards {
        total += u32::from(card.value());
        if card.is_ace() {
            aces += 1;
        }
    }
    while total > u32::from(BLACKJACK) && aces > 0 {
        total -= 10;
        aces -= 1;
    }
    HandValue {
        total: total.min(u32::from(u8::MAX)) as u8,
        soft: aces > 0,
    }
}

pub fn is_bust(cards: &[Card]) -> bool {
    evaluate_hand(cards) > BLACKJACK
}

pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && evaluate_hand(cards) == BLACKJACK
}
