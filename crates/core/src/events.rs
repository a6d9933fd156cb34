use crate::{Card, CardView, Chips, Outcome, Phase, SeatKind, TableSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        round: u32,
        bet: Chips,
    },
    CardDealt {
        to: SeatKind,
        card: CardView,
    },
    HoleCardRevealed {
        card: Card,
    },
    PlayerHit {
        total: u8,
    },
    PlayerStood {
        total: u8,
    },
    PlayerBusted {
        total: u8,
    },
    DealerHit {
        total: u8,
    },
    DealerStood {
        total: u8,
    },
    DealerBusted {
        total: u8,
    },
    RoundSettled {
        outcome: Outcome,
        payout: Chips,
        player_bank: Chips,
        dealer_bank: Chips,
    },
    RoundAborted {
        reason: String,
    },
    PhaseChanged {
        from: Phase,
        to: Phase,
    },
    SessionEnded {
        rounds: u32,
        player_bank: Chips,
    },
    Snapshot(TableSnapshot),
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.queue.iter()
    }
}
