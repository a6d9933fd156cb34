use crate::{
    Chips, Dealer, Deck, Event, EventBus, Input, Participant, Phase, RoundResult, Seat,
    TableConfig, TableSnapshot,
};
use thiserror::Error;

mod betting;
mod deal;
mod settle;
mod snapshot;
mod turns;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("bet {bet} exceeds bank {bank}")]
    InsufficientFunds { bet: Chips, bank: Chips },
    #[error("invalid bet {amount}: table minimum is {min}")]
    InvalidBet { amount: Chips, min: Chips },
    #[error("deck ran out of cards")]
    EmptyDeck,
    #[error("{input:?} is not accepted during {phase:?}")]
    IllegalAction { phase: Phase, input: Input },
}

impl RoundError {
    /// Bad input the caller can fix by submitting something else.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RoundError::EmptyDeck)
    }
}

/// One player against the house. Owns the shoe and both seats for the whole
/// session and drives each round from bet to settlement.
#[derive(Debug)]
pub struct Table {
    pub config: TableConfig,
    player: Participant,
    dealer: Dealer,
    phase: Phase,
    round: u32,
    last_result: Option<RoundResult>,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        let deck = Deck::standard52(config.rng());
        Self::with_deck(config, deck)
    }

    /// Table dealing from a prepared deck, e.g. a stacked one for replays.
    pub fn with_deck(config: TableConfig, deck: Deck) -> Self {
        let player = Participant::new(config.player_name.clone(), config.starting_bank);
        let dealer = Dealer::new(config.house_bank, deck);
        log::info!(
            "table opened for {} with bank {} (deck seed {})",
            player.name,
            player.bank(),
            dealer.deck().seed()
        );
        Self {
            config,
            player,
            dealer,
            phase: Phase::AwaitingBet,
            round: 0,
            last_result: None,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Participant {
        &self.player
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::Terminal
    }

    /// Cards in the shoe plus cards in both hands.
    pub fn cards_accounted(&self) -> usize {
        self.dealer.deck().len() + self.player.hand().len() + self.dealer.hand().len()
    }

    /// Routes an input to the matching submit call.
    pub fn submit(
        &mut self,
        input: Input,
        events: &mut EventBus,
    ) -> Result<TableSnapshot, RoundError> {
        match input {
            Input::Bet(amount) => self.submit_bet(amount, events),
            Input::Action(action) => self.submit_action(action, events),
            Input::Continue(keep_playing) => self.submit_continue(keep_playing, events),
        }
    }

    fn illegal(&self, input: Input) -> RoundError {
        RoundError::IllegalAction {
            phase: self.phase,
            input,
        }
    }

    fn transition(&mut self, to: Phase, events: &mut EventBus) {
        let from = self.phase;
        self.phase = to;
        log::debug!("round {}: {:?} -> {:?}", self.round, from, to);
        events.push(Event::PhaseChanged { from, to });
        self.publish(events);
    }
}
