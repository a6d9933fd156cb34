use super::*;
use crate::*;

impl Table {
    /// Takes the player's stake and deals the round. The dealer mirrors the
    /// stake so the pot is always twice the bet.
    pub fn submit_bet(
        &mut self,
        amount: Chips,
        events: &mut EventBus,
    ) -> Result<TableSnapshot, RoundError> {
        if self.phase != Phase::AwaitingBet {
            return Err(self.illegal(Input::Bet(amount)));
        }
        let min = self.config.table_minimum();
        if amount < min {
            return Err(RoundError::InvalidBet { amount, min });
        }
        let phase = self.phase;
        self.player.place_bet(amount).map_err(|err| match err {
            BetError::InsufficientFunds { bet, bank } => RoundError::InsufficientFunds { bet, bank },
            BetError::NotPositive(amount) => RoundError::InvalidBet { amount, min },
            BetError::AlreadyPlaced(_) => RoundError::IllegalAction {
                phase,
                input: Input::Bet(amount),
            },
        })?;
        if let Err(err) = self.dealer.match_bet(amount) {
            log::warn!("house could not match the bet: {err}");
            self.player.settle_push();
            return Err(self.illegal(Input::Bet(amount)));
        }

        self.round += 1;
        log::info!("round {} opened with a bet of {amount}", self.round);
        events.push(Event::RoundStarted {
            round: self.round,
            bet: amount,
        });
        self.transition(Phase::InitialDeal, events);
        let dealt = self.initial_deal(events);
        self.abort_on_empty_deck(dealt, events)?;
        Ok(self.snapshot())
    }

    /// `true` after a settlement opens the next round; `false` ends the
    /// session, either after a settlement or instead of betting.
    pub fn submit_continue(
        &mut self,
        keep_playing: bool,
        events: &mut EventBus,
    ) -> Result<TableSnapshot, RoundError> {
        match (self.phase, keep_playing) {
            (Phase::Settlement, true) => self.transition(Phase::AwaitingBet, events),
            (Phase::Settlement | Phase::AwaitingBet, false) => self.end_session(events),
            _ => return Err(self.illegal(Input::Continue(keep_playing))),
        }
        Ok(self.snapshot())
    }

    pub(super) fn end_session(&mut self, events: &mut EventBus) {
        log::info!(
            "session over after {} rounds, {} leaves with {}",
            self.round,
            self.player.name,
            self.player.bank()
        );
        events.push(Event::SessionEnded {
            rounds: self.round,
            player_bank: self.player.bank(),
        });
        self.transition(Phase::Terminal, events);
    }
}
