use super::*;
use crate::*;

impl Table {
    /// Player, dealer up, player, dealer hole. A player natural settles
    /// on the spot.
    pub(super) fn initial_deal(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        let mut stray = self.player.clear_hand();
        stray.extend(self.dealer.clear_hand());
        if !stray.is_empty() {
            log::warn!("{} stray cards returned before the deal", stray.len());
            self.dealer.return_cards_to_deck(stray);
        }

        self.deal_to(SeatKind::Player, true, events)?;
        self.deal_to(SeatKind::Dealer, true, events)?;
        self.deal_to(SeatKind::Player, true, events)?;
        self.deal_to(SeatKind::Dealer, false, events)?;

        if is_natural(self.player.hand()) {
            self.reveal_hole_card(events);
            let outcome = if is_natural(self.dealer.hand()) {
                Outcome::Push
            } else {
                Outcome::Natural
            };
            log::info!("{} is dealt a natural", self.player.name);
            self.settle(outcome, events);
            return Ok(());
        }
        self.transition(Phase::PlayerTurn, events);
        Ok(())
    }

    pub(super) fn deal_to(
        &mut self,
        seat: SeatKind,
        face_up: bool,
        events: &mut EventBus,
    ) -> Result<Card, RoundError> {
        let card = self.dealer.deal(face_up).map_err(|err| {
            log::warn!("draw failed in round {}: {err}", self.round);
            RoundError::EmptyDeck
        })?;
        match seat {
            SeatKind::Player => self.player.receive_card(card),
            SeatKind::Dealer => self.dealer.receive_card(card),
        }
        if face_up {
            log::debug!("{seat:?} receives {card}");
        } else {
            log::debug!("{seat:?} receives a face-down card");
        }
        events.push(Event::CardDealt {
            to: seat,
            card: CardView::of(&card),
        });
        Ok(card)
    }

    pub(super) fn reveal_hole_card(&mut self, events: &mut EventBus) {
        for card in self.dealer.reveal_hole_card() {
            log::debug!("dealer reveals {card}");
            events.push(Event::HoleCardRevealed { card });
        }
    }

    pub(super) fn abort_on_empty_deck(
        &mut self,
        result: Result<(), RoundError>,
        events: &mut EventBus,
    ) -> Result<(), RoundError> {
        if let Err(RoundError::EmptyDeck) = result {
            self.abort_round(events);
        }
        result
    }

    /// Refunds both stakes and sweeps every card back into the shoe.
    fn abort_round(&mut self, events: &mut EventBus) {
        log::warn!("round {} aborted: deck ran out of cards", self.round);
        let mut cards = self.player.settle_push();
        cards.extend(self.dealer.settle_push());
        self.dealer.return_cards_to_deck(cards);
        events.push(Event::RoundAborted {
            reason: RoundError::EmptyDeck.to_string(),
        });
        self.end_session(events);
    }
}
