use super::*;
use crate::*;

impl Table {
    pub fn submit_action(
        &mut self,
        action: PlayerAction,
        events: &mut EventBus,
    ) -> Result<TableSnapshot, RoundError> {
        if self.phase != Phase::PlayerTurn {
            return Err(self.illegal(Input::Action(action)));
        }
        let result = match action {
            PlayerAction::Hit => self.hit(events),
            PlayerAction::Stand => self.stand(events),
        };
        self.abort_on_empty_deck(result, events)?;
        Ok(self.snapshot())
    }

    fn hit(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        self.deal_to(SeatKind::Player, true, events)?;
        let total = self.player.total();
        events.push(Event::PlayerHit { total });
        if total > BLACKJACK {
            log::info!("{} busts with {total}", self.player.name);
            events.push(Event::PlayerBusted { total });
            self.settle(Outcome::PlayerBust, events);
        } else {
            self.publish(events);
        }
        Ok(())
    }

    fn stand(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        let total = self.player.total();
        events.push(Event::PlayerStood { total });
        self.reveal_hole_card(events);
        self.transition(Phase::DealerTurn, events);
        self.play_dealer(events)?;
        let outcome = decide_outcome(self.player.hand(), self.dealer.hand());
        self.settle(outcome, events);
        Ok(())
    }

    fn play_dealer(&mut self, events: &mut EventBus) -> Result<(), RoundError> {
        let policy = self.config.dealer_policy();
        while policy.should_hit(self.dealer.hand()) {
            self.deal_to(SeatKind::Dealer, true, events)?;
            events.push(Event::DealerHit {
                total: self.dealer.total(),
            });
        }
        let total = self.dealer.total();
        if total > BLACKJACK {
            log::debug!("dealer busts with {total}");
            events.push(Event::DealerBusted { total });
        } else {
            log::debug!("dealer stands on {total}");
            events.push(Event::DealerStood { total });
        }
        Ok(())
    }
}
