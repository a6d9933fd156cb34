use super::*;
use crate::*;

impl Table {
    /// What a renderer may show right now. Face-down cards are redacted and
    /// the dealer total stays hidden until the hole card is turned.
    pub fn snapshot(&self) -> TableSnapshot {
        let player_value = self.player.hand_value();
        let dealer_total = if self.dealer.hole_card_hidden() {
            None
        } else {
            Some(self.dealer.total())
        };
        TableSnapshot {
            phase: self.phase,
            round: self.round,
            player_name: self.player.name.clone(),
            player_hand: self.player.hand().iter().map(CardView::of).collect(),
            dealer_hand: self.dealer.hand().iter().map(CardView::of).collect(),
            player_total: player_value.total,
            player_soft: player_value.soft,
            dealer_total,
            player_bank: self.player.bank(),
            dealer_bank: self.dealer.bank(),
            bet: self.player.bet(),
            deck_remaining: self.dealer.deck().len(),
            last_result: self.last_result.clone(),
        }
    }

    pub(super) fn publish(&self, events: &mut EventBus) {
        events.push(Event::Snapshot(self.snapshot()));
    }
}
