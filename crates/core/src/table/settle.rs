use super::*;
use crate::*;

impl Table {
    /// Pays out, recycles both hands into the shoe and parks the table in
    /// `Settlement`, or ends the session when the player can no longer
    /// cover the minimum.
    pub(super) fn settle(&mut self, outcome: Outcome, events: &mut EventBus) {
        self.reveal_hole_card(events);
        let bet = self.player.bet();
        let pot = bet.saturating_add(self.dealer.bet());
        let player_cards = self.player.hand().to_vec();
        let dealer_cards = self.dealer.hand().to_vec();
        let player_total = self.player.total();
        let dealer_total = self.dealer.total();

        let mut spent = Vec::with_capacity(player_cards.len() + dealer_cards.len());
        let payout = match outcome {
            Outcome::Natural | Outcome::PlayerWin | Outcome::DealerBust => {
                let ratio = if outcome == Outcome::Natural {
                    self.config.natural_payout
                } else {
                    PayoutRatio::EVEN_MONEY
                };
                let payout = ratio.payout(bet);
                spent.extend(self.player.settle_win(payout));
                spent.extend(self.dealer.settle_lose());
                // Pot covers an even-money win; anything above comes from the house.
                self.dealer.cover(payout.saturating_sub(pot));
                payout
            }
            Outcome::PlayerBust | Outcome::DealerWin => {
                spent.extend(self.player.settle_lose());
                spent.extend(self.dealer.settle_win(pot));
                0
            }
            Outcome::Push => {
                spent.extend(self.player.settle_push());
                spent.extend(self.dealer.settle_push());
                bet
            }
        };
        self.dealer.return_cards_to_deck(spent);

        let result = RoundResult {
            round: self.round,
            outcome,
            bet,
            payout,
            player_cards,
            dealer_cards,
            player_total,
            dealer_total,
            player_bank: self.player.bank(),
            dealer_bank: self.dealer.bank(),
        };
        log::info!(
            "round {} settled: {} ({} vs {}), bet {bet}, paid {payout}, bank {}",
            self.round,
            outcome.label(),
            player_total,
            dealer_total,
            result.player_bank
        );
        events.push(Event::RoundSettled {
            outcome,
            payout,
            player_bank: result.player_bank,
            dealer_bank: result.dealer_bank,
        });
        self.last_result = Some(result);
        self.transition(Phase::Settlement, events);

        if self.player.bank() < self.config.table_minimum() {
            log::info!("{} cannot cover the table minimum", self.player.name);
            self.end_session(events);
        }
    }
}
