use crate::{
    choose_action, stop_loss_hit, target_reached, AutoAction, AutoplayConfig, AutoplayError,
    AutoplayResult, RoundRecord, RunStatus, Simulator, SummaryStats, TargetConfig,
};
use blackjack_core::Phase;
use std::time::Instant;

#[derive(Debug, Clone, Default)]
pub struct AutoplayRequest {
    pub config: AutoplayConfig,
    pub targets: TargetConfig,
    /// Keep a per-round record in the result.
    pub record_rounds: bool,
}

/// Plays until a target, the round limit, or the end of the player's bank.
/// A session that ends on its own terms leaves the table in `Terminal`.
pub fn run_autoplay(
    sim: &mut Simulator,
    request: &AutoplayRequest,
) -> Result<AutoplayResult, AutoplayError> {
    let started_at = Instant::now();
    let config = &request.config;
    let table_minimum = sim.table.config.table_minimum();
    let starting_bank = sim.table.player().bank();
    let mut summary = SummaryStats::default();
    let mut records = Vec::new();
    let mut actions: Vec<AutoAction> = Vec::new();
    let mut event_count = 0;
    let mut recorded_round = sim.table.last_result().map_or(0, |result| result.round);

    let status = loop {
        let snapshot = sim.snapshot();
        if snapshot.phase == Phase::AwaitingBet {
            let bank = snapshot.player_bank;
            let stop = if target_reached(bank, request.targets) {
                Some(RunStatus::TargetReached)
            } else if stop_loss_hit(starting_bank, bank, request.targets) {
                Some(RunStatus::StopLoss)
            } else if summary.rounds >= config.max_rounds {
                Some(RunStatus::MaxRounds)
            } else {
                None
            };
            if let Some(status) = stop {
                sim.apply(AutoAction::Quit)?;
                sim.take_event_count();
                break status;
            }
        }

        let Some(action) = choose_action(&snapshot, table_minimum, config) else {
            break RunStatus::OutOfMoney;
        };
        match sim.apply(action) {
            Ok(_) => {}
            Err(AutoplayError::Round(err)) if !err.is_recoverable() => {
                log::warn!("autoplay stopped in round {}: {err}", sim.table.round());
                sim.take_event_count();
                break RunStatus::Aborted;
            }
            Err(err) => return Err(err),
        }
        if !matches!(action, AutoAction::Continue | AutoAction::Quit) {
            actions.push(action);
        }
        event_count += sim.take_event_count();

        if let Some(result) = sim.table.last_result() {
            if result.round != recorded_round {
                recorded_round = result.round;
                summary.record(result.outcome, result.bet, result.payout);
                let record =
                    RoundRecord::from_result(result, std::mem::take(&mut actions), event_count);
                event_count = 0;
                if request.record_rounds {
                    records.push(record);
                }
            }
        }
    };

    summary.wall_time_ms = started_at.elapsed().as_millis() as u64;
    let final_bank = sim.table.player().bank();
    log::info!(
        "autoplay finished ({status:?}) after {} rounds: bank {starting_bank} -> {final_bank}",
        summary.rounds
    );
    Ok(AutoplayResult {
        status,
        seed: sim.table.dealer().deck().seed(),
        starting_bank,
        final_bank,
        summary,
        rounds: records,
    })
}
