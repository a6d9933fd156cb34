use crate::{AutoAction, AutoplayError};
use blackjack_core::{Chips, Outcome, RoundResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RunStatus {
    TargetReached,
    StopLoss,
    MaxRounds,
    OutOfMoney,
    Aborted,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u32,
    pub actions: Vec<AutoAction>,
    pub outcome: Outcome,
    pub bet: Chips,
    pub payout: Chips,
    pub player_cards: Vec<String>,
    pub dealer_cards: Vec<String>,
    pub player_total: u8,
    pub dealer_total: u8,
    pub bank_after: Chips,
    pub event_count: usize,
}

impl RoundRecord {
    pub fn from_result(result: &RoundResult, actions: Vec<AutoAction>, event_count: usize) -> Self {
        Self {
            round: result.round,
            actions,
            outcome: result.outcome,
            bet: result.bet,
            payout: result.payout,
            player_cards: result.player_cards.iter().map(|c| c.to_string()).collect(),
            dealer_cards: result.dealer_cards.iter().map(|c| c.to_string()).collect(),
            player_total: result.player_total,
            dealer_total: result.dealer_total,
            bank_after: result.player_bank,
            event_count,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryStats {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub naturals: u32,
    pub player_busts: u32,
    pub dealer_busts: u32,
    pub wagered: Chips,
    pub net: Chips,
    #[serde(default)]
    pub wall_time_ms: u64,
}

impl SummaryStats {
    pub fn record(&mut self, outcome: Outcome, bet: Chips, payout: Chips) {
        self.rounds += 1;
        self.wagered += bet;
        self.net += payout - bet;
        if outcome.player_won() {
            self.wins += 1;
        } else if outcome.dealer_won() {
            self.losses += 1;
        } else {
            self.pushes += 1;
        }
        match outcome {
            Outcome::Natural => self.naturals += 1,
            Outcome::PlayerBust => self.player_busts += 1,
            Outcome::DealerBust => self.dealer_busts += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AutoplayResult {
    pub status: RunStatus,
    pub seed: u64,
    pub starting_bank: Chips,
    pub final_bank: Chips,
    pub summary: SummaryStats,
    #[serde(default)]
    pub rounds: Vec<RoundRecord>,
}

impl AutoplayResult {
    pub fn to_text_report(&self) -> String {
        let summary = &self.summary;
        let mut lines = vec![
            format!("status: {}", run_status_label(self.status)),
            format!(
                "bank: {} -> {} (net {:+})",
                self.starting_bank, self.final_bank, summary.net
            ),
            format!(
                "rounds: {} won {} lost {} pushed {}",
                summary.rounds, summary.wins, summary.losses, summary.pushes
            ),
            format!(
                "naturals: {} player busts: {} dealer busts: {}",
                summary.naturals, summary.player_busts, summary.dealer_busts
            ),
            format!("seed: {} wall_ms: {}", self.seed, summary.wall_time_ms),
        ];
        if !self.rounds.is_empty() {
            lines.push(String::new());
            lines.push("rounds:".to_string());
        }
        for record in &self.rounds {
            let actions = record
                .actions
                .iter()
                .map(AutoAction::short_label)
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!(
                "  round {:>4} | {} | {} vs {} | bet {} paid {} bank {}",
                record.round,
                record.outcome.label(),
                record.player_total,
                record.dealer_total,
                record.bet,
                record.payout,
                record.bank_after
            ));
            lines.push(format!("    player: {}", record.player_cards.join(", ")));
            lines.push(format!("    dealer: {}", record.dealer_cards.join(", ")));
            lines.push(format!("    actions: [{actions}] events: {}", record.event_count));
        }
        lines.join("\n")
    }
}

fn run_status_label(status: RunStatus) -> &'static str {
    match status {
        RunStatus::TargetReached => "target reached",
        RunStatus::StopLoss => "stop loss",
        RunStatus::MaxRounds => "max rounds",
        RunStatus::OutOfMoney => "out of money",
        RunStatus::Aborted => "aborted",
    }
}

pub fn write_json(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(result)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}
