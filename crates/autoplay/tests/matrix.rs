use blackjack_autoplay::{
    choose_action, run_autoplay, stop_loss_hit, target_reached, write_json, write_text,
    AutoAction,
    AutoplayConfig, AutoplayRequest, AutoplayResult, RunStatus, Simulator, SummaryStats,
    TargetConfig, DEFAULT_SEED,
};
use blackjack_core::{Card, Deck, Outcome, Phase, Rank, RngState, Suit, TableConfig};
use std::time::{SystemTime, UNIX_EPOCH};

fn snapshot_in(phase: Phase, total: u8, bank: i64) -> blackjack_core::TableSnapshot {
    let sim = Simulator::seeded(TableConfig::default(), 1);
    let mut snapshot = sim.snapshot();
    snapshot.phase = phase;
    snapshot.player_total = total;
    snapshot.player_bank = bank;
    snapshot
}

macro_rules! policy_case {
    ($name:ident, $phase:expr, $total:expr, $bank:expr, $min:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let config = AutoplayConfig::default();
            let snapshot = snapshot_in($phase, $total, $bank);
            assert_eq!(choose_action(&snapshot, $min, &config), $expected);
        }
    };
}

policy_case!(policy_bets_flat, Phase::AwaitingBet, 0, 1000, 1, Some(AutoAction::Bet { amount: 10 }));
policy_case!(policy_bet_clamped_to_bank, Phase::AwaitingBet, 0, 4, 1, Some(AutoAction::Bet { amount: 4 }));
policy_case!(policy_bet_raised_to_minimum, Phase::AwaitingBet, 0, 1000, 25, Some(AutoAction::Bet { amount: 25 }));
policy_case!(policy_quits_below_minimum, Phase::AwaitingBet, 0, 20, 25, Some(AutoAction::Quit));
policy_case!(policy_hits_on_twelve, Phase::PlayerTurn, 12, 990, 1, Some(AutoAction::Hit));
policy_case!(policy_hits_on_sixteen, Phase::PlayerTurn, 16, 990, 1, Some(AutoAction::Hit));
policy_case!(policy_stands_on_seventeen, Phase::PlayerTurn, 17, 990, 1, Some(AutoAction::Stand));
policy_case!(policy_stands_on_twenty, Phase::PlayerTurn, 20, 990, 1, Some(AutoAction::Stand));
policy_case!(policy_continues_after_settlement, Phase::Settlement, 0, 990, 1, Some(AutoAction::Continue));
policy_case!(policy_idle_when_terminal, Phase::Terminal, 0, 0, 1, None);

macro_rules! target_case {
    ($name:ident, $start:expr, $bank:expr, $target:expr, $stop:expr, $reached:expr, $stopped:expr) => {
        #[test]
        fn $name() {
            let targets = TargetConfig {
                target_bank: $target,
                stop_loss: $stop,
            };
            assert_eq!(target_reached($bank, targets), $reached);
            assert_eq!(stop_loss_hit($start, $bank, targets), $stopped);
        }
    };
}

target_case!(target_none, 1000, 5000, None, None, false, false);
target_case!(target_below, 1000, 1100, Some(1200), None, false, false);
target_case!(target_exact, 1000, 1200, Some(1200), None, true, false);
target_case!(target_above, 1000, 1300, Some(1200), None, true, false);
target_case!(stop_loss_short, 1000, 950, None, Some(100), false, false);
target_case!(stop_loss_exact, 1000, 900, None, Some(100), false, true);
target_case!(stop_loss_and_target, 1000, 800, Some(1200), Some(100), false, true);

#[test]
fn action_inputs_cover_every_variant() {
    use blackjack_core::{Input, PlayerAction};
    assert_eq!(AutoAction::Bet { amount: 5 }.to_input(), Input::Bet(5));
    assert_eq!(AutoAction::Hit.to_input(), Input::Action(PlayerAction::Hit));
    assert_eq!(AutoAction::Stand.to_input(), Input::Action(PlayerAction::Stand));
    assert_eq!(AutoAction::Continue.to_input(), Input::Continue(true));
    assert_eq!(AutoAction::Quit.to_input(), Input::Continue(false));
}

#[test]
fn summary_buckets_outcomes() {
    let mut summary = SummaryStats::default();
    summary.record(Outcome::Natural, 10, 25);
    summary.record(Outcome::DealerBust, 10, 20);
    summary.record(Outcome::PlayerBust, 10, 0);
    summary.record(Outcome::Push, 10, 10);
    assert_eq!(summary.rounds, 4);
    assert_eq!((summary.wins, summary.losses, summary.pushes), (2, 1, 1));
    assert_eq!(summary.naturals, 1);
    assert_eq!(summary.dealer_busts, 1);
    assert_eq!(summary.player_busts, 1);
    assert_eq!(summary.wagered, 40);
    assert_eq!(summary.net, 15);
}

fn request(rounds: u32) -> AutoplayRequest {
    AutoplayRequest {
        config: AutoplayConfig {
            max_rounds: rounds,
            ..AutoplayConfig::default()
        },
        targets: TargetConfig::default(),
        record_rounds: true,
    }
}

#[test]
fn seeded_runs_repeat() {
    let play = || {
        let mut sim = Simulator::seeded(TableConfig::default(), 31);
        run_autoplay(&mut sim, &request(40)).expect("autoplay")
    };
    let first = play();
    let second = play();
    assert_eq!(first.rounds, second.rounds);
    assert_eq!(first.final_bank, second.final_bank);
    assert_eq!(first.seed, 31);
}

#[test]
fn max_rounds_ends_session() {
    let mut sim = Simulator::seeded(TableConfig::default(), 5);
    let result = run_autoplay(&mut sim, &request(25)).expect("autoplay");
    assert_eq!(result.status, RunStatus::MaxRounds);
    assert_eq!(result.summary.rounds, 25);
    assert_eq!(result.rounds.len(), 25);
    let summary = &result.summary;
    assert_eq!(summary.wins + summary.losses + summary.pushes, summary.rounds);
    assert_eq!(result.starting_bank + summary.net, result.final_bank);
    assert_eq!(sim.table.phase(), Phase::Terminal);
    assert_eq!(sim.table.cards_accounted(), 52);
}

#[test]
fn small_bank_runs_dry() {
    let config = TableConfig {
        starting_bank: 30,
        ..TableConfig::default()
    };
    let mut sim = Simulator::seeded(config, 8);
    let mut request = request(10_000);
    request.config.bet = 30;
    let result = run_autoplay(&mut sim, &request).expect("autoplay");
    assert_eq!(result.status, RunStatus::OutOfMoney);
    assert_eq!(result.final_bank, 0);
    assert!(sim.table.is_over());
}

#[test]
fn stacked_round_is_recorded() {
    let top = [
        (Rank::Ten, Suit::Spades),
        (Rank::Nine, Suit::Clubs),
        (Rank::Four, Suit::Hearts),
        (Rank::Eight, Suit::Diamonds),
        (Rank::Five, Suit::Clubs),
    ];
    let mut cards: Vec<Card> = top.iter().map(|(r, s)| Card::new(*r, *s)).collect();
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            if !top.contains(&(rank, suit)) {
                cards.push(Card::new(rank, suit));
            }
        }
    }
    let deck = Deck::from_top(cards, RngState::from_seed(3));
    let mut sim = Simulator::with_deck(TableConfig::default(), deck);
    let result = run_autoplay(&mut sim, &request(1)).expect("autoplay");

    let record = &result.rounds[0];
    assert_eq!(
        record.actions,
        vec![AutoAction::Bet { amount: 10 }, AutoAction::Hit, AutoAction::Stand]
    );
    assert_eq!(record.player_total, 19);
    assert_eq!(record.dealer_total, 17);
    assert_eq!(record.outcome, Outcome::PlayerWin);
    assert_eq!(record.player_cards[0], "10 of Spades");
    assert_eq!(result.final_bank, 1010);
}

#[test]
fn target_bank_stops_early() {
    let mut sim = Simulator::seeded(TableConfig::default(), 12);
    let mut request = request(500);
    request.targets.target_bank = Some(1000);
    let result = run_autoplay(&mut sim, &request).expect("autoplay");
    assert_eq!(result.status, RunStatus::TargetReached);
    assert_eq!(result.summary.rounds, 0);
}

#[test]
fn json_trace_reads_back() {
    let mut sim = Simulator::seeded(TableConfig::default(), 77);
    let result = run_autoplay(&mut sim, &request(5)).expect("autoplay");
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let path = std::env::temp_dir()
        .join(format!("blackjack_autoplay_{}_{nanos}", std::process::id()))
        .join("trace.json");
    write_json(&path, &result).expect("write trace");
    let raw = std::fs::read_to_string(&path).expect("read trace");
    let _ = std::fs::remove_dir_all(path.parent().expect("parent"));
    let parsed: AutoplayResult = serde_json::from_str(&raw).expect("parse trace");
    assert_eq!(parsed, result);
    assert!(result.to_text_report().contains("status: max rounds"));
}

#[test]
fn text_report_is_written() {
    let mut sim = Simulator::seeded(TableConfig::default(), DEFAULT_SEED);
    let result = run_autoplay(&mut sim, &request(3)).expect("autoplay");
    assert_eq!(result.seed, DEFAULT_SEED);
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let path = std::env::temp_dir()
        .join(format!("blackjack_report_{}_{nanos}", std::process::id()))
        .join("report.txt");
    write_text(&path, &result).expect("write report");
    let raw = std::fs::read_to_string(&path).expect("read report");
    let _ = std::fs::remove_dir_all(path.parent().expect("parent"));
    assert_eq!(raw, result.to_text_report());
    assert!(raw.contains("status: "));
    assert!(raw.contains(&format!("seed: {DEFAULT_SEED}")));
}
