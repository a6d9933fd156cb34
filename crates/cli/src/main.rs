use anyhow::{bail, Context};
use blackjack_autoplay::{
    run_autoplay, write_json, write_text, AutoplayConfig, AutoplayRequest, Simulator,
    TargetConfig, DEFAULT_SEED,
};
use blackjack_core::{
    Card, CardView, Chips, Event, EventBus, Outcome, Phase, PlayerAction, RoundError, RoundResult,
    SeatKind, Table, TableConfig, TableSnapshot,
};
use blackjack_data::load_table_config_or_default;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CliOptions {
    auto: bool,
    seed: Option<u64>,
    config: Option<PathBuf>,
    name: Option<String>,
    rounds: Option<u32>,
    bet: Option<Chips>,
    trace: Option<PathBuf>,
    report: Option<PathBuf>,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        let flag = args[idx].as_str();
        if flag == "--auto" {
            options.auto = true;
            idx += 1;
            continue;
        }
        if !FLAGS_WITH_VALUE.contains(&flag) {
            log::warn!("ignoring unknown argument {flag}");
            idx += 1;
            continue;
        }
        let Some(value) = args.get(idx + 1) else {
            log::warn!("{flag} expects a value");
            break;
        };
        match flag {
            "--seed" => options.seed = parse_number(flag, value),
            "--config" | "-c" => options.config = Some(PathBuf::from(value)),
            "--name" => options.name = Some(value.clone()),
            "--rounds" => options.rounds = parse_number(flag, value),
            "--bet" => options.bet = parse_number(flag, value),
            "--trace" => options.trace = Some(PathBuf::from(value)),
            "--report" => options.report = Some(PathBuf::from(value)),
            _ => {}
        }
        idx += 2;
    }
    options
}

const FLAGS_WITH_VALUE: &[&str] = &[
    "--seed", "--config", "-c", "--name", "--rounds", "--bet", "--trace", "--report",
];

fn parse_number<T: FromStr>(flag: &str, value: &str) -> Option<T> {
    match value.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            log::warn!("ignoring {flag} {value}: not a number");
            None
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if let Err(err) = run(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(options: &CliOptions) -> anyhow::Result<()> {
    let mut config = load_table_config_or_default(options.config.as_deref())?;
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    if let Some(name) = options.name.as_ref() {
        config.player_name = name.clone();
    }
    if options.auto {
        return run_auto(config, options);
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(
        config,
        options.name.is_none(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

fn run_auto(config: TableConfig, options: &CliOptions) -> anyhow::Result<()> {
    let defaults = AutoplayConfig::default();
    let seed = config.seed.unwrap_or(DEFAULT_SEED);
    let request = AutoplayRequest {
        config: AutoplayConfig {
            max_rounds: options.rounds.unwrap_or(defaults.max_rounds),
            bet: options.bet.unwrap_or(defaults.bet),
            ..defaults
        },
        targets: TargetConfig::default(),
        record_rounds: options.trace.is_some() || options.report.is_some(),
    };
    let mut sim = Simulator::seeded(config, seed);
    let result = run_autoplay(&mut sim, &request).context("autoplay")?;
    if let Some(path) = options.trace.as_ref() {
        write_json(path, &result).with_context(|| format!("write trace {}", path.display()))?;
        println!("trace written to {}", path.display());
    }
    if let Some(path) = options.report.as_ref() {
        write_text(path, &result).with_context(|| format!("write report {}", path.display()))?;
        println!("report written to {}", path.display());
    }
    let report = result.to_text_report();
    for line in report.lines().take_while(|line| !line.is_empty()) {
        println!("{line}");
    }
    Ok(())
}

fn run_console(
    mut config: TableConfig,
    ask_name: bool,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    writeln!(out, "Welcome to Blackjack!")?;
    if ask_name {
        let prompt = format!("Enter your name [{}]: ", config.player_name);
        if let Some(name) = read_prompt(input, out, &prompt)? {
            if !name.is_empty() {
                config.player_name = name;
            }
        }
    }

    let mut table = Table::new(config);
    let mut events = EventBus::default();
    writeln!(
        out,
        "{} sits down with {} chips.",
        table.player().name,
        table.player().bank()
    )?;

    loop {
        let submitted = match table.phase() {
            Phase::AwaitingBet => {
                let prompt = format!(
                    "You have {} chips. Place your bet (0 to quit): ",
                    table.player().bank()
                );
                match read_prompt(input, out, &prompt)? {
                    None => table.submit_continue(false, &mut events),
                    Some(line) => match line.parse::<Chips>() {
                        Ok(0) => table.submit_continue(false, &mut events),
                        Ok(amount) => table.submit_bet(amount, &mut events),
                        Err(_) => {
                            writeln!(out, "Please enter a whole number of chips.")?;
                            continue;
                        }
                    },
                }
            }
            Phase::PlayerTurn => {
                render_table(out, &table.snapshot())?;
                match read_prompt(input, out, "Hit or stand? [h/s]: ")? {
                    None => table.submit_action(PlayerAction::Stand, &mut events),
                    Some(line) => match parse_action(&line) {
                        Some(action) => table.submit_action(action, &mut events),
                        None => {
                            writeln!(out, "Type h to hit or s to stand.")?;
                            continue;
                        }
                    },
                }
            }
            Phase::Settlement => match read_prompt(input, out, "Play another round? [Y/N]: ")? {
                None => table.submit_continue(false, &mut events),
                Some(line) => match parse_yes_no(&line) {
                    Some(keep_playing) => table.submit_continue(keep_playing, &mut events),
                    None => {
                        writeln!(out, "Please answer Y or N.")?;
                        continue;
                    }
                },
            },
            Phase::Terminal => break,
            phase @ (Phase::InitialDeal | Phase::DealerTurn) => {
                bail!("table left waiting in {phase:?}")
            }
        };

        drain_events(out, &mut events)?;
        match submitted {
            Ok(_) => {}
            Err(err) if err.is_recoverable() => writeln!(out, "{}", describe_error(&err))?,
            Err(err) => {
                writeln!(out, "The round was called off: {err}. Bets were returned.")?;
            }
        }
    }

    writeln!(
        out,
        "Thanks for playing, {}! Final bank: {} chips.",
        table.player().name,
        table.player().bank()
    )?;
    Ok(())
}

fn read_prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> anyhow::Result<Option<String>> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line).context("read input")? == 0 {
        writeln!(out)?;
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn parse_action(line: &str) -> Option<PlayerAction> {
    match line.to_ascii_lowercase().as_str() {
        "h" | "hit" => Some(PlayerAction::Hit),
        "s" | "stand" => Some(PlayerAction::Stand),
        _ => None,
    }
}

fn parse_yes_no(line: &str) -> Option<bool> {
    match line.to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

fn describe_error(err: &RoundError) -> String {
    match err {
        RoundError::InsufficientFunds { bank, .. } => {
            format!("Sorry, you only have {bank} chips.")
        }
        RoundError::InvalidBet { min, .. } => format!("The minimum bet is {min}."),
        other => other.to_string(),
    }
}

fn format_view(view: &CardView) -> String {
    match view.card() {
        Some(card) => card.to_string(),
        None => "<hidden>".to_string(),
    }
}

fn render_table(out: &mut impl Write, snapshot: &TableSnapshot) -> io::Result<()> {
    let dealer = snapshot
        .dealer_hand
        .iter()
        .map(format_view)
        .collect::<Vec<_>>()
        .join(", ");
    let dealer_total = snapshot
        .dealer_total
        .map_or_else(|| "?".to_string(), |total| total.to_string());
    writeln!(out, "Dealer: {dealer} (total {dealer_total})")?;
    let player = snapshot
        .player_hand
        .iter()
        .map(format_view)
        .collect::<Vec<_>>()
        .join(", ");
    let soft = if snapshot.player_soft { ", soft" } else { "" };
    writeln!(
        out,
        "{}: {player} (total {}{soft})",
        snapshot.player_name, snapshot.player_total
    )
}

fn join_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_result(out: &mut impl Write, result: &RoundResult) -> io::Result<()> {
    writeln!(
        out,
        "Dealer: {} (total {})",
        join_cards(&result.dealer_cards),
        result.dealer_total
    )?;
    writeln!(
        out,
        "Player: {} (total {})",
        join_cards(&result.player_cards),
        result.player_total
    )?;
    let verdict = match result.outcome {
        Outcome::Natural => format!("Blackjack! You win {}.", result.net()),
        Outcome::PlayerWin => format!("You win {}.", result.net()),
        Outcome::DealerBust => format!("Dealer busts. You win {}.", result.net()),
        Outcome::PlayerBust => format!("Bust! You lose {}.", result.bet),
        Outcome::DealerWin => format!("Dealer wins. You lose {}.", result.bet),
        Outcome::Push => "Push. Your bet is returned.".to_string(),
    };
    writeln!(out, "{verdict} Bank: {}", result.player_bank)
}

fn drain_events(out: &mut impl Write, events: &mut EventBus) -> io::Result<()> {
    for event in events.drain() {
        log::trace!("event: {event:?}");
        match event {
            Event::RoundStarted { round, bet } => writeln!(out, "-- Round {round}, bet {bet} --")?,
            Event::CardDealt {
                to: SeatKind::Player,
                card,
            } => writeln!(out, "You are dealt {}", format_view(&card))?,
            Event::HoleCardRevealed { card } => writeln!(out, "Dealer reveals {card}")?,
            Event::DealerHit { total } => writeln!(out, "Dealer hits: {total}")?,
            Event::DealerStood { total } => writeln!(out, "Dealer stands on {total}")?,
            Event::DealerBusted { total } => writeln!(out, "Dealer busts with {total}")?,
            Event::PlayerBusted { total } => writeln!(out, "You bust with {total}")?,
            Event::RoundAborted { reason } => writeln!(out, "Round aborted: {reason}")?,
            Event::SessionEnded { rounds, .. } => {
                writeln!(out, "Session over after {rounds} rounds.")?
            }
            Event::Snapshot(snapshot) if snapshot.phase == Phase::Settlement => {
                if let Some(result) = snapshot.last_result.as_ref() {
                    render_result(out, result)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}
