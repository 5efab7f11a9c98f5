//! ttt_match - terminal tic-tac-toe
//!
//! Interactive best-of-N matches against the computer, or computer-only
//! simulations.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::{StdinLock, Stdout};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use ttt_match::{
    Console, FirstMoverPolicy, Marker, Match, MatchConfig, Player, Prompter, RoundReport,
    ScriptedPrompter, SharedPrompter, Strategy, TurnEvent, render_history, render_match,
    render_round,
};

type StdConsole = Console<StdinLock<'static>, Stdout>;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            win_score,
            strategy,
            first_mover,
            seed,
        } => {
            let config = load_config(config, win_score, strategy, first_mover, seed)?;
            run_play(&config)
        }
        Command::Simulate {
            config,
            matches,
            opponent,
            seed,
            json,
        } => {
            let config = load_config(config, None, None, None, seed)?;
            run_simulation(&config, matches, opponent, json)
        }
    }
}

/// Reads the config file, if any, and applies command-line overrides.
#[instrument]
fn load_config(
    path: Option<PathBuf>,
    win_score: Option<u32>,
    strategy: Option<Strategy>,
    first_mover: Option<FirstMoverPolicy>,
    seed: Option<u64>,
) -> Result<MatchConfig> {
    let mut config = match path {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };
    if let Some(win_score) = win_score {
        config = config.with_win_score(win_score)?;
    }
    if let Some(strategy) = strategy {
        config = config.with_strategy(strategy);
    }
    if let Some(first_mover) = first_mover {
        config = config.with_first_mover(first_mover);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn session_rng(config: &MatchConfig) -> StdRng {
    StdRng::seed_from_u64((*config.seed()).unwrap_or_else(rand::random))
}

/// Human against computer, match after match until the player stops.
#[instrument(skip_all, fields(win_score = config.win_score()))]
fn run_play(config: &MatchConfig) -> Result<()> {
    let console = SharedPrompter::new(Console::stdio());
    let mut asker = console.clone();
    let mut rng = session_rng(config);

    console.borrow_mut().show("Welcome to tic-tac-toe!")?;
    let name = asker.request_free_text("What is your name", true)?;
    let marker = console
        .borrow_mut()
        .request_marker("Choose your marker (a single character)", None)?;
    let computer_marker = marker.counterpart();
    let computer_name = match config.computer_name() {
        Some(name) => name.clone(),
        None => asker.request_free_text("What is the computer's name", true)?,
    };
    console
        .borrow_mut()
        .show(format!("{} plays {}.", computer_name, computer_marker))?;

    let human = Player::interactive(&name, marker, console.clone());
    let computer = Player::automated(
        &computer_name,
        computer_marker,
        *config.strategy(),
        Some(rng.random()),
    );

    let seat = config.first_mover().resolve(&mut asker, &mut rng)?;
    let mut game = Match::new(
        human,
        computer,
        seat.pick(marker, computer_marker),
        config,
    )?;

    loop {
        play_match(&mut game, &console)?;
        if !asker.request_yes_no("Play another match?")? {
            break;
        }
        let seat = config.first_mover().resolve(&mut asker, &mut rng)?;
        game.start_next_match(game.seat_marker(seat))?;
    }

    if asker.request_yes_no("Would you like to see the game history?")? {
        console.borrow_mut().show(render_history(game.history()))?;
    }
    console.borrow_mut().show("Thanks for playing!")?;
    info!(matches = game.match_number(), "Session finished");
    Ok(())
}

fn play_match(game: &mut Match, console: &SharedPrompter<StdConsole>) -> Result<()> {
    loop {
        let report = play_round(game, console)?;
        if report.match_winner().is_some() {
            return Ok(());
        }
        console
            .clone()
            .request_free_text("Press Enter to continue", false)?;
        game.reset_round()?;
    }
}

fn play_round(game: &mut Match, console: &SharedPrompter<StdConsole>) -> Result<RoundReport> {
    loop {
        {
            let mut out = console.borrow_mut();
            out.clear()?;
            out.show(render_match(&game.snapshot()))?;
        }

        if let TurnEvent::RoundConcluded { report, .. } = game.play_turn()? {
            let mut out = console.borrow_mut();
            out.clear()?;
            out.show(render_round(&report))?;
            return Ok(report);
        }
    }
}

/// Computer against computer; prints the resulting history.
#[instrument(skip(config), fields(strategy = %config.strategy()))]
fn run_simulation(config: &MatchConfig, matches: u32, opponent: Strategy, json: bool) -> Result<()> {
    let mut rng = session_rng(config);
    // Nobody to ask, so an `ask` policy falls back to a coin flip
    let policy = match config.first_mover() {
        FirstMoverPolicy::Ask => FirstMoverPolicy::Random,
        other => *other,
    };
    let mut no_prompts = ScriptedPrompter::default();

    let name = config
        .computer_name()
        .clone()
        .unwrap_or_else(|| "Computer".to_string());
    let first = Player::automated(&name, Marker::X, *config.strategy(), Some(rng.random()));
    let second = Player::automated("Opponent", Marker::O, opponent, Some(rng.random()));

    let seat = policy.resolve(&mut no_prompts, &mut rng)?;
    let mut game = Match::new(first, second, seat.pick(Marker::X, Marker::O), config)?;
    let mut wins = [0u32; 2];

    for number in 1..=matches {
        if number > 1 {
            let seat = policy.resolve(&mut no_prompts, &mut rng)?;
            game.start_next_match(game.seat_marker(seat))?;
        }
        loop {
            let report = game.play_round()?;
            if let Some(winner) = report.match_winner() {
                let seat = usize::from(*winner != Marker::X);
                wins[seat] += 1;
                break;
            }
            game.reset_round()?;
        }
    }

    info!(matches, first = wins[0], second = wins[1], "Simulation finished");
    if json {
        println!("{}", serde_json::to_string_pretty(game.history())?);
    } else {
        println!("{}", render_history(game.history()));
        let [first, second] = game.players();
        println!(
            "\nMatches won: {} {}, {} {}",
            first.name(),
            wins[0],
            second.name(),
            wins[1]
        );
    }
    Ok(())
}
