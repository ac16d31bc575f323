//! Multi-Wordle - CLI
//!
//! Line-based terminal front end: several Wordle games at once.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use multi_wordle::{
    commands::{load_word_source, run_play, start_session},
    config::{Config, ConfigError, FieldLength, Overrides},
    core::{Word, evaluate},
    logging::init_tracing,
    output::formatters::{Cell, paint},
    wordlists::WordSourceError,
};
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "multi_wordle",
    about = "Play several Wordle games at once with a single stream of guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(flatten)]
    overrides: Overrides,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a session (default)
    Play,

    /// Print the resolved configuration
    Config,

    /// Show the clue for a guess against a target
    Evaluate {
        /// The secret word
        target: String,

        /// The guessed word, same length as the target
        guess: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

/// Process status for a failed run
fn exit_code(err: &anyhow::Error) -> u8 {
    if let Some(err) = err.downcast_ref::<ConfigError>() {
        err.exit_code()
    } else if let Some(err) = err.downcast_ref::<WordSourceError>() {
        err.exit_code()
    } else {
        1
    }
}

fn run(cli: &Cli) -> Result<()> {
    let color = !cli.no_color && io::stdout().is_terminal();
    colored::control::set_override(color);

    match &cli.command {
        Some(Commands::Evaluate { target, guess }) => run_evaluate_command(target, guess, color),
        Some(Commands::Config) => {
            let config = resolve_config(cli)?;
            println!("{config}");
            Ok(())
        }
        Some(Commands::Play) | None => run_play_command(&resolve_config(cli)?, color),
    }
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let config = Config::load(cli.config.as_deref())?
        .with_overrides(&cli.overrides)
        .normalized();
    Ok(config)
}

fn run_play_command(config: &Config, color: bool) -> Result<()> {
    let words = load_word_source(config)?;
    let session = start_session(config, &words, &mut rand::rng())?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_play(config, session, &words, stdin.lock(), &mut stdout, color)?;
    Ok(())
}

fn run_evaluate_command(target: &str, guess: &str, color: bool) -> Result<()> {
    let target = Word::new(target).context("invalid target word")?;
    let guess = Word::new(guess).context("invalid guess word")?;
    if target.len() != guess.len() {
        anyhow::bail!(
            "guess has {} letters but the target has {}",
            guess.len(),
            target.len()
        );
    }

    let cells: Vec<Cell> = guess
        .letters()
        .iter()
        .zip(evaluate(&target, &guess))
        .map(|(&letter, clue)| Cell {
            ch: char::from(letter),
            tone: clue.into(),
        })
        .collect();

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", paint(&cells, FieldLength::Long, color))?;
    if !color {
        let marks: Vec<String> = evaluate(&target, &guess)
            .iter()
            .map(|clue| format!("{clue:?}"))
            .collect();
        writeln!(stdout, "{}", marks.join(" "))?;
    }
    Ok(())
}
