//! Terminal frontend for Rock-Paper-Scissors-Spock-Lizard.

mod terminal;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use rpsls_core::config::DEFAULT_WINNING_SCORE;
use rpsls_core::{Console, GameConfig, Notice, PhraseTable, RpsError, Session};

use terminal::TerminalConsole;

#[derive(Parser)]
#[command(
    name = "rpsls",
    about = "Rock-Paper-Scissors-Spock-Lizard against the computer",
    version
)]
struct Cli {
    /// Round wins needed to take a match
    #[arg(short, long, default_value_t = DEFAULT_WINNING_SCORE)]
    target: u32,

    /// RNG seed for a reproducible opponent
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with winning phrases, keyed by winner then loser
    #[arg(short, long)]
    phrases: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log round details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let phrases = match &cli.phrases {
        Some(path) => {
            PhraseTable::from_path(path).map_err(|e| format!("{}: {e}", path.display()))?
        }
        None => PhraseTable::builtin(),
    };

    let mut config = GameConfig::default().with_winning_score(cli.target);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let clear_screen = stdout.is_terminal();
    let mut console = TerminalConsole::new(stdin.lock(), stdout.lock(), clear_screen);

    match Session::new(config, phrases).run(&mut console) {
        Ok(_) => Ok(()),
        Err(RpsError::InputClosed) => {
            log::debug!("input closed; ending session");
            console.show(Notice::Farewell).map_err(|e| e.to_string())
        }
        Err(e) => Err(e.to_string()),
    }
}
