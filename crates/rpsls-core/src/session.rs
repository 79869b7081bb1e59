//! Session loop: matches back to back while the player wants another.

use crate::config::GameConfig;
use crate::console::{Console, Notice, Prompt};
use crate::error::{RpsError, RpsResult};
use crate::game::{Match, MatchSummary};
use crate::opponent::{Opponent, RandomOpponent};
use crate::phrases::PhraseTable;
use crate::round::RoundController;

/// Answer to "play again?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayAnswer {
    /// Start another match.
    Yes,
    /// End the session.
    No,
}

impl ReplayAnswer {
    /// Parse `y`, `yes`, `n` or `no`, ignoring case and surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "y" | "yes" => Some(Self::Yes),
            "n" | "no" => Some(Self::No),
            _ => None,
        }
    }
}

/// Ask whether to play again until the answer is recognized.
pub fn read_replay(console: &mut dyn Console) -> RpsResult<ReplayAnswer> {
    loop {
        let line = console
            .read_line(Prompt::Replay)?
            .ok_or(RpsError::InputClosed)?;
        match ReplayAnswer::parse(&line) {
            Some(answer) => return Ok(answer),
            None => {
                log::debug!("rejected replay input {line:?}");
                console.show(Notice::InvalidReplay)?;
            }
        }
    }
}

/// Results of a finished session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Every completed match, in play order.
    pub matches: Vec<MatchSummary>,
}

/// A play session: matches repeat until the player declines a replay.
#[derive(Debug)]
pub struct Session<O> {
    config: GameConfig,
    rounds: RoundController<O>,
}

impl Session<RandomOpponent> {
    /// A session against a random opponent seeded from `config`.
    pub fn new(config: GameConfig, phrases: PhraseTable) -> Self {
        let opponent = RandomOpponent::new(config.seed);
        Self::with_opponent(config, opponent, phrases)
    }
}

impl<O: Opponent> Session<O> {
    /// A session against a specific opponent.
    pub fn with_opponent(config: GameConfig, opponent: O, phrases: PhraseTable) -> Self {
        Self {
            config,
            rounds: RoundController::new(opponent, phrases),
        }
    }

    /// Play matches until the player answers "no", then say goodbye.
    pub fn run(&mut self, console: &mut dyn Console) -> RpsResult<SessionSummary> {
        let mut summary = SessionSummary::default();
        loop {
            let mut game = Match::new(self.config.winning_score);
            summary.matches.push(game.run(&mut self.rounds, console)?);

            if read_replay(console)? == ReplayAnswer::No {
                break;
            }
        }
        log::info!("session over after {} matches", summary.matches.len());
        console.show(Notice::Farewell)?;
        Ok(summary)
    }
}
