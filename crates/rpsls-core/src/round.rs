//! A single round: read the player's move, draw the computer's, resolve.

use crate::catalog::Move;
use crate::console::{Console, Notice, Prompt};
use crate::error::{RpsError, RpsResult};
use crate::opponent::Opponent;
use crate::phrases::PhraseTable;
use crate::rules::{BeatRelation, RoundOutcome, Side};

/// Everything that happened in one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// The player's move.
    pub player_move: Move,
    /// The computer's move.
    pub computer_move: Move,
    /// Who won, if anyone.
    pub outcome: RoundOutcome,
    /// Flavor text for the winning move, empty on a tie.
    pub phrase: String,
}

impl RoundResult {
    /// The move played by `side`.
    pub fn move_of(&self, side: Side) -> Move {
        match side {
            Side::Player => self.player_move,
            Side::Computer => self.computer_move,
        }
    }
}

/// Plays rounds against an injected opponent.
#[derive(Debug)]
pub struct RoundController<O> {
    opponent: O,
    rules: BeatRelation,
    phrases: PhraseTable,
}

impl<O: Opponent> RoundController<O> {
    /// Create a controller using the standard rules.
    pub fn new(opponent: O, phrases: PhraseTable) -> Self {
        Self {
            opponent,
            rules: BeatRelation::standard(),
            phrases,
        }
    }

    /// Replace the beat-relation.
    pub fn with_rules(mut self, rules: BeatRelation) -> Self {
        self.rules = rules;
        self
    }

    /// The beat-relation in use.
    pub fn rules(&self) -> &BeatRelation {
        &self.rules
    }

    /// Play one round through `console`.
    ///
    /// Invalid move input is rejected and asked again until a valid move
    /// arrives. Only end of input or an I/O failure ends the round early.
    pub fn play_round(&mut self, console: &mut dyn Console) -> RpsResult<RoundResult> {
        console.show(Notice::Menu)?;
        let player = read_move(console)?;
        let computer = self.opponent.choose();
        console.show(Notice::Choices { player, computer })?;

        let result = self.resolve(player, computer);
        log::debug!(
            "round: {} vs {} -> {:?}",
            result.player_move,
            result.computer_move,
            result.outcome
        );
        console.show(Notice::Round(&result))?;
        Ok(result)
    }

    /// Decide a round between two known moves and attach its phrase.
    pub fn resolve(&self, player: Move, computer: Move) -> RoundResult {
        let outcome = self.rules.decide(player, computer);
        let phrase = match outcome {
            RoundOutcome::Tie => String::new(),
            RoundOutcome::Win(Side::Player) => self.phrases.phrase(player, computer).to_string(),
            RoundOutcome::Win(Side::Computer) => self.phrases.phrase(computer, player).to_string(),
        };
        RoundResult {
            player_move: player,
            computer_move: computer,
            outcome,
            phrase,
        }
    }
}

/// Ask for a move until the player enters a valid one.
pub fn read_move(console: &mut dyn Console) -> RpsResult<Move> {
    loop {
        let line = console
            .read_line(Prompt::Move)?
            .ok_or(RpsError::InputClosed)?;
        match Move::parse(&line) {
            Some(m) => return Ok(m),
            None => {
                log::debug!("rejected move input {line:?}");
                console.show(Notice::InvalidMove)?;
            }
        }
    }
}
