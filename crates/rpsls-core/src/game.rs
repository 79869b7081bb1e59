//! Match controller: rounds until one side reaches the winning score.
//!
//! ```text
//! AwaitingRound --record--> RoundResolved --acknowledge--> AwaitingRound
//!                                 |
//!                                 +--(target reached)--> MatchOver
//! ```

use crate::console::{Console, Notice, Prompt};
use crate::error::{RpsError, RpsResult};
use crate::opponent::Opponent;
use crate::round::{RoundController, RoundResult};
use crate::rules::{RoundOutcome, Side};
use crate::score::{Score, ScoreTracker};

/// Where a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    /// Waiting for the next round to be played.
    AwaitingRound,
    /// A round was scored; waiting for the player to continue.
    RoundResolved,
    /// A side reached the winning score. Terminal.
    MatchOver(Side),
}

/// The final tally of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSummary {
    /// The side that reached the winning score.
    pub winner: Side,
    /// Final score.
    pub score: Score,
    /// Rounds played, ties included.
    pub rounds: u32,
    /// Rounds that ended in a tie.
    pub ties: u32,
}

/// One match, from 0-0 until a side reaches the target.
#[derive(Debug, Clone)]
pub struct Match {
    tracker: ScoreTracker,
    state: MatchState,
    rounds: u32,
    ties: u32,
}

impl Match {
    /// Start a match at 0-0 played to `target` wins.
    pub fn new(target: u32) -> Self {
        Self {
            tracker: ScoreTracker::new(target),
            state: MatchState::AwaitingRound,
            rounds: 0,
            ties: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.tracker.score()
    }

    /// Wins needed to take the match.
    pub fn target(&self) -> u32 {
        self.tracker.target()
    }

    /// Score a completed round.
    ///
    /// Only valid while awaiting a round; in any other state the result is
    /// ignored and the state is returned unchanged.
    pub fn record(&mut self, result: &RoundResult) -> MatchState {
        if self.state != MatchState::AwaitingRound {
            log::warn!("round recorded in state {:?}; ignored", self.state);
            return self.state;
        }

        self.rounds += 1;
        match result.outcome {
            RoundOutcome::Tie => self.ties += 1,
            RoundOutcome::Win(side) => self.tracker.increment(side),
        }

        self.state = match self.tracker.leader() {
            Some(winner) if self.tracker.has_reached() => MatchState::MatchOver(winner),
            _ => MatchState::RoundResolved,
        };
        self.state
    }

    /// Move on from a resolved round to the next one.
    pub fn acknowledge(&mut self) {
        if self.state == MatchState::RoundResolved {
            self.state = MatchState::AwaitingRound;
        }
    }

    /// The final tally, once the match is over.
    pub fn summary(&self) -> Option<MatchSummary> {
        match self.state {
            MatchState::MatchOver(winner) => Some(MatchSummary {
                winner,
                score: self.tracker.score(),
                rounds: self.rounds,
                ties: self.ties,
            }),
            _ => None,
        }
    }

    /// Play rounds through `console` until the match is over.
    pub fn run<O: Opponent>(
        &mut self,
        rounds: &mut RoundController<O>,
        console: &mut dyn Console,
    ) -> RpsResult<MatchSummary> {
        loop {
            console.show(Notice::Welcome {
                target: self.target(),
            })?;
            console.show(Notice::Score(self.score()))?;

            let result = rounds.play_round(console)?;
            if let MatchState::MatchOver(winner) = self.record(&result) {
                let summary = MatchSummary {
                    winner,
                    score: self.score(),
                    rounds: self.rounds,
                    ties: self.ties,
                };
                log::info!(
                    "match over: {} wins {} after {} rounds",
                    summary.winner,
                    summary.score,
                    summary.rounds
                );
                console.show(Notice::MatchOver {
                    winner,
                    score: summary.score,
                })?;
                return Ok(summary);
            }

            console
                .read_line(Prompt::NextRound)?
                .ok_or(RpsError::InputClosed)?;
            self.acknowledge();
        }
    }
}
