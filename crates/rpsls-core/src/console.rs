//! The boundary between the game engine and whatever renders it.
//!
//! The engine never prints. It asks a [`Console`] for a line of input at each
//! [`Prompt`] and tells it about progress through [`Notice`]s.

use crate::catalog::Move;
use crate::error::RpsResult;
use crate::round::RoundResult;
use crate::rules::Side;
use crate::score::Score;

/// A question the engine is waiting on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    /// Choose a move.
    Move,
    /// Acknowledge the round result before the next one starts.
    NextRound,
    /// Play another match?
    Replay,
}

/// Something the engine wants shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    /// A round is about to start.
    Welcome {
        /// Wins needed to take the match.
        target: u32,
    },
    /// The current score.
    Score(Score),
    /// The list of moves and their aliases.
    Menu,
    /// The last move input was rejected.
    InvalidMove,
    /// The last replay answer was rejected.
    InvalidReplay,
    /// Both moves are in.
    Choices {
        /// The player's move.
        player: Move,
        /// The computer's move.
        computer: Move,
    },
    /// A round was decided.
    Round(&'a RoundResult),
    /// The match is over.
    MatchOver {
        /// The side that reached the target.
        winner: Side,
        /// The final score.
        score: Score,
    },
    /// The session is ending.
    Farewell,
}

/// Input and output surface used by the engine.
pub trait Console {
    /// Read one line in answer to `prompt`. `Ok(None)` means end of input.
    fn read_line(&mut self, prompt: Prompt) -> RpsResult<Option<String>>;

    /// Present a notice.
    fn show(&mut self, notice: Notice<'_>) -> RpsResult<()>;
}

/// In-memory console for tests: replays scripted lines and records output.
#[cfg(test)]
pub(crate) mod scripted {
    use std::collections::VecDeque;

    use super::*;

    /// A recorded notice with owned data.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Shown {
        Welcome(u32),
        Score(Score),
        Menu,
        InvalidMove,
        InvalidReplay,
        Choices(Move, Move),
        Round(RoundResult),
        MatchOver(Side, Score),
        Farewell,
    }

    #[derive(Debug, Default)]
    pub struct ScriptedConsole {
        lines: VecDeque<String>,
        pub prompts: Vec<Prompt>,
        pub shown: Vec<Shown>,
    }

    impl ScriptedConsole {
        pub fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|l| l.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn remaining(&self) -> usize {
            self.lines.len()
        }

        pub fn count(&self, pred: impl Fn(&Shown) -> bool) -> usize {
            self.shown.iter().filter(|s| pred(s)).count()
        }
    }

    impl Console for ScriptedConsole {
        fn read_line(&mut self, prompt: Prompt) -> RpsResult<Option<String>> {
            self.prompts.push(prompt);
            Ok(self.lines.pop_front())
        }

        fn show(&mut self, notice: Notice<'_>) -> RpsResult<()> {
            let shown = match notice {
                Notice::Welcome { target } => Shown::Welcome(target),
                Notice::Score(s) => Shown::Score(s),
                Notice::Menu => Shown::Menu,
                Notice::InvalidMove => Shown::InvalidMove,
                Notice::InvalidReplay => Shown::InvalidReplay,
                Notice::Choices { player, computer } => Shown::Choices(player, computer),
                Notice::Round(r) => Shown::Round(r.clone()),
                Notice::MatchOver { winner, score } => Shown::MatchOver(winner, score),
                Notice::Farewell => Shown::Farewell,
            };
            self.shown.push(shown);
            Ok(())
        }
    }
}
