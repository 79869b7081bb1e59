//! Rule engine and match state machine for Rock-Paper-Scissors-Spock-Lizard.
//!
//! Provides the move catalog with input aliases, the beat-relation and round
//! resolution, score tracking, and the round, match and session controllers.
//! Rendering and input live behind the [`Console`] trait; the computer's
//! moves come from an [`Opponent`].

pub mod catalog;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod opponent;
pub mod phrases;
pub mod round;
pub mod rules;
pub mod score;
pub mod session;

pub use catalog::{Move, is_valid_input};
pub use config::GameConfig;
pub use console::{Console, Notice, Prompt};
pub use error::{RpsError, RpsResult};
pub use game::{Match, MatchState, MatchSummary};
pub use opponent::{Opponent, RandomOpponent, ScriptedOpponent};
pub use phrases::PhraseTable;
pub use round::{RoundController, RoundResult};
pub use rules::{BeatRelation, RoundOutcome, Side, decide};
pub use score::{Score, ScoreTracker};
pub use session::{ReplayAnswer, Session, SessionSummary};
