//! Rule engine: the beat-relation and round outcome resolution.
//!
//! A [`BeatRelation`] records which move defeats which. The standard
//! relation gives every move exactly two victims, so every pair of distinct
//! moves has exactly one winner.

use crate::catalog::Move;
use crate::error::{RpsError, RpsResult};

/// The standard Rock-Paper-Scissors-Spock-Lizard relation as (winner, victims).
pub const STANDARD_RULES: [(Move, [Move; 2]); 5] = [
    (Move::Rock, [Move::Lizard, Move::Scissors]),
    (Move::Paper, [Move::Rock, Move::Spock]),
    (Move::Scissors, [Move::Paper, Move::Lizard]),
    (Move::Spock, [Move::Scissors, Move::Rock]),
    (Move::Lizard, [Move::Paper, Move::Spock]),
];

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The human at the terminal.
    Player,
    /// The computer opponent.
    Computer,
}

impl Side {
    /// The other participant.
    pub fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Computer,
            Self::Computer => Self::Player,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "player"),
            Self::Computer => write!(f, "computer"),
        }
    }
}

/// The result of comparing two moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Both sides chose the same move.
    Tie,
    /// One side's move defeated the other's.
    Win(Side),
}

impl RoundOutcome {
    /// The winning side, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            Self::Tie => None,
            Self::Win(side) => Some(side),
        }
    }
}

/// Directed domination table between moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeatRelation {
    beats: [[bool; 5]; 5],
}

impl BeatRelation {
    /// The standard five-move relation.
    pub const fn standard() -> Self {
        let mut beats = [[false; 5]; 5];
        let mut i = 0;
        while i < STANDARD_RULES.len() {
            let (winner, victims) = STANDARD_RULES[i];
            beats[winner as usize][victims[0] as usize] = true;
            beats[winner as usize][victims[1] as usize] = true;
            i += 1;
        }
        Self { beats }
    }

    /// Build a relation from `(winner, loser)` pairs.
    ///
    /// Fails unless the pairs form a tournament: no move beats itself and
    /// every pair of distinct moves has exactly one winner.
    pub fn from_pairs(pairs: &[(Move, Move)]) -> RpsResult<Self> {
        let mut beats = [[false; 5]; 5];
        for (winner, loser) in pairs {
            beats[winner.index()][loser.index()] = true;
        }
        let relation = Self { beats };
        relation.validate()?;
        Ok(relation)
    }

    /// Returns true if `winner` defeats `loser`.
    pub fn beats(&self, winner: Move, loser: Move) -> bool {
        self.beats[winner.index()][loser.index()]
    }

    /// The moves that `m` defeats, in catalog order.
    pub fn victims(&self, m: Move) -> Vec<Move> {
        Move::ALL
            .into_iter()
            .filter(|other| self.beats(m, *other))
            .collect()
    }

    /// Check the tournament invariant.
    pub fn validate(&self) -> RpsResult<()> {
        for a in Move::ALL {
            if self.beats(a, a) {
                return Err(RpsError::InconsistentRules(format!("{a} beats itself")));
            }
            for b in Move::ALL.into_iter().filter(|b| *b > a) {
                match (self.beats(a, b), self.beats(b, a)) {
                    (true, false) | (false, true) => {}
                    (true, true) => {
                        return Err(RpsError::InconsistentRules(format!(
                            "{a} and {b} beat each other"
                        )));
                    }
                    (false, false) => {
                        return Err(RpsError::InconsistentRules(format!(
                            "neither {a} nor {b} wins"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Decide a round between the player's move and the computer's move.
    pub fn decide(&self, player: Move, computer: Move) -> RoundOutcome {
        if player == computer {
            RoundOutcome::Tie
        } else if self.beats(player, computer) {
            RoundOutcome::Win(Side::Player)
        } else {
            assert!(
                self.beats(computer, player),
                "beat relation has no winner for {player} vs {computer}"
            );
            RoundOutcome::Win(Side::Computer)
        }
    }
}

impl Default for BeatRelation {
    fn default() -> Self {
        Self::standard()
    }
}

/// The standard relation, built at compile time.
pub const STANDARD: BeatRelation = BeatRelation::standard();

/// Decide a round using the standard relation.
pub fn decide(player: Move, computer: Move) -> RoundOutcome {
    STANDARD.decide(player, computer)
}
