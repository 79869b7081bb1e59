//! Flavor text shown when one move defeats another.
//!
//! The table is keyed by (winning move, losing move). A built-in table ships
//! with the crate; a JSON file can replace it:
//!
//! ```json
//! { "rock": { "scissors": "Rock crushes scissors" } }
//! ```

use std::collections::HashMap;
use std::path::Path;

use crate::catalog::Move;
use crate::error::{RpsError, RpsResult};

/// Built-in phrases as (winner, loser, phrase).
pub const DEFAULT_PHRASES: &[(Move, Move, &str)] = &[
    (Move::Scissors, Move::Paper, "Scissors cuts paper"),
    (Move::Paper, Move::Rock, "Paper covers rock"),
    (Move::Rock, Move::Lizard, "Rock crushes lizard"),
    (Move::Lizard, Move::Spock, "Lizard poisons Spock"),
    (Move::Spock, Move::Scissors, "Spock smashes scissors"),
    (Move::Scissors, Move::Lizard, "Scissors decapitates lizard"),
    (Move::Lizard, Move::Paper, "Lizard eats paper"),
    (Move::Paper, Move::Spock, "Paper disproves Spock"),
    (Move::Spock, Move::Rock, "Spock vaporizes rock"),
    (Move::Rock, Move::Scissors, "Rock crushes scissors"),
];

/// Read-only lookup from (winner, loser) to a phrase.
#[derive(Debug, Clone, Default)]
pub struct PhraseTable {
    phrases: HashMap<(Move, Move), String>,
}

impl PhraseTable {
    /// An empty table. Every lookup yields the empty string.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in phrase table.
    pub fn builtin() -> Self {
        let phrases = DEFAULT_PHRASES
            .iter()
            .map(|(winner, loser, text)| ((*winner, *loser), (*text).to_string()))
            .collect();
        Self { phrases }
    }

    /// Parse a table from nested JSON objects keyed by canonical move names.
    pub fn from_json(json: &str) -> RpsResult<Self> {
        let raw: HashMap<String, HashMap<String, String>> = serde_json::from_str(json)?;
        let mut phrases = HashMap::new();
        for (winner, losers) in raw {
            let winner = lookup_move(&winner)?;
            for (loser, text) in losers {
                let loser = lookup_move(&loser)?;
                phrases.insert((winner, loser), text);
            }
        }
        log::debug!("loaded {} phrases", phrases.len());
        Ok(Self { phrases })
    }

    /// Load a table from a JSON file.
    pub fn from_path(path: &Path) -> RpsResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Add or replace a phrase.
    pub fn insert(&mut self, winner: Move, loser: Move, text: impl Into<String>) {
        self.phrases.insert((winner, loser), text.into());
    }

    /// The phrase for `winner` defeating `loser`, or `""` if there is none.
    pub fn phrase(&self, winner: Move, loser: Move) -> &str {
        self.phrases
            .get(&(winner, loser))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Number of phrases in the table.
    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    /// Returns true if the table has no phrases.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}

fn lookup_move(name: &str) -> RpsResult<Move> {
    Move::from_name(&name.trim().to_lowercase())
        .ok_or_else(|| RpsError::UnknownMove(name.to_string()))
}
