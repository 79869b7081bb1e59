//! The choice catalog: the five moves and the text that selects them.
//!
//! Every move has a canonical name and a short alias. The two tables are
//! positional: `NAMES[i]` and `ALIASES[i]` both select `Move::ALL[i]`, so a
//! new move must be added at the same index in all three.

use std::str::FromStr;

use crate::error::RpsError;

/// Canonical move names, index-aligned with [`Move::ALL`].
pub const NAMES: [&str; 5] = ["rock", "paper", "scissors", "spock", "lizard"];

/// Accepted short forms, index-aligned with [`NAMES`].
pub const ALIASES: [&str; 5] = ["r", "p", "sc", "sp", "l"];

/// One of the five hand signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Move {
    /// Rock.
    Rock,
    /// Paper.
    Paper,
    /// Scissors.
    Scissors,
    /// Spock.
    Spock,
    /// Lizard.
    Lizard,
}

impl Move {
    /// All moves in catalog order.
    pub const ALL: [Move; 5] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Spock,
        Self::Lizard,
    ];

    /// Position of this move in the catalog tables.
    pub fn index(self) -> usize {
        match self {
            Self::Rock => 0,
            Self::Paper => 1,
            Self::Scissors => 2,
            Self::Spock => 3,
            Self::Lizard => 4,
        }
    }

    /// The canonical lowercase name.
    pub fn name(self) -> &'static str {
        NAMES[self.index()]
    }

    /// The short alias accepted as input.
    pub fn alias(self) -> &'static str {
        ALIASES[self.index()]
    }

    /// Look up a move by its exact canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMES.iter().position(|n| *n == name).map(|i| Self::ALL[i])
    }

    /// Normalize player input to a move.
    ///
    /// Trims whitespace and ignores case, then accepts either a canonical
    /// name or an alias. Returns `None` for anything else.
    pub fn parse(input: &str) -> Option<Self> {
        let s = input.trim().to_lowercase();
        NAMES
            .iter()
            .position(|n| *n == s)
            .or_else(|| ALIASES.iter().position(|a| *a == s))
            .map(|i| Self::ALL[i])
    }
}

/// Returns true if `input` names a move or one of its aliases.
pub fn is_valid_input(input: &str) -> bool {
    Move::parse(input).is_some()
}

impl FromStr for Move {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| RpsError::InvalidInput(s.to_string()))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tables_are_aligned() {
        for (i, m) in Move::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(Move::parse(NAMES[i]), Some(*m));
            assert_eq!(Move::parse(ALIASES[i]), Some(*m));
        }
    }

    #[test]
    fn aliases_are_unique_and_distinct_from_names() {
        for (i, a) in ALIASES.iter().enumerate() {
            assert!(!NAMES.contains(a));
            assert!(!ALIASES[i + 1..].contains(a));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(Move::parse("r"), Some(Move::Rock));
        assert_eq!(Move::parse("p"), Some(Move::Paper));
        assert_eq!(Move::parse("sc"), Some(Move::Scissors));
        assert_eq!(Move::parse("sp"), Some(Move::Spock));
        assert_eq!(Move::parse("l"), Some(Move::Lizard));
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(Move::parse("  ROCK \n"), Some(Move::Rock));
        assert_eq!(Move::parse("Sp"), Some(Move::Spock));
        assert_eq!(Move::parse("\tLizard"), Some(Move::Lizard));
    }

    #[test]
    fn rejects_unknown_input() {
        for input in ["xyz", "", "123", "s", "rocks", "spo ck"] {
            assert!(!is_valid_input(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn from_str_reports_invalid_input() {
        let err = "xyz".parse::<Move>().unwrap_err();
        assert!(matches!(err, RpsError::InvalidInput(ref s) if s == "xyz"));
        assert_eq!("sc".parse::<Move>().unwrap(), Move::Scissors);
    }

    #[test]
    fn from_name_rejects_aliases() {
        assert_eq!(Move::from_name("spock"), Some(Move::Spock));
        assert_eq!(Move::from_name("sp"), None);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(Move::Scissors.to_string(), "scissors");
    }

    fn accepted_input() -> impl Strategy<Value = String> {
        (
            prop::sample::select(
                NAMES
                    .iter()
                    .chain(ALIASES.iter())
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>(),
            ),
            any::<bool>(),
            "[ \t]{0,2}",
        )
            .prop_map(|(s, upper, pad)| {
                let s = if upper { s.to_uppercase() } else { s };
                format!("{pad}{s}{pad}")
            })
    }

    proptest! {
        #[test]
        fn normalization_is_idempotent(input in accepted_input()) {
            let once = Move::parse(&input).unwrap();
            prop_assert_eq!(Move::parse(once.name()), Some(once));
        }
    }
}
