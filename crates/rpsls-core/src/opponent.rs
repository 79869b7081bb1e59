//! Move sources for the computer side.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Move;

/// Something that picks the computer's move each round.
pub trait Opponent {
    /// Choose the next move.
    fn choose(&mut self) -> Move;
}

/// Uniform random choice over all five moves.
#[derive(Debug, Clone)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Seed from `seed`, or from the operating system when `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Opponent for RandomOpponent {
    fn choose(&mut self) -> Move {
        Move::ALL[self.rng.random_range(0..Move::ALL.len())]
    }
}

/// Replays a fixed sequence of moves, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedOpponent {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedOpponent {
    /// Create an opponent from a non-empty move list. An empty list plays rock.
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        let mut moves = moves.into();
        if moves.is_empty() {
            moves.push(Move::Rock);
        }
        Self { moves, next: 0 }
    }
}

impl Opponent for ScriptedOpponent {
    fn choose(&mut self) -> Move {
        let m = self.moves[self.next % self.moves.len()];
        self.next += 1;
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_is_deterministic() {
        let mut a = RandomOpponent::new(Some(42));
        let mut b = RandomOpponent::new(Some(42));
        for _ in 0..20 {
            assert_eq!(a.choose(), b.choose());
        }
    }

    #[test]
    fn random_covers_all_moves() {
        let mut opp = RandomOpponent::new(Some(7));
        let mut counts = [0u32; 5];
        for _ in 0..5000 {
            counts[opp.choose().index()] += 1;
        }
        // Each move should land near 1000; 800 is far outside normal variance.
        for (i, c) in counts.iter().enumerate() {
            assert!(*c > 800, "{} drawn only {c} times", Move::ALL[i]);
        }
    }

    #[test]
    fn scripted_wraps() {
        let mut opp = ScriptedOpponent::new([Move::Spock, Move::Lizard]);
        assert_eq!(opp.choose(), Move::Spock);
        assert_eq!(opp.choose(), Move::Lizard);
        assert_eq!(opp.choose(), Move::Spock);
    }

    #[test]
    fn scripted_empty_plays_rock() {
        let mut opp = ScriptedOpponent::new(Vec::new());
        assert_eq!(opp.choose(), Move::Rock);
    }
}
