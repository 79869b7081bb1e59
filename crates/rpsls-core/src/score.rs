//! Score tracking for a single match.

use crate::rules::Side;

/// Round wins per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    /// Rounds won by the player.
    pub player: u32,
    /// Rounds won by the computer.
    pub computer: u32,
}

impl Score {
    /// The counter for `side`.
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Computer => self.computer,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.player, self.computer)
    }
}

/// Counts round wins and remembers which side reached the target first.
#[derive(Debug, Clone)]
pub struct ScoreTracker {
    score: Score,
    target: u32,
    leader: Option<Side>,
}

impl ScoreTracker {
    /// Create a tracker at 0-0 for a match played to `target` wins (at least 1).
    pub fn new(target: u32) -> Self {
        Self {
            score: Score::default(),
            target: target.max(1),
            leader: None,
        }
    }

    /// Current score.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Wins needed to take the match.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Add one round win to `side`.
    pub fn increment(&mut self, side: Side) {
        let counter = match side {
            Side::Player => &mut self.score.player,
            Side::Computer => &mut self.score.computer,
        };
        *counter += 1;
        if self.leader.is_none() && *counter >= self.target {
            self.leader = Some(side);
        }
    }

    /// Returns true once either counter has reached the target.
    pub fn has_reached(&self) -> bool {
        self.score.player >= self.target || self.score.computer >= self.target
    }

    /// The side that reached the target first, or `None` while the match is open.
    pub fn leader(&self) -> Option<Side> {
        self.leader
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let t = ScoreTracker::new(5);
        assert_eq!(t.score(), Score::default());
        assert!(!t.has_reached());
        assert_eq!(t.leader(), None);
    }

    #[test]
    fn zero_target_clamped_to_one() {
        let mut t = ScoreTracker::new(0);
        assert_eq!(t.target(), 1);
        assert!(!t.has_reached());
        assert_eq!(t.leader(), None);
        t.increment(Side::Computer);
        assert!(t.has_reached());
        assert_eq!(t.leader(), Some(Side::Computer));
    }

    #[test]
    fn increment_adds_one_to_one_side() {
        let mut t = ScoreTracker::new(5);
        t.increment(Side::Player);
        assert_eq!(t.score(), Score { player: 1, computer: 0 });
        t.increment(Side::Computer);
        t.increment(Side::Computer);
        assert_eq!(t.score(), Score { player: 1, computer: 2 });
        assert_eq!(t.score().of(Side::Computer), 2);
    }

    #[test]
    fn reaching_target_sets_leader() {
        let mut t = ScoreTracker::new(5);
        for _ in 0..3 {
            t.increment(Side::Computer);
        }
        for _ in 0..4 {
            t.increment(Side::Player);
        }
        assert!(!t.has_reached());
        t.increment(Side::Player);
        assert!(t.has_reached());
        assert_eq!(t.leader(), Some(Side::Player));
        assert_eq!(t.score().to_string(), "5 - 3");
    }

    #[test]
    fn leader_is_first_to_target() {
        let mut t = ScoreTracker::new(5);
        for _ in 0..5 {
            t.increment(Side::Computer);
        }
        for _ in 0..7 {
            t.increment(Side::Player);
        }
        assert_eq!(t.leader(), Some(Side::Computer));
    }

    #[test]
    fn interleaved_increments() {
        let order = [
            Side::Player,
            Side::Computer,
            Side::Computer,
            Side::Player,
            Side::Computer,
            Side::Player,
            Side::Computer,
            Side::Player,
            Side::Computer,
        ];
        let mut t = ScoreTracker::new(5);
        for side in order {
            t.increment(side);
        }
        assert_eq!(t.score(), Score { player: 4, computer: 5 });
        assert_eq!(t.leader(), Some(Side::Computer));
    }
}
