//! Configuration for a game session.

/// Round wins needed to take a match unless configured otherwise.
pub const DEFAULT_WINNING_SCORE: u32 = 5;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Round wins needed to take a match (at least 1).
    pub winning_score: u32,
    /// RNG seed for a reproducible computer opponent. `None` draws from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the winning score (clamped to at least 1).
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score.max(1);
        self
    }
}
