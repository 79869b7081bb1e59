//! Error types for the game engine.

/// Errors that can occur while running a game session.
#[derive(Debug, thiserror::Error)]
pub enum RpsError {
    /// The player typed something that is neither a move nor a yes/no answer.
    ///
    /// Recovered locally by re-prompting; never ends a session.
    #[error("invalid input: {0:?}")]
    InvalidInput(String),

    /// A move name in phrase content is not part of the catalog.
    #[error("unknown move: {0}")]
    UnknownMove(String),

    /// A beat-relation is not a complete tournament.
    #[error("inconsistent rules: {0}")]
    InconsistentRules(String),

    /// The input channel reached end of file while waiting for a line.
    #[error("input closed")]
    InputClosed,

    /// Reading from or writing to the terminal failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Phrase content could not be parsed.
    #[error("invalid phrase file: {0}")]
    Phrases(#[from] serde_json::Error),
}

/// Convenience result type for game operations.
pub type RpsResult<T> = Result<T, RpsError>;
