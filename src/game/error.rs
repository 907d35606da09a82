use thiserror::Error;

/// A contract violation: the caller invoked an operation whose
/// preconditions do not hold. The engine refuses the call and leaves all
/// state untouched. The query predicates (`is_buyable`, `is_improvable`,
/// `is_game_over`) exist so that correct integrations never hit these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// An explicit roll that two six-sided dice could not produce.
    #[error("invalid roll {0}: must be equivalent to the total of two six-sided dice")]
    InvalidRoll(u8),

    /// The current position is neither buyable nor improvable.
    #[error("position {0} is not buyable or improvable")]
    NotActionable(u8),

    /// A mutating operation was invoked after a player went bankrupt.
    #[error("the game is over")]
    GameOver,
}
