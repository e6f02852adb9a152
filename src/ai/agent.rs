use crate::game::GameState;

/// Interface for anything that can drive a seat: the built-in random
/// opponent, or an external controller supplied by the caller.
pub trait Agent {
    /// Select a column for the current player. Only called while the game is
    /// in progress, so at least one legal column exists.
    fn select_column(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
