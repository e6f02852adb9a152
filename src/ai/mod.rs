//! The computer seat: the [`Agent`] seam and the uniformly random opponent
//! chooser. Any thinking-time delay is a presentation concern; the engine
//! side of a computer move is synchronous.

mod agent;
mod random;

pub use agent::Agent;
pub use random::RandomAgent;

use crate::error::InvalidMove;
use crate::game::{GameState, MoveOutcome};

/// Let `agent` take the awaited move. Intended for when
/// [`GameState::is_computer_turn`] reports true; the move goes through the
/// same `drop_token` path as a human move.
pub fn play_computer_turn(
    state: &mut GameState,
    agent: &mut dyn Agent,
) -> Result<MoveOutcome, InvalidMove> {
    // The agent contract requires an in-progress game.
    if state.is_terminal() {
        return Err(InvalidMove::GameOver);
    }

    let column = agent.select_column(state);
    state.drop_token(column)
}
