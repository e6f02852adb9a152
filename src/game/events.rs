use super::player::Player;
use super::state::GameOutcome;

/// State-change notifications for the presentation layer, drained with
/// [`super::GameState::take_events`]. The engine appends; it never blocks on
/// a consumer.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameEvent {
    /// A token was committed to the board.
    MoveAccepted {
        player: Player,
        column: usize,
        row: usize,
    },
    /// The turn passed to the other seat.
    TurnChanged { player: Player },
    /// The round ended in a win or a tie.
    GameEnded { outcome: GameOutcome },
}
