//! Core Connect Four game logic: board representation, player types, win
//! detection, and the turn-sequencing state machine.

mod board;
mod events;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, Coord, COLS, ROWS};
pub use events::GameEvent;
pub use player::Player;
pub use state::{GameMode, GameOutcome, GameState, MoveOutcome};
