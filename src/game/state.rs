use std::collections::BTreeSet;

use crate::error::InvalidMove;

use super::board::{Board, Coord, COLS, ROWS};
use super::events::GameEvent;
use super::player::Player;
use super::win;

/// Whether one seat is driven by the opponent chooser or both by external
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameMode {
    SinglePlayer,
    MultiPlayer,
}

/// Terminal result of a round.
///
/// `coordinates` holds at least 4 entries; a move that completes runs on
/// more than one axis accumulates all of them.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameOutcome {
    Won {
        winner: Player,
        coordinates: BTreeSet<Coord>,
    },
    Tied,
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MoveOutcome {
    Continued {
        next_player: Player,
    },
    Won {
        winner: Player,
        coordinates: BTreeSet<Coord>,
    },
    Tied,
}

/// The engine's state machine: board, turn sequencing, win/tie resolution.
///
/// A plain value owned by the caller; no singleton lifecycle. Callers must
/// serialize access — one `drop_token` runs to completion (placement, win
/// check, turn advance) before the next input is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn_count: usize,
    mode: GameMode,
    computer_seat: Player,
    outcome: Option<GameOutcome>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh game. In [`GameMode::SinglePlayer`] the Yellow seat is
    /// computer-controlled.
    pub fn new(mode: GameMode) -> Self {
        Self::with_computer_seat(mode, Player::Yellow)
    }

    /// Create a fresh game with an explicit computer seat (only consulted in
    /// [`GameMode::SinglePlayer`]).
    pub fn with_computer_seat(mode: GameMode, computer_seat: Player) -> Self {
        GameState {
            board: Board::new(),
            turn_count: 0,
            mode,
            computer_seat,
            outcome: None,
            events: Vec::new(),
        }
    }

    /// The player whose move is awaited (or, once the game is over, the
    /// player who moved last). Yellow moves on even turn counts.
    pub fn current_player(&self) -> Player {
        if self.turn_count % 2 == 0 {
            Player::Yellow
        } else {
            Player::Red
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed moves so far. Not incremented by the terminal move.
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<&GameOutcome> {
        self.outcome.as_ref()
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that can accept a drop. Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS).filter(|&col| self.board.can_accept(col)).collect()
    }

    /// True when the awaited move belongs to the computer seat.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::SinglePlayer
            && !self.is_terminal()
            && self.current_player() == self.computer_seat
    }

    /// Drop the current player's token into `column`.
    ///
    /// On success the placement is committed, the board is rescanned for a
    /// winning run, and either the game ends or the turn passes to the other
    /// seat. On failure the state is unchanged and the caller may retry.
    pub fn drop_token(&mut self, column: usize) -> Result<MoveOutcome, InvalidMove> {
        if self.is_terminal() {
            return Err(InvalidMove::GameOver);
        }

        let player = self.current_player();
        let row = self.board.place(column, player)?;
        self.events.push(GameEvent::MoveAccepted {
            player,
            column,
            row,
        });

        let coordinates = win::find_winning_run(&self.board);
        if !coordinates.is_empty() {
            let outcome = GameOutcome::Won {
                winner: player,
                coordinates: coordinates.clone(),
            };
            self.outcome = Some(outcome.clone());
            self.events.push(GameEvent::GameEnded { outcome });
            return Ok(MoveOutcome::Won {
                winner: player,
                coordinates,
            });
        }

        if self.turn_count == COLS * ROWS - 1 {
            // 42nd token filled the board with no run.
            self.outcome = Some(GameOutcome::Tied);
            self.events.push(GameEvent::GameEnded {
                outcome: GameOutcome::Tied,
            });
            return Ok(MoveOutcome::Tied);
        }

        self.turn_count += 1;
        let next_player = self.current_player();
        self.events.push(GameEvent::TurnChanged {
            player: next_player,
        });
        Ok(MoveOutcome::Continued { next_player })
    }

    /// Reset to an empty board and turn 0. Legal from any state; an
    /// in-progress round is abandoned.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.turn_count = 0;
        self.outcome = None;
        self.events.clear();
    }

    /// Drain the pending event queue.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
