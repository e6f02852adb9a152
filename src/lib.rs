//! # Connect Four Engine
//!
//! The rules core of a two-player Connect Four game: board state, move
//! legality, four-in-a-row detection, turn sequencing, draw detection, and a
//! uniformly random computer opponent. Rendering, animation, input handling
//! and sound are presentation concerns that live outside this crate; the
//! presentation layer feeds column selections in via
//! [`game::GameState::drop_token`] and observes results through the returned
//! outcome and the polled event queue.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, state machine
//! - [`ai`] — Agent trait and the random opponent chooser
//! - [`config`] — TOML configuration loading
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
