//! # connect_n
//!
//! Rules engine for connect-N drop-token games: two players alternately drop
//! tokens into the columns of a vertical grid, and the first to line up N of
//! them horizontally, vertically or diagonally wins.
//!
//! ## Modules
//!
//! - [`game`] — Board, alignment detection, turn order, game session
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;

pub use error::{ConfigError, EngineError};
pub use game::{GameConfig, GameSession, Outcome, Player, Position, SessionState};
