//! Core connect-N game logic: board representation, alignment detection,
//! turn order and the session state machine.

mod board;
mod player;
mod session;
mod turn;
pub mod win;

pub use board::{Board, Cell, Position, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
pub use player::Player;
pub use session::{GameConfig, GameSession, Move, Outcome, SessionState, MIN_WIN_LENGTH};
pub use turn::TurnController;
pub use win::{check_win, Direction};
