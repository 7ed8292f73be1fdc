use tracing::{debug, info};

use super::board::{Board, Cell, Position, MAX_HEIGHT, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH};
use super::turn::TurnController;
use super::{win, Player};
use crate::error::EngineError;

pub const MIN_WIN_LENGTH: usize = 3;

/// Board size and alignment length for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub win_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            width: 7,
            height: 6,
            win_length: 4,
        }
    }
}

impl GameConfig {
    pub fn new(width: usize, height: usize, win_length: usize) -> Self {
        GameConfig {
            width,
            height,
            win_length,
        }
    }

    /// Build a config from raw user input by pulling every value into its
    /// allowed range. The engine never does this on its own.
    pub fn clamped(width: usize, height: usize, win_length: usize) -> Self {
        let width = width.clamp(MIN_WIDTH, MAX_WIDTH);
        let height = height.clamp(MIN_HEIGHT, MAX_HEIGHT);
        let win_length = win_length.clamp(MIN_WIN_LENGTH, width.min(height));
        GameConfig {
            width,
            height,
            win_length,
        }
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !(MIN_WIDTH..=MAX_WIDTH).contains(&self.width) {
            return Err(EngineError::InvalidConfig(format!(
                "width must be in {MIN_WIDTH}..={MAX_WIDTH}, got {}",
                self.width
            )));
        }
        if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&self.height) {
            return Err(EngineError::InvalidConfig(format!(
                "height must be in {MIN_HEIGHT}..={MAX_HEIGHT}, got {}",
                self.height
            )));
        }
        let max_win = self.width.min(self.height);
        if self.win_length < MIN_WIN_LENGTH || self.win_length > max_win {
            return Err(EngineError::InvalidConfig(format!(
                "win_length must be in {MIN_WIN_LENGTH}..={max_win}, got {}",
                self.win_length
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    AwaitingMove,
    /// A drop has been accepted and its outcome is being evaluated.
    Resolving,
    Won {
        player: Player,
        cells: Vec<Position>,
    },
    Draw,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Won { .. } | SessionState::Draw)
    }
}

/// Result of an accepted drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue {
        landing: Position,
        next_player: Player,
    },
    Win {
        landing: Position,
        player: Player,
        cells: Vec<Position>,
    },
    Draw {
        landing: Position,
    },
}

impl Outcome {
    /// Where the token came to rest
    pub fn landing(&self) -> Position {
        match self {
            Outcome::Continue { landing, .. }
            | Outcome::Win { landing, .. }
            | Outcome::Draw { landing } => *landing,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue { .. })
    }
}

/// A token placed during the current game, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub player: Player,
    pub position: Position,
}

/// One connect-N table: the board, the turn order, and the game state.
///
/// Every call either fully applies or leaves the session untouched.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    turn: TurnController,
    state: SessionState,
    // who opens the *next* game
    next_starter: Player,
    moves: Vec<Move>,
}

impl GameSession {
    /// Create a session and start its first game, opened by Player 1.
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let mut session = GameSession {
            config,
            board: Board::new(config.width, config.height)?,
            turn: TurnController::new(Player::Player1),
            state: SessionState::AwaitingMove,
            next_starter: Player::Player1,
            moves: Vec::new(),
        };
        session.new_game(config)?;
        Ok(session)
    }

    /// Reset the board for a fresh game. The opening player alternates
    /// between games.
    pub fn new_game(&mut self, config: GameConfig) -> Result<(), EngineError> {
        config.validate()?;
        let board = Board::new(config.width, config.height)?;

        let starter = self.next_starter;
        self.config = config;
        self.board = board;
        self.turn.reset(starter);
        self.state = SessionState::AwaitingMove;
        self.next_starter = starter.other();
        self.moves.clear();

        info!(
            width = config.width,
            height = config.height,
            win_length = config.win_length,
            starter = %starter,
            "new game"
        );
        Ok(())
    }

    /// Start another game with the current configuration
    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.new_game(self.config)
    }

    /// Drop the active player's token into `column`.
    pub fn drop_token(&mut self, column: usize) -> Result<Outcome, EngineError> {
        if self.state != SessionState::AwaitingMove || !self.turn.can_accept() {
            debug!(column, state = ?self.state, "move rejected: not accepting moves");
            return Err(EngineError::NotAcceptingMoves);
        }

        let player = self.turn.current();
        let row = self.board.drop_token(column, player).map_err(|err| {
            debug!(column, player = %player, %err, "move rejected");
            err
        })?;

        self.turn.begin_resolve();
        self.state = SessionState::Resolving;
        let landing = Position::new(column, row);
        self.moves.push(Move {
            player,
            position: landing,
        });
        debug!(player = %player, column, row, "token dropped");

        let outcome = self.resolve(player, landing);
        self.turn.end_resolve();
        Ok(outcome)
    }

    fn resolve(&mut self, player: Player, landing: Position) -> Outcome {
        if let Some(cells) = win::check_win(
            &self.board,
            landing.x,
            landing.y,
            player,
            self.config.win_length,
        ) {
            info!(player = %player, moves = self.moves.len(), "game won");
            self.state = SessionState::Won {
                player,
                cells: cells.clone(),
            };
            return Outcome::Win {
                landing,
                player,
                cells,
            };
        }

        if self.board.is_full() {
            info!(moves = self.moves.len(), "game drawn");
            self.state = SessionState::Draw;
            return Outcome::Draw { landing };
        }

        self.turn.advance();
        self.state = SessionState::AwaitingMove;
        Outcome::Continue {
            landing,
            next_player: self.turn.current(),
        }
    }

    /// Keep refusing drops until [`GameSession::release_input`], e.g. while a
    /// drop animation plays.
    pub fn hold_input(&mut self) {
        self.turn.hold();
    }

    pub fn release_input(&mut self) {
        self.turn.release();
    }

    /// True when a call to [`GameSession::drop_token`] would be considered
    pub fn can_accept(&self) -> bool {
        self.state == SessionState::AwaitingMove && self.turn.can_accept()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Player whose token the next drop places
    pub fn active_player(&self) -> Player {
        self.turn.current()
    }

    /// Player who will open the next game
    pub fn starting_player(&self) -> Player {
        self.next_starter
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn cell_at(&self, x: usize, y: usize) -> Result<Cell, EngineError> {
        self.board.cell_at(x, y)
    }

    /// Tokens placed this game, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}
