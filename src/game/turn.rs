use super::Player;

/// Whose turn it is, and whether a new drop may be submitted right now.
///
/// Input is refused while a move is resolving and while a presentation layer
/// holds the gate (for example to finish a drop animation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnController {
    current: Player,
    resolving: bool,
    held: bool,
}

impl TurnController {
    pub fn new(first: Player) -> Self {
        TurnController {
            current: first,
            resolving: false,
            held: false,
        }
    }

    /// Player whose token the next drop places
    pub fn current(&self) -> Player {
        self.current
    }

    /// Hand the turn to the other player
    pub fn advance(&mut self) {
        self.current = self.current.other();
    }

    pub fn can_accept(&self) -> bool {
        !self.resolving && !self.held
    }

    pub fn begin_resolve(&mut self) {
        self.resolving = true;
    }

    pub fn end_resolve(&mut self) {
        self.resolving = false;
    }

    pub fn hold(&mut self) {
        self.held = true;
    }

    pub fn release(&mut self) {
        self.held = false;
    }

    /// Start over with `first` to move and the gate open
    pub fn reset(&mut self, first: Player) {
        *self = TurnController::new(first);
    }
}
