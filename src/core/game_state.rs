use std::fmt;
use crate::core::Player;

/// Lifecycle of a single game. `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Running,
    Over,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Running => write!(f, "running"),
            GameState::Over => write!(f, "over"),
        }
    }
}

/// Why a move request left the engine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Occupied,
    GameOver,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Occupied => write!(f, "field is already occupied"),
            RejectReason::GameOver => write!(f, "game is already over"),
        }
    }
}

/// What a call to `GameEngine::attempt_move` did.
///
/// Informational only: the engine's own state stays the source of truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Mark placed, game continues with the other player.
    Accepted,
    /// Mark placed and completed a winning run.
    Won { winner: Player, solution: Vec<usize> },
    /// Mark placed and filled the board without a winner.
    Drawn,
    /// Nothing changed.
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, MoveOutcome::Rejected(_))
    }

    pub fn ends_game(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Drawn)
    }
}

/// Owned copy of everything a caller can observe about an engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub row_size: usize,
    pub fields_to_win: usize,
    pub cells: Vec<Option<Player>>,
    pub turn: Player,
    pub state: GameState,
    pub winner: Option<Player>,
    pub solution: Option<Vec<usize>>,
}

impl GameSnapshot {
    pub fn board_size(&self) -> usize {
        self.cells.len()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
