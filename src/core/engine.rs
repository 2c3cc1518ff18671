use crate::core::lines::{find_run, lines_through};
use crate::core::{Board, Cell, GameSnapshot, GameState, MoveOutcome, Player, RejectReason};
use crate::utils::{GameError, GameResult};
use tracing::{debug, info, instrument, warn};

/// Smallest row size and win length the game accepts.
pub const MIN_ROW_SIZE: usize = 3;
pub const DEFAULT_ROW_SIZE: usize = 3;
/// Largest accepted row size. Keeps `row_size * row_size` well inside `usize`.
pub const MAX_ROW_SIZE: usize = 1024;

/// Rules engine for a single N x N game.
///
/// The engine owns the board, whose turn it is and the outcome. Its only
/// mutating entry point is [`GameEngine::attempt_move`]; everything else is
/// read-only so a renderer can draw straight from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    fields_to_win: usize,
    state: GameState,
    turn: Player,
    winner: Option<Player>,
    solution: Option<Vec<usize>>,
}

impl GameEngine {
    /// Classic full-line game on a `row_size` x `row_size` board.
    pub fn new(row_size: usize) -> GameResult<Self> {
        Self::with_fields_to_win(row_size, row_size)
    }

    /// Game where `fields_to_win` consecutive marks on any line win.
    #[instrument]
    pub fn with_fields_to_win(row_size: usize, fields_to_win: usize) -> GameResult<Self> {
        Self::validate_dimensions(row_size, fields_to_win)?;

        debug!("Creating {}x{} game, {} to win", row_size, row_size, fields_to_win);
        Ok(Self::build(row_size, fields_to_win))
    }

    /// Checks a board configuration without building an engine.
    pub fn validate_dimensions(row_size: usize, fields_to_win: usize) -> GameResult<()> {
        if row_size < MIN_ROW_SIZE {
            return Err(GameError::configuration(format!(
                "row_size must be an integer >= {}, got {}",
                MIN_ROW_SIZE, row_size
            )));
        }

        if row_size > MAX_ROW_SIZE {
            return Err(GameError::configuration(format!(
                "row_size must be <= {}, got {}",
                MAX_ROW_SIZE, row_size
            )));
        }

        if fields_to_win < MIN_ROW_SIZE || fields_to_win > row_size {
            return Err(GameError::configuration(format!(
                "fields_to_win must be an integer >= {} and <= row_size ({}), got {}",
                MIN_ROW_SIZE, row_size, fields_to_win
            )));
        }

        Ok(())
    }

    fn build(row_size: usize, fields_to_win: usize) -> Self {
        Self {
            board: Board::new(row_size),
            fields_to_win,
            state: GameState::Running,
            turn: Player::Cross,
            winner: None,
            solution: None,
        }
    }

    /// Places the current player's mark on `index`.
    ///
    /// Moves on an occupied field or after the game is over are silently
    /// rejected and leave the engine untouched.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` if `index >= board_size`; the engine
    /// is unchanged in that case too.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn attempt_move(&mut self, index: usize) -> GameResult<MoveOutcome> {
        if index >= self.board_size() {
            warn!("Rejected out-of-bounds index {} (board size {})", index, self.board_size());
            return Err(GameError::out_of_bounds(index, self.board_size()));
        }

        if self.state != GameState::Running {
            debug!("Ignoring move on {}: game is over", index);
            return Ok(MoveOutcome::Rejected(RejectReason::GameOver));
        }

        if !self.board.mark(index, self.turn) {
            debug!("Ignoring move on {}: field is occupied", index);
            return Ok(MoveOutcome::Rejected(RejectReason::Occupied));
        }

        debug!("{} marked field {}", self.turn, index);

        if let Some(solution) = self.winning_run_through(index) {
            info!("{} wins with {:?}", self.turn, solution);
            self.state = GameState::Over;
            self.winner = Some(self.turn);
            self.solution = Some(solution.clone());
            return Ok(MoveOutcome::Won {
                winner: self.turn,
                solution,
            });
        }

        if self.board.is_full() {
            info!("Board is full, game ends in a draw");
            self.state = GameState::Over;
            return Ok(MoveOutcome::Drawn);
        }

        self.turn = self.turn.opponent();
        Ok(MoveOutcome::Accepted)
    }

    /// Converts a signed position, e.g. straight from user input, into a
    /// board index.
    pub fn resolve_index(&self, index: i64) -> GameResult<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.board_size())
            .ok_or_else(|| {
                warn!("Rejected out-of-bounds index {} (board size {})", index, self.board_size());
                GameError::out_of_bounds(index, self.board_size())
            })
    }

    fn winning_run_through(&self, index: usize) -> Option<Vec<usize>> {
        lines_through(&self.board, index, self.fields_to_win)
            .iter()
            .find_map(|line| find_run(&self.board, line, self.turn, self.fields_to_win))
    }

    pub fn row_size(&self) -> usize {
        self.board.row_size()
    }

    pub fn board_size(&self) -> usize {
        self.board.len()
    }

    pub fn fields_to_win(&self) -> usize {
        self.fields_to_win
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn solution(&self) -> Option<&[usize]> {
        self.solution.as_deref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cells(&self) -> &[Cell] {
        self.board.cells()
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.board.get(index)
    }

    pub fn is_over(&self) -> bool {
        self.state == GameState::Over
    }

    pub fn is_draw(&self) -> bool {
        self.is_over() && self.winner.is_none()
    }

    pub fn is_in_solution(&self, index: usize) -> bool {
        self.solution().is_some_and(|run| run.contains(&index))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            row_size: self.row_size(),
            fields_to_win: self.fields_to_win,
            cells: self.cells().iter().map(|cell| cell.occupied_by).collect(),
            turn: self.turn,
            state: self.state,
            winner: self.winner,
            solution: self.solution.clone(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::build(DEFAULT_ROW_SIZE, DEFAULT_ROW_SIZE)
    }
}
