pub mod board;
pub mod engine;
pub mod game_state;
pub mod lines;
pub mod player;

pub use board::{Board, Cell};
pub use engine::GameEngine;
pub use game_state::{GameSnapshot, GameState, MoveOutcome, RejectReason};
pub use lines::{Line, LineKind};
pub use player::Player;
