pub mod core;
pub mod ui;
pub mod config;
pub mod utils;

pub use self::core::{engine::GameEngine, player::Player, game_state::GameState};
pub use self::core::{Cell, GameSnapshot, MoveOutcome, RejectReason};
pub use ui::GameInterface;
pub use self::config::Config;
pub use utils::{GameError, GameResult};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
