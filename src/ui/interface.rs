use dialoguer::{Confirm, Input};

use crate::config::Config;
use crate::core::{GameEngine, MoveOutcome};
use crate::ui::{Display, ThemeManager};
use crate::utils::{GameError, GameResult};
use tracing::{debug, info, warn};

/// A line of player input, parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(i64),
    Restart,
    Quit,
}

impl Command {
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "q" | "quit" | "exit" => Some(Command::Quit),
            "n" | "new" | "restart" => Some(Command::Restart),
            _ => input.parse::<i64>().ok().map(Command::Move),
        }
    }
}

/// Interactive terminal front-end: draws the board, forwards field
/// selections to the engine and starts fresh games on request.
#[derive(Debug)]
pub struct GameInterface {
    engine: GameEngine,
    display: Display,
    config: Config,
}

impl GameInterface {
    pub fn new(config: Config) -> GameResult<Self> {
        info!("Initializing game interface");

        let engine = config.new_engine()?;
        let mut display = Display::new(
            ThemeManager::new(),
            config.ui.show_indices,
            config.ui.highlight_solution,
        );

        if !display.set_theme(&config.ui.theme) {
            warn!("Unknown theme '{}', using default", config.ui.theme);
        }

        Ok(Self {
            engine,
            display,
            config,
        })
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn run(&mut self) -> GameResult<()> {
        info!("Starting game interface");

        loop {
            let quit = self.play_round()?;
            if quit || !self.ask_play_again()? {
                break;
            }
            self.new_game()?;
        }

        self.display.show_message("Thanks for playing!", "success")?;
        Ok(())
    }

    /// Discards the current game and starts over with the configured board.
    pub fn new_game(&mut self) -> GameResult<()> {
        debug!("Starting a new game");
        self.engine = self.config.new_engine()?;
        Ok(())
    }

    /// Plays until the game is over. Returns true if the player asked to quit.
    fn play_round(&mut self) -> GameResult<bool> {
        loop {
            self.render()?;

            if self.engine.is_over() {
                return Ok(false);
            }

            let input = self.prompt_field()?;
            match Command::parse(&input) {
                Some(Command::Quit) => return Ok(true),
                Some(Command::Restart) => self.new_game()?,
                Some(Command::Move(index)) => self.handle_move(index)?,
                None => self
                    .display
                    .show_warning(&format!("'{}' is not a field number", input.trim()))?,
            }
        }
    }

    fn handle_move(&mut self, index: i64) -> GameResult<()> {
        match self.submit_move(index) {
            Ok(MoveOutcome::Rejected(reason)) => {
                self.display.show_warning(&format!("Field {}: {}", index, reason))?;
            }
            Ok(_) => {}
            Err(error @ GameError::OutOfBounds { .. }) => {
                self.display.show_error(&error.to_string())?;
            }
            Err(error) => return Err(error),
        }
        Ok(())
    }

    /// Forwards a raw field number to the engine.
    pub fn submit_move(&mut self, index: i64) -> GameResult<MoveOutcome> {
        let index = self.engine.resolve_index(index)?;
        self.engine.attempt_move(index)
    }

    fn render(&self) -> GameResult<()> {
        if let Err(e) = self.display.clear_screen() {
            debug!("Could not clear screen: {}", e);
        }
        self.display.show_title(&self.engine)?;
        self.display.show_board(&self.engine)?;
        self.display.show_status(&self.engine)?;
        Ok(())
    }

    fn prompt_field(&self) -> GameResult<String> {
        Input::<String>::new()
            .with_prompt(format!(
                "Field for {} (0-{}, n = new game, q = quit)",
                self.engine.turn(),
                self.engine.board_size() - 1
            ))
            .interact_text()
            .map_err(|e| GameError::prompt(format!("Field input error: {}", e)))
    }

    fn ask_play_again(&self) -> GameResult<bool> {
        Confirm::new()
            .with_prompt("Play again?")
            .default(true)
            .interact()
            .map_err(|e| GameError::prompt(format!("Confirmation error: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Player, RejectReason};

    fn interface(row_size: usize, fields_to_win: Option<usize>) -> GameInterface {
        let mut config = Config::default();
        config.game.row_size = row_size;
        config.game.fields_to_win = fields_to_win;
        config.ui.theme = "mono".to_string();
        GameInterface::new(config).unwrap()
    }

    #[test]
    fn test_command_parsing() {
        assert_eq!(Command::parse("4"), Some(Command::Move(4)));
        assert_eq!(Command::parse("  -1 "), Some(Command::Move(-1)));
        assert_eq!(Command::parse("Q"), Some(Command::Quit));
        assert_eq!(Command::parse("new"), Some(Command::Restart));
        assert_eq!(Command::parse("centre"), None);
        assert_eq!(Command::parse("1.5"), None);
    }

    #[test]
    fn test_interface_uses_configured_board() {
        let interface = interface(5, Some(3));
        assert_eq!(interface.engine().board_size(), 25);
        assert_eq!(interface.engine().fields_to_win(), 3);
    }

    #[test]
    fn test_invalid_config_fails_construction() {
        let mut config = Config::default();
        config.game.row_size = 2;
        assert!(GameInterface::new(config).unwrap_err().is_configuration());
    }

    #[test]
    fn test_submit_move() {
        let mut interface = interface(3, None);

        assert_eq!(interface.submit_move(4).unwrap(), MoveOutcome::Accepted);
        assert_eq!(
            interface.submit_move(4).unwrap(),
            MoveOutcome::Rejected(RejectReason::Occupied)
        );
        assert!(interface.submit_move(-1).unwrap_err().is_out_of_bounds());
        assert!(interface.submit_move(9).unwrap_err().is_out_of_bounds());
        assert_eq!(interface.engine().turn(), Player::Nought);
    }

    #[test]
    fn test_new_game_replaces_engine() {
        let mut interface = interface(3, None);
        for index in [0, 3, 1, 4, 2] {
            interface.submit_move(index).unwrap();
        }
        assert_eq!(interface.engine().state(), GameState::Over);

        interface.new_game().unwrap();
        assert_eq!(interface.engine().state(), GameState::Running);
        assert_eq!(interface.engine().turn(), Player::Cross);
        assert_eq!(interface.engine().board().occupied_count(), 0);
    }
}
