use console::Term;
use std::io;
use crate::core::{GameEngine, GameState, Player};
use crate::ui::ThemeManager;

/// Terminal renderer. Reads engine state only; never mutates it.
#[derive(Debug)]
pub struct Display {
    term: Term,
    theme_manager: ThemeManager,
    show_indices: bool,
    highlight_solution: bool,
}

impl Display {
    pub fn new(theme_manager: ThemeManager, show_indices: bool, highlight_solution: bool) -> Self {
        Self {
            term: Term::stdout(),
            theme_manager,
            show_indices,
            highlight_solution,
        }
    }

    pub fn set_theme(&mut self, theme_name: &str) -> bool {
        self.theme_manager.set_theme(theme_name)
    }

    pub fn clear_screen(&self) -> io::Result<()> {
        self.term.clear_screen()
    }

    /// Board as text, one line per row. Empty fields show their index
    /// when `show_indices` is on so the player knows what to type.
    pub fn render_board(&self, engine: &GameEngine) -> String {
        let row_size = engine.row_size();
        let width = (engine.board_size() - 1).to_string().len();
        let separator = vec!["-".repeat(width + 2); row_size].join("+");

        let rows: Vec<String> = (0..row_size)
            .map(|row| {
                (0..row_size)
                    .map(|column| self.render_field(engine, row * row_size + column, width))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();

        let styled_separator = self.theme_manager.apply_style(&separator, "separator");
        rows.join(&format!("\n{}\n", styled_separator))
    }

    fn render_field(&self, engine: &GameEngine, index: usize, width: usize) -> String {
        let occupant = engine.cell(index).and_then(|cell| cell.occupied_by);

        let text = match occupant {
            Some(player) => player.symbol().to_string(),
            None if self.show_indices => index.to_string(),
            None => String::new(),
        };
        let padded = format!(" {:^width$} ", text, width = width);

        let style = match occupant {
            Some(_) if self.highlight_solution && engine.is_in_solution(index) => "solution",
            Some(Player::Cross) => "cross",
            Some(Player::Nought) => "nought",
            None => "empty",
        };

        self.theme_manager.apply_style(&padded, style)
    }

    pub fn status_text(&self, engine: &GameEngine) -> String {
        match (engine.state(), engine.winner()) {
            (GameState::Running, _) => format!("Turn: {}", engine.turn()),
            (GameState::Over, Some(winner)) => format!("{} is the winner!", winner.label()),
            (GameState::Over, None) => "DRAW!".to_string(),
        }
    }

    pub fn show_title(&self, engine: &GameEngine) -> io::Result<()> {
        let title = format!(
            "Tic-tac-toe {}x{} - {} in a row wins",
            engine.row_size(),
            engine.row_size(),
            engine.fields_to_win()
        );
        self.term.write_line(&self.theme_manager.apply_style(&title, "title"))?;
        self.term.write_line("")
    }

    pub fn show_board(&self, engine: &GameEngine) -> io::Result<()> {
        self.term.write_line(&self.render_board(engine))?;
        self.term.write_line("")
    }

    pub fn show_status(&self, engine: &GameEngine) -> io::Result<()> {
        let style = if engine.is_over() { "success" } else { "status" };
        self.show_message(&self.status_text(engine), style)
    }

    pub fn show_message(&self, message: &str, style: &str) -> io::Result<()> {
        self.term.write_line(&self.theme_manager.apply_style(message, style))
    }

    pub fn show_warning(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("! {}", message), "warning")
    }

    pub fn show_error(&self, message: &str) -> io::Result<()> {
        self.show_message(&format!("x {}", message), "error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_display(show_indices: bool) -> Display {
        let mut theme_manager = ThemeManager::new();
        theme_manager.set_theme("mono");
        Display::new(theme_manager, show_indices, true)
    }

    #[test]
    fn test_render_empty_board_with_indices() {
        let display = plain_display(true);
        let engine = GameEngine::default();

        assert_eq!(
            display.render_board(&engine),
            " 0 | 1 | 2 \n---+---+---\n 3 | 4 | 5 \n---+---+---\n 6 | 7 | 8 "
        );
    }

    #[test]
    fn test_render_marks() {
        let display = plain_display(false);
        let mut engine = GameEngine::default();
        engine.attempt_move(0).unwrap();
        engine.attempt_move(4).unwrap();

        let rendered = display.render_board(&engine);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], " X |   |   ");
        assert_eq!(lines[2], "   | O |   ");
    }

    #[test]
    fn test_render_wide_indices() {
        let display = plain_display(true);
        let engine = GameEngine::new(4).unwrap();

        let rendered = display.render_board(&engine);
        let first_row = rendered.lines().next().unwrap();
        assert_eq!(first_row, " 0  | 1  | 2  | 3  ");
        assert_eq!(rendered.lines().count(), 7);
    }

    #[test]
    fn test_status_text() {
        let display = plain_display(true);
        let mut engine = GameEngine::default();
        assert_eq!(display.status_text(&engine), "Turn: cross");

        engine.attempt_move(0).unwrap();
        assert_eq!(display.status_text(&engine), "Turn: nought");

        for index in [3, 1, 4, 2] {
            engine.attempt_move(index).unwrap();
        }
        assert_eq!(display.status_text(&engine), "Cross is the winner!");

        let mut engine = GameEngine::default();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            engine.attempt_move(index).unwrap();
        }
        assert_eq!(display.status_text(&engine), "DRAW!");
    }
}
