use std::fmt;

/// One of the two sides of a game. Cross always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    /// Single-character mark drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::Cross => 'X',
            Player::Nought => 'O',
        }
    }

    /// Capitalised name for status messages.
    pub fn label(self) -> &'static str {
        match self {
            Player::Cross => "Cross",
            Player::Nought => "Nought",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Cross => write!(f, "cross"),
            Player::Nought => write!(f, "nought"),
        }
    }
}
