use serde::{Deserialize, Serialize};

use crate::position::Position;

/// Color of a square on the checkered board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub const ALL: [Self; 2] = [Self::White, Self::Black];

    pub const fn of(position: &Position) -> Self {
        if (position.x + position.y) % 2 == 0 {
            Self::White
        } else {
            Self::Black
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::White => "white",
            Self::Black => "black",
        }
    }
}
