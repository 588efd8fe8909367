use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::GridError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Piece {
    Knight,
    King,
    Bishop,
    Rook,
    Pawn,
    Queen,
}

impl Piece {
    pub const ALL: [Self; 6] = [
        Self::Knight,
        Self::King,
        Self::Bishop,
        Self::Rook,
        Self::Pawn,
        Self::Queen,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Knight => "knight",
            Self::King => "king",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Pawn => "pawn",
            Self::Queen => "queen",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|piece| piece.name().eq_ignore_ascii_case(name))
    }

    pub const fn symbol(&self) -> char {
        match self {
            Self::Knight => '♞',
            Self::King => '♚',
            Self::Bishop => '♝',
            Self::Rook => '♜',
            Self::Pawn => '♟',
            Self::Queen => '♛',
        }
    }
}

impl Piece {
    /// Short letter of the piece, `n` for the knight.
    pub const fn to_char(&self) -> char {
        match self {
            Self::Knight => 'n',
            Self::King => 'k',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Pawn => 'p',
            Self::Queen => 'q',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|piece| piece.to_char() == c)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Piece {
    type Err = GridError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut chars = input.chars();
        let from_char = match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c.to_ascii_lowercase()),
            _ => None,
        };
        from_char
            .or_else(|| Self::from_name(input))
            .ok_or_else(|| GridError::Parse(format!("'{input}' cannot be used to create a piece")))
    }
}
