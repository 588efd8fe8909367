use serde::Serialize;
use util::{error::GridError, piece::Piece, position::Position};

use crate::board::{Board, Square};

/// A piece standing on a square of a particular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChessPointer {
    pub position: Position,
    pub piece: Piece,
}

impl ChessPointer {
    pub fn new(x: usize, y: usize, piece: Piece, board: &Board) -> Result<Self, GridError> {
        let position = Position::new(x, y);
        board.at(position)?;
        Ok(Self { position, piece })
    }

    pub const fn x(&self) -> usize {
        self.position.x
    }

    pub const fn y(&self) -> usize {
        self.position.y
    }

    pub fn at<'a>(&self, board: &'a Board) -> Result<&'a Square, GridError> {
        board.at(self.position)
    }

    pub fn moves(&self, board: &Board) -> Vec<ChessPointer> {
        board
            .get_moves(self.piece, self.position)
            .into_iter()
            .map(|position| Self {
                position,
                piece: self.piece,
            })
            .collect()
    }

    pub fn shortest_path(&self, board: &Board) -> Option<ChessPointer> {
        let previous = board.squares.get(self.position)?.shortest_path?;
        Some(Self {
            position: previous,
            piece: self.piece,
        })
    }

    /// Follows `shortest_path` links back to the square that has none.
    ///
    /// The walk is cut after one visit per square so a corrupted board can
    /// not make it loop.
    pub fn path_to_start(&self, board: &Board) -> Vec<Position> {
        let limit = board.width() * board.height();
        let mut path = vec![self.position];
        let mut current = *self;
        while let Some(previous) = current.shortest_path(board) {
            if path.len() >= limit {
                break;
            }
            path.push(previous.position);
            current = previous;
        }
        path
    }
}
