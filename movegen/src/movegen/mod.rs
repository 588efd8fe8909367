mod king;
mod knight;
mod pawn;
mod slider;
mod util;

use ::util::{piece::Piece, position::Position};

use crate::board::Board;

pub use king::King;
pub use knight::Knight;
pub use pawn::Pawn;
pub use slider::{Bishop, Queen, Rook};

/// Enumerates the squares a piece can reach from `from` in a single move.
///
/// A destination is on the board and passable. Implementations report
/// destinations in a fixed order so searches replay identically.
pub trait MovementRule {
    fn generate_moves<T>(&self, from: Position, board: &Board, callback: T)
    where
        T: FnMut(Position);
}

impl MovementRule for Piece {
    fn generate_moves<T>(&self, from: Position, board: &Board, callback: T)
    where
        T: FnMut(Position),
    {
        match self {
            Piece::Knight => Knight.generate_moves(from, board, callback),
            Piece::King => King.generate_moves(from, board, callback),
            Piece::Bishop => Bishop.generate_moves(from, board, callback),
            Piece::Rook => Rook.generate_moves(from, board, callback),
            Piece::Pawn => Pawn.generate_moves(from, board, callback),
            Piece::Queen => Queen.generate_moves(from, board, callback),
        }
    }
}
