use ::util::position::Position;

use super::{util::leap, MovementRule};
use crate::board::Board;

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (-2, 1),
    (-1, 2),
    (1, -2),
    (2, -1),
    (1, 2),
    (2, 1),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Knight;

impl MovementRule for Knight {
    fn generate_moves<T>(&self, from: Position, board: &Board, callback: T)
    where
        T: FnMut(Position),
    {
        leap(from, &KNIGHT_JUMPS, board, callback)
    }
}
