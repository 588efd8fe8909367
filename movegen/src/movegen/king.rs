use ::util::position::Position;

use super::{
    util::{leap, DELTAS},
    MovementRule,
};
use crate::board::Board;

#[derive(Debug, Clone, Copy, Default)]
pub struct King;

impl MovementRule for King {
    fn generate_moves<T>(&self, from: Position, board: &Board, callback: T)
    where
        T: FnMut(Position),
    {
        leap(from, &DELTAS, board, callback)
    }
}
