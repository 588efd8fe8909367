use ::util::position::Position;

use super::{
    util::{leap, ORTHOGONAL},
    MovementRule,
};
use crate::board::Board;

/// A pawn without a direction: one orthogonal step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pawn;

impl MovementRule for Pawn {
    fn generate_moves<T>(&self, from: Position, board: &Board, callback: T)
    where
        T: FnMut(Position),
    {
        leap(from, &ORTHOGONAL, board, callback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_orthogonally_in_fixed_order() {
        let board = Board::new(3, 3).unwrap();
        let mut moves = Vec::new();
        Pawn.generate_moves(Position::new(1, 1), &board, |to| moves.push(to));
        assert_eq!(
            moves,
            vec![
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(2, 1),
                Position::new(1, 2)
            ]
        );
    }
}
