use ::util::position::Position;

use super::{
    util::{slide, DIAGONAL, ORTHOGONAL},
    MovementRule,
};
use crate::board::Board;

#[derive(Debug, Clone, Copy, Default)]
pub struct Rook;

#[derive(Debug, Clone, Copy, Default)]
pub struct Bishop;

#[derive(Debug, Clone, Copy, Default)]
pub struct Queen;

impl MovementRule for Rook {
    fn generate_moves<T>(&self, from: Position, board: &Board, callback: T)
    where
        T: FnMut(Position),
    {
        slide(from, &ORTHOGONAL, board, callback)
    }
}

impl MovementRule for Bishop {
    fn generate_moves<T>(&self, from: Position, board: &Board, callback: T)
    where
        T: FnMut(Position),
    {
        slide(from, &DIAGONAL, board, callback)
    }
}

impl MovementRule for Queen {
    fn generate_moves<T>(&self, from: Position, board: &Board, mut callback: T)
    where
        T: FnMut(Position),
    {
        Rook.generate_moves(from, board, &mut callback);
        Bishop.generate_moves(from, board, &mut callback);
    }
}

#[cfg(test)]
mod tests {
    use grid_macro::passability;

    use super::*;

    fn moves<R: MovementRule>(rule: R, from: Position, board: &Board) -> Vec<Position> {
        let mut moves = Vec::new();
        rule.generate_moves(from, board, |to| moves.push(to));
        moves.sort();
        moves
    }

    #[test]
    fn rook_stops_in_front_of_walls() {
        let mut board = Board::new(4, 4).unwrap();
        board
            .set_passability(&passability![
                . . X . /
                . . . . /
                . . . . /
                . . . .
            ])
            .unwrap();
        let m = moves(Rook, Position::new(0, 0), &board);
        assert_eq!(
            m,
            vec![
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(0, 3)
            ]
        );
    }

    #[test]
    fn bishop_covers_diagonals() {
        let board = Board::new(3, 3).unwrap();
        let m = moves(Bishop, Position::new(0, 0), &board);
        assert_eq!(m, vec![Position::new(1, 1), Position::new(2, 2)]);
        assert_eq!(moves(Bishop, Position::new(1, 1), &board).len(), 4);
    }

    #[test]
    fn queen_is_rook_and_bishop() {
        let mut board = Board::new(5, 5).unwrap();
        board.at_mut(Position::new(3, 3)).unwrap().passable = false;
        let from = Position::new(2, 2);
        let mut expected = moves(Rook, from, &board);
        expected.extend(moves(Bishop, from, &board));
        expected.sort();
        assert_eq!(moves(Queen, from, &board), expected);
        assert_eq!(expected.len(), 8 + 6);
    }
}
