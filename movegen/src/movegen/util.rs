use ::util::position::Position;

use crate::board::Board;

pub const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
pub const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];
pub const DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Single jumps: only the landing square has to be free.
pub fn leap<T>(from: Position, deltas: &[(i8, i8)], board: &Board, mut callback: T)
where
    T: FnMut(Position),
{
    for delta in deltas {
        if let Some(to) = from.apply_delta(*delta, board.width(), board.height()) {
            if board.is_passable(to) {
                callback(to)
            }
        }
    }
}

/// Rays: travel stops at the edge or in front of the first wall.
pub fn slide<T>(from: Position, directions: &[(i8, i8)], board: &Board, mut callback: T)
where
    T: FnMut(Position),
{
    for delta in directions {
        let mut current = from;
        while let Some(to) = current.apply_delta(*delta, board.width(), board.height()) {
            if !board.is_passable(to) {
                break;
            }
            callback(to);
            current = to;
        }
    }
}
