use util::{piece::Piece, position::Position};

/// Lower bound on the number of moves `piece` needs from `from` to `to` on
/// an open board of any size.
///
/// A single move changes the bound by at most one, so scaling it by the
/// cheapest square weight gives a consistent A* estimate.
pub fn min_moves(piece: Piece, from: Position, to: Position) -> usize {
    let (dx, dy) = from.delta(&to);
    if dx == 0 && dy == 0 {
        return 0;
    }
    match piece {
        // a jump moves at most 2 along one axis and 3 in total
        Piece::Knight => ((dx.max(dy) + 1) / 2).max((dx + dy + 2) / 3),
        Piece::King => dx.max(dy),
        Piece::Pawn => dx + dy,
        Piece::Rook => usize::from(dx > 0) + usize::from(dy > 0),
        Piece::Bishop => {
            if dx == dy {
                1
            } else {
                2
            }
        }
        Piece::Queen => {
            if dx == 0 || dy == 0 || dx == dy {
                1
            } else {
                2
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use movegen::Board;
    use util::mapping::Mapping2D;

    use super::*;

    fn bfs(board: &Board, piece: Piece, from: Position) -> Mapping2D<Option<usize>> {
        let mut moves = Mapping2D::new(board.height(), board.width(), None);
        moves[from] = Some(0);
        let mut queue = VecDeque::from([from]);
        while let Some(current) = queue.pop_front() {
            let next = moves[current].map(|m| m + 1);
            for to in board.get_moves(piece, current) {
                if moves[to].is_none() {
                    moves[to] = next;
                    queue.push_back(to);
                }
            }
        }
        moves
    }

    #[test]
    fn never_overestimates_on_open_board() {
        let board = Board::new(7, 7).unwrap();
        for piece in Piece::ALL {
            for from in [Position::new(0, 0), Position::new(3, 3), Position::new(6, 1)] {
                let exact = bfs(&board, piece, from);
                for (to, moves) in exact.iter() {
                    if let Some(moves) = moves {
                        assert!(
                            min_moves(piece, from, to) <= *moves,
                            "{piece} {from} -> {to}: bound {} exceeds {moves}",
                            min_moves(piece, from, to)
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn exact_for_king_and_pawn() {
        let from = Position::new(1, 4);
        let to = Position::new(5, 2);
        assert_eq!(min_moves(Piece::King, from, to), 4);
        assert_eq!(min_moves(Piece::Pawn, from, to), 6);
        assert_eq!(min_moves(Piece::Rook, from, to), 2);
        assert_eq!(min_moves(Piece::Bishop, from, to), 2);
        assert_eq!(min_moves(Piece::Queen, from, Position::new(3, 2)), 1);
        assert_eq!(min_moves(Piece::Knight, from, Position::new(2, 2)), 1);
        assert_eq!(min_moves(Piece::Knight, from, from), 0);
    }
}
