use std::fmt;

use crate::{board::Board, parse::layout::Layout};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = Layout::from_passability(self.squares.map(|sq, _| sq.passable));
        f.write_str(&layout.to_string(false))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use util::position::Position;

    #[test]
    fn prints_walls() {
        let mut board = Board::new(2, 3).unwrap();
        board.at_mut(Position::new(1, 1)).unwrap().passable = false;
        assert_eq!(board.to_string(), "...\n.#.");
    }
}
