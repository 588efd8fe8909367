use serde::Serialize;
use util::{error::GridError, mapping::Mapping2D, piece::Piece, position::Position};

use crate::movegen::MovementRule;

/// One square of the board: its terrain plus the scratch state a search writes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Square {
    pub passable: bool,
    /// Cost of entering this square.
    pub weight: f64,
    pub distance_from_start: Option<f64>,
    /// Square this one was reached from on the best known path.
    pub shortest_path: Option<Position>,
}

impl Default for Square {
    fn default() -> Self {
        Self {
            passable: true,
            weight: 1.0,
            distance_from_start: None,
            shortest_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    pub squares: Mapping2D<Square>,
}

impl Board {
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid { width, height });
        }
        Ok(Self {
            squares: Mapping2D::new(height, width, Square::default()),
        })
    }

    pub const fn width(&self) -> usize {
        self.squares.width()
    }

    pub const fn height(&self) -> usize {
        self.squares.height()
    }

    fn check_shape<T>(&self, mask: &Mapping2D<T>) -> Result<(), GridError> {
        if mask.width() != self.width() || mask.height() != self.height() {
            return Err(GridError::DimensionMismatch {
                expected_width: self.width(),
                expected_height: self.height(),
                width: mask.width(),
                height: mask.height(),
            });
        }
        Ok(())
    }

    /// Overwrites passability from rows indexed `[y][x]`.
    pub fn set_passability<R: AsRef<[bool]>>(&mut self, rows: &[R]) -> Result<(), GridError> {
        self.set_passability_map(&Mapping2D::from_rows(rows)?)
    }

    pub fn set_passability_map(&mut self, mask: &Mapping2D<bool>) -> Result<(), GridError> {
        self.check_shape(mask)?;
        for (pos, passable) in mask.iter() {
            self.squares[pos].passable = *passable;
        }
        Ok(())
    }

    /// Overwrites weights from rows indexed `[y][x]`.
    pub fn set_weight<R: AsRef<[f64]>>(&mut self, rows: &[R]) -> Result<(), GridError> {
        self.set_weight_map(&Mapping2D::from_rows(rows)?)
    }

    pub fn set_weight_map(&mut self, weights: &Mapping2D<f64>) -> Result<(), GridError> {
        self.check_shape(weights)?;
        if let Some((position, weight)) = weights
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(GridError::InvalidWeight {
                position,
                weight: *weight,
            });
        }
        for (pos, weight) in weights.iter() {
            self.squares[pos].weight = *weight;
        }
        Ok(())
    }

    pub fn for_each<F>(&self, func: F)
    where
        F: FnMut(&Square, Position),
    {
        self.squares.for_each(func)
    }

    pub fn at(&self, position: Position) -> Result<&Square, GridError> {
        self.squares.at(position)
    }

    pub fn at_mut(&mut self, position: Position) -> Result<&mut Square, GridError> {
        self.squares.at_mut(position)
    }

    pub fn is_passable(&self, position: Position) -> bool {
        self.squares.get(position).is_some_and(|sq| sq.passable)
    }

    /// Cheapest square a piece can enter, `0.0` when nothing is passable.
    pub fn min_weight(&self) -> f64 {
        self.squares
            .iter()
            .filter(|(_, sq)| sq.passable)
            .map(|(_, sq)| sq.weight)
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    pub fn reset_search(&mut self) {
        for pos in self.squares.positions().collect::<Vec<_>>() {
            let square = &mut self.squares[pos];
            square.distance_from_start = None;
            square.shortest_path = None;
        }
    }

    pub fn generate_moves<T>(&self, piece: Piece, from: Position, callback: T)
    where
        T: FnMut(Position),
    {
        piece.generate_moves(from, self, callback)
    }

    pub fn get_moves(&self, piece: Piece, from: Position) -> Vec<Position> {
        let mut moves = Vec::new();
        self.generate_moves(piece, from, |to| moves.push(to));
        moves
    }
}
