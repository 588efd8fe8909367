use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::{error::GridError, position::Position};

/// Row-major two dimensional storage addressed by [`Position`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Mapping2D<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T: Clone> Mapping2D<T> {
    pub fn new(height: usize, width: usize, default: T) -> Self {
        Self {
            width,
            height,
            cells: vec![default; width * height],
        }
    }

    /// Builds a mapping from rows indexed `[y][x]`.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, GridError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(GridError::RaggedRows { row: y });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }

    /// Resizes to `height` x `width`, keeping the overlapping squares.
    pub fn scale_to(&self, height: usize, width: usize, default: T) -> Self {
        let mut scaled = Self::new(height, width, default);
        self.for_each(|value, pos| {
            if let Some(cell) = scaled.get_mut(pos) {
                *cell = value.clone();
            }
        });
        scaled
    }

    /// Checkered mapping with `even` where `x + y` is even and `odd` elsewhere.
    pub fn opposition(height: usize, width: usize, even: T, odd: T) -> Self {
        let mut ans = Self::new(height, width, even);
        for pos in ans.positions().collect::<Vec<_>>() {
            if (pos.x + pos.y) % 2 == 1 {
                ans[pos] = odd.clone();
            }
        }
        ans
    }
}

impl<T> Mapping2D<T> {
    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }

    fn idx(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.y * self.width + position.x)
        } else {
            None
        }
    }

    fn out_of_bounds(&self, position: Position) -> GridError {
        GridError::OutOfBounds {
            position,
            width: self.width,
            height: self.height,
        }
    }

    pub fn get(&self, position: Position) -> Option<&T> {
        self.idx(position).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, position: Position) -> Option<&mut T> {
        self.idx(position).map(|i| &mut self.cells[i])
    }

    pub fn at(&self, position: Position) -> Result<&T, GridError> {
        self.get(position).ok_or_else(|| self.out_of_bounds(position))
    }

    pub fn at_mut(&mut self, position: Position) -> Result<&mut T, GridError> {
        match self.idx(position) {
            Some(i) => Ok(&mut self.cells[i]),
            None => Err(self.out_of_bounds(position)),
        }
    }

    pub fn set_at(&mut self, position: Position, value: T) -> Result<(), GridError> {
        *self.at_mut(position)? = value;
        Ok(())
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(self.cells.iter())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on zero
        self.cells.chunks(self.width.max(1))
    }

    pub fn for_each<F>(&self, mut func: F)
    where
        F: FnMut(&T, Position),
    {
        for (pos, value) in self.iter() {
            func(value, pos)
        }
    }

    pub fn map<U, F>(&self, mut func: F) -> Mapping2D<U>
    where
        F: FnMut(&T, Position) -> U,
    {
        Mapping2D {
            width: self.width,
            height: self.height,
            cells: self.iter().map(|(pos, value)| func(value, pos)).collect(),
        }
    }
}

impl<T> Index<Position> for Mapping2D<T> {
    type Output = T;

    fn index(&self, position: Position) -> &Self::Output {
        match self.idx(position) {
            Some(i) => &self.cells[i],
            None => panic!("{}", self.out_of_bounds(position)),
        }
    }
}

impl<T> IndexMut<Position> for Mapping2D<T> {
    fn index_mut(&mut self, position: Position) -> &mut Self::Output {
        match self.idx(position) {
            Some(i) => &mut self.cells[i],
            None => panic!("{}", self.out_of_bounds(position)),
        }
    }
}
