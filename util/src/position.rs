use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{color::Color, error::GridError};

/// A square on the grid. `x` counts columns from the left, `y` rows from the top.
///
/// Ordering is row-major so sorted positions read like the rendered board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub y: usize,
    pub x: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub const fn apply_delta(&self, (dx, dy): (i8, i8), width: usize, height: usize) -> Option<Self> {
        let x = self.x as isize + dx as isize;
        let y = self.y as isize + dy as isize;
        if x < 0 || y < 0 || x >= width as isize || y >= height as isize {
            None
        } else {
            Some(Self::new(x as usize, y as usize))
        }
    }

    pub const fn color(&self) -> Color {
        Color::of(self)
    }

    /// Absolute column and row distance to `other`.
    pub const fn delta(&self, other: &Self) -> (usize, usize) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }

    pub fn euclidean(&self, other: &Self) -> f64 {
        let (dx, dy) = self.delta(other);
        ((dx * dx + dy * dy) as f64).sqrt()
    }

    pub fn offset_from_center(&self, width: usize, height: usize) -> f64 {
        let cx = (width as f64 - 1.0) / 2.0;
        let cy = (height as f64 - 1.0) / 2.0;
        let dx = self.x as f64 - cx;
        let dy = self.y as f64 - cy;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Position {
    type Err = GridError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (x, y) = match input.trim().split_once(',') {
            Some(parts) => parts,
            None => {
                return Err(GridError::Parse(format!(
                    "'{input}' cannot be used to construct a position, expected 'x,y'"
                )))
            }
        };
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| GridError::Parse(format!("'{part}' is not a valid coordinate")))
        };
        Ok(Self::new(parse(x)?, parse(y)?))
    }
}
