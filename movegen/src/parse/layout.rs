use std::str::FromStr;

use util::{error::GridError, mapping::Mapping2D, position::Position};

/// A board drawn as text: `.` open, `#` or `x` wall, `K` knight, `F` flag.
///
/// Rows end at a newline or a `/`. The knight and flag squares are open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub passability: Mapping2D<bool>,
    pub knight: Option<Position>,
    pub flag: Option<Position>,
}

impl Layout {
    pub fn from_passability(passability: Mapping2D<bool>) -> Self {
        Self {
            passability,
            knight: None,
            flag: None,
        }
    }

    pub fn to_string(&self, url_encode: bool) -> String {
        let (wall, separator) = if url_encode { ('x', '/') } else { ('#', '\n') };
        let mut out = String::new();
        for (y, row) in self.passability.rows().enumerate() {
            if y > 0 {
                out.push(separator);
            }
            for (x, passable) in row.iter().enumerate() {
                let pos = Position::new(x, y);
                out.push(if self.knight == Some(pos) {
                    'K'
                } else if self.flag == Some(pos) {
                    'F'
                } else if *passable {
                    '.'
                } else {
                    wall
                });
            }
        }
        out
    }
}

impl FromStr for Layout {
    type Err = GridError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        let mut knight = None;
        let mut flag = None;

        let lines = input
            .split(|c: char| c == '\n' || c == '/')
            .map(str::trim)
            .filter(|line| !line.is_empty());

        for (y, line) in lines.enumerate() {
            let mut row = Vec::with_capacity(line.len());
            for (x, c) in line.chars().enumerate() {
                let pos = Position::new(x, y);
                let marker = match c {
                    '.' => None,
                    '#' | 'x' | 'X' => {
                        row.push(false);
                        continue;
                    }
                    'K' | 'k' => Some(&mut knight),
                    'F' | 'f' => Some(&mut flag),
                    c => {
                        return Err(GridError::Parse(format!(
                            "Char '{c}' at {pos} cannot be used in a layout"
                        )))
                    }
                };
                if let Some(slot) = marker {
                    if slot.replace(pos).is_some() {
                        return Err(GridError::Parse(format!(
                            "Char '{c}' appears more than once in the layout"
                        )));
                    }
                }
                row.push(true);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(GridError::Parse("Layout has no rows".to_string()));
        }

        Ok(Self {
            passability: Mapping2D::from_rows(&rows)?,
            knight,
            flag,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers_and_walls() {
        let layout: Layout = "
            K.#
            .x.
            ..F
        "
        .parse()
        .unwrap();
        assert_eq!(layout.passability.width(), 3);
        assert_eq!(layout.passability.height(), 3);
        assert_eq!(layout.knight, Some(Position::new(0, 0)));
        assert_eq!(layout.flag, Some(Position::new(2, 2)));
        assert!(!layout.passability[Position::new(2, 0)]);
        assert!(!layout.passability[Position::new(1, 1)]);
        assert!(layout.passability[Position::new(2, 2)]);
    }

    #[test]
    fn url_form_round_trips() {
        let layout: Layout = "K.x/.x./..F".parse().unwrap();
        assert_eq!(layout.to_string(true), "K.x/.x./..F");
        assert_eq!(layout.to_string(false), "K.#\n.#.\n..F");
    }

    #[test]
    fn rejects_bad_layouts() {
        assert!("".parse::<Layout>().is_err());
        assert!("..?".parse::<Layout>().is_err());
        assert!("K.K".parse::<Layout>().is_err());
        assert!(matches!(
            "../.".parse::<Layout>(),
            Err(GridError::RaggedRows { row: 1 })
        ));
    }
}
