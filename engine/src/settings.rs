use movegen::{create_weight_map, Board, ChessPointer, Layout, WeightSettings};
use util::{error::GridError, mapping::Mapping2D, piece::Piece, position::Position};

use crate::{algorithm::Algorithm, error::SearchError, search::PathSearch};

pub const MIN_SIZE: usize = 2;
pub const MAX_SIZE: usize = 20;

/// Delay between automatic steps in milliseconds, `None` steps on click only.
pub const ITERATION_SPEEDS: [Option<u64>; 9] = [
    None,
    Some(5000),
    Some(2000),
    Some(1000),
    Some(700),
    Some(500),
    Some(300),
    Some(100),
    Some(50),
];

pub const ITERATION_SPEED_LABELS: [&str; 9] = [
    "Only on click",
    "Once every 5 seconds",
    "Once every 2 seconds",
    "Once every second",
    "10 times in 7 seconds",
    "2 times in a second",
    "3 times in a second",
    "10 times in a second",
    "20 times in a second",
];

const DEFAULT_KNIGHT: Position = Position::new(0, 0);
const DEFAULT_FLAG: Position = Position::new(1, 1);

/// Everything a run depends on.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub width: usize,
    pub height: usize,
    pub iteration_speed: Option<u64>,
    pub passability: Mapping2D<bool>,
    pub weight_settings: WeightSettings,
    pub knight: Position,
    pub flag: Position,
    pub algorithm: Algorithm,
    pub piece: Piece,
}

impl Default for Settings {
    fn default() -> Self {
        Self::with_size(8, 8)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ChangeSize { width: usize, height: usize },
    SetTile { at: Position, passable: bool },
    SetAlgorithm(Algorithm),
    SetCharacter(Piece),
    SetKnightPosition(Position),
    SetFlagPosition(Position),
    SetWeights(WeightSettings),
    SetIterationSpeed(Option<u64>),
}

impl Action {
    /// Whether applying this action invalidates a running search.
    pub const fn restarts_search(&self) -> bool {
        !matches!(self, Self::SetIterationSpeed(_))
    }
}

impl Settings {
    pub fn with_size(width: usize, height: usize) -> Self {
        let width = width.clamp(MIN_SIZE, MAX_SIZE);
        let height = height.clamp(MIN_SIZE, MAX_SIZE);
        Self {
            width,
            height,
            iteration_speed: Some(500),
            passability: Mapping2D::new(height, width, true),
            weight_settings: WeightSettings::default(),
            knight: DEFAULT_KNIGHT,
            flag: DEFAULT_FLAG,
            algorithm: Algorithm::default(),
            piece: Piece::Knight,
        }
    }

    pub fn is_passable(&self, position: Position) -> bool {
        self.passability.get(position).copied().unwrap_or(false)
    }

    fn is_endpoint(&self, position: Position) -> bool {
        position == self.knight || position == self.flag
    }

    /// Applies `action`. Actions that would leave the settings inconsistent
    /// are dropped and the settings come back unchanged.
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::ChangeSize { width, height } => {
                let width = width.clamp(MIN_SIZE, MAX_SIZE);
                let height = height.clamp(MIN_SIZE, MAX_SIZE);
                self.passability = self.passability.scale_to(height, width, true);
                self.width = width;
                self.height = height;

                let clamp = |p: Position| Position::new(p.x.min(width - 1), p.y.min(height - 1));
                self.knight = clamp(self.knight);
                self.flag = clamp(self.flag);
                if self.knight == self.flag {
                    self.knight = DEFAULT_KNIGHT;
                    self.flag = DEFAULT_FLAG;
                }
                for endpoint in [self.knight, self.flag] {
                    self.passability[endpoint] = true;
                }
            }
            Action::SetTile { at, passable } => {
                if !self.is_endpoint(at) {
                    if let Some(tile) = self.passability.get_mut(at) {
                        *tile = passable;
                    }
                }
            }
            Action::SetAlgorithm(algorithm) => self.algorithm = algorithm,
            Action::SetCharacter(piece) => self.piece = piece,
            Action::SetKnightPosition(at) => {
                if self.is_passable(at) && at != self.flag {
                    self.knight = at;
                }
            }
            Action::SetFlagPosition(at) => {
                if self.is_passable(at) && at != self.knight {
                    self.flag = at;
                }
            }
            Action::SetWeights(weight_settings) => self.weight_settings = weight_settings,
            Action::SetIterationSpeed(speed) => self.iteration_speed = speed,
        }
        self
    }

    /// Takes size, walls and endpoints from `layout`, everything else from
    /// `self`. Missing markers fall back to the default corners.
    pub fn with_layout(&self, layout: &Layout) -> Result<Self, GridError> {
        let (width, height) = (layout.passability.width(), layout.passability.height());
        if !(MIN_SIZE..=MAX_SIZE).contains(&width) || !(MIN_SIZE..=MAX_SIZE).contains(&height) {
            return Err(GridError::Parse(format!(
                "Layout is {width}x{height}, sides must be between {MIN_SIZE} and {MAX_SIZE}"
            )));
        }
        let (knight, flag) = match (layout.knight, layout.flag) {
            (Some(DEFAULT_FLAG), None) => (DEFAULT_FLAG, DEFAULT_KNIGHT),
            (None, Some(DEFAULT_KNIGHT)) => (DEFAULT_FLAG, DEFAULT_KNIGHT),
            (knight, flag) => (
                knight.unwrap_or(DEFAULT_KNIGHT),
                flag.unwrap_or(DEFAULT_FLAG),
            ),
        };
        if knight == flag {
            return Err(GridError::Parse(format!(
                "Knight and flag both stand on {knight}"
            )));
        }

        let mut passability = layout.passability.clone();
        for endpoint in [knight, flag] {
            passability.set_at(endpoint, true)?;
        }
        Ok(Self {
            width,
            height,
            passability,
            knight,
            flag,
            ..self.clone()
        })
    }

    pub fn layout(&self) -> Layout {
        Layout {
            passability: self.passability.clone(),
            knight: Some(self.knight),
            flag: Some(self.flag),
        }
    }

    pub fn board(&self) -> Result<Board, GridError> {
        let mut board = Board::new(self.height, self.width)?;
        board.set_passability_map(&self.passability)?;
        board.set_weight_map(&create_weight_map(
            self.height,
            self.width,
            &self.weight_settings,
        ))?;
        Ok(board)
    }

    pub fn search(&self) -> Result<Box<dyn PathSearch>, SearchError> {
        let board = self.board()?;
        let start = ChessPointer::new(self.knight.x, self.knight.y, self.piece, &board)?;
        let end = ChessPointer::new(self.flag.x, self.flag.y, self.piece, &board)?;
        self.algorithm.search(start, end, board)
    }
}
