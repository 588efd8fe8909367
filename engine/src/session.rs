use std::fmt;

use movegen::Board;
use serde::Serialize;
use tracing::{debug, info};
use util::{mapping::Mapping2D, position::Position};

use crate::{
    error::SearchError,
    search::PathSearch,
    settings::{Action, Settings},
    IterationResult, SearchResult,
};

/// How a square is drawn while a search runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TileLogic {
    Unpassable,
    NotFound,
    Found,
    Visited,
    Road,
}

impl TileLogic {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Unpassable => "unpassable",
            Self::NotFound => "notfound",
            Self::Found => "found",
            Self::Visited => "visited",
            Self::Road => "road",
        }
    }

    const fn symbol(&self) -> char {
        match self {
            Self::Unpassable => '#',
            Self::NotFound => '.',
            Self::Found => '+',
            Self::Visited => 'o',
            Self::Road => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Line {
    pub from: Position,
    pub to: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PathLength {
    Moves(usize),
    Unreachable,
}

impl fmt::Display for PathLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Moves(1) => f.write_str("1 move"),
            Self::Moves(moves) => write!(f, "{moves} moves"),
            Self::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// A search run together with the picture drawn from it.
pub struct Session {
    settings: Settings,
    search: Box<dyn PathSearch>,
    tiles: Mapping2D<TileLogic>,
    arrows: Vec<Line>,
    shadows: Vec<Position>,
    iterations: usize,
    path_length: Option<PathLength>,
}

impl Session {
    pub fn new(settings: Settings) -> Result<Self, SearchError> {
        let search = settings.search()?;
        let tiles = settings.passability.map(|passable, _| {
            if *passable {
                TileLogic::NotFound
            } else {
                TileLogic::Unpassable
            }
        });
        debug!(
            algorithm = %settings.algorithm,
            piece = %settings.piece,
            knight = %settings.knight,
            flag = %settings.flag,
            "new search session"
        );
        Ok(Self {
            settings,
            search,
            tiles,
            arrows: Vec::new(),
            shadows: Vec::new(),
            iterations: 0,
            path_length: None,
        })
    }

    /// Starts a run and advances it `steps` times, stopping early once it
    /// finishes.
    pub fn replay(settings: Settings, steps: usize) -> Result<Self, SearchError> {
        let mut session = Self::new(settings)?;
        for _ in 0..steps {
            if session.advance().is_none() {
                break;
            }
        }
        Ok(session)
    }

    /// Changes the settings. Everything except the iteration speed throws the
    /// current run away.
    pub fn apply(&mut self, action: Action) -> Result<(), SearchError> {
        let restart = action.restarts_search();
        let settings = self.settings.clone().reduce(action);
        if restart {
            *self = Self::new(settings)?;
        } else {
            self.settings = settings;
        }
        Ok(())
    }

    /// Polls the search once. Returns `None` when it has already finished.
    pub fn advance(&mut self) -> Option<IterationResult> {
        let record = self.search.step().ok()?;
        self.iterations += 1;

        match record.result {
            SearchResult::SearchContinues => self.mark_visit(&record),
            SearchResult::TargetFound => self.mark_road(),
            SearchResult::TargetNotFound => self.path_length = Some(PathLength::Unreachable),
        }
        if record.result.is_terminal() {
            info!(
                result = ?record.result,
                iterations = self.iterations,
                path = ?self.path_length,
                "search finished"
            );
        }
        Some(record)
    }

    fn mark_visit(&mut self, record: &IterationResult) {
        if let Some(to) = record.to {
            self.tiles[to.position] = TileLogic::Visited;
        }
        let board = self.search.board();
        let tiles = &mut self.tiles;
        board.for_each(|square, position| {
            if tiles[position] == TileLogic::NotFound && square.distance_from_start.is_some() {
                tiles[position] = TileLogic::Found;
            }
        });

        self.arrows.clear();
        self.shadows.clear();
        if let (Some(from), Some(to)) = (record.from, record.to) {
            self.arrows.push(Line {
                from: from.position,
                to: to.position,
            });
            self.shadows.push(from.position);
        }
    }

    fn mark_road(&mut self) {
        let path = self.search.path().unwrap_or_default();
        for position in &path {
            self.tiles[*position] = TileLogic::Road;
        }
        self.arrows = path
            .windows(2)
            .map(|pair| Line {
                from: pair[0],
                to: pair[1],
            })
            .collect();
        self.shadows = path[..path.len().saturating_sub(1)].to_vec();
        self.path_length = Some(PathLength::Moves(path.len().saturating_sub(1)));
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn board(&self) -> &Board {
        self.search.board()
    }

    pub fn search(&self) -> &dyn PathSearch {
        self.search.as_ref()
    }

    pub fn tiles(&self) -> &Mapping2D<TileLogic> {
        &self.tiles
    }

    pub fn arrows(&self) -> &[Line] {
        &self.arrows
    }

    pub fn shadows(&self) -> &[Position] {
        &self.shadows
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn path_length(&self) -> Option<PathLength> {
        self.path_length
    }

    pub fn is_finished(&self) -> bool {
        self.search.outcome().is_some()
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.tiles.rows().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                let position = Position::new(x, y);
                let c = if position == self.settings.knight {
                    self.settings.piece.symbol()
                } else if position == self.settings.flag {
                    '⚑'
                } else {
                    tile.symbol()
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "{} via {}, iterations: {}",
            self.settings.piece, self.settings.algorithm, self.iterations
        )?;
        if let Some(length) = self.path_length {
            write!(f, ", path: {length}")?;
        }
        Ok(())
    }
}
