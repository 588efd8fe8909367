use movegen::{Board, ChessPointer};
use tracing::{debug, trace};
use util::{mapping::Mapping2D, position::Position};

use crate::{
    error::SearchError,
    frontier::{Frontier, Goal},
    IterationResult, SearchResult,
};

/// Object safe face of a running search, for callers that pick the
/// algorithm at runtime.
pub trait PathSearch {
    /// Visits exactly one square. Fails with [`SearchError::Terminated`] once
    /// a terminal result has been returned, without touching the board.
    fn step(&mut self) -> Result<IterationResult, SearchError>;
    fn board(&self) -> &Board;
    fn start(&self) -> ChessPointer;
    fn end(&self) -> ChessPointer;
    fn outcome(&self) -> Option<SearchResult>;
    fn iterations(&self) -> usize;
    /// Squares from start to end, once the target was found.
    fn path(&self) -> Option<Vec<Position>>;
}

/// Incremental search from `start` to `end`, ordered by the frontier `F`.
///
/// The iterator owns its board: distances and back links written into the
/// squares are the search's working state and read back by callers through
/// [`SearchIterator::board`].
#[derive(Debug, Clone)]
pub struct SearchIterator<F: Frontier> {
    board: Board,
    start: ChessPointer,
    end: ChessPointer,
    frontier: F,
    visited: Mapping2D<bool>,
    outcome: Option<SearchResult>,
    iterations: usize,
}

impl<F: Frontier> SearchIterator<F> {
    pub fn new(start: ChessPointer, end: ChessPointer, mut board: Board) -> Result<Self, SearchError> {
        for endpoint in [start, end] {
            if !endpoint.at(&board)?.passable {
                return Err(SearchError::ImpassableEndpoint(endpoint.position));
            }
        }

        board.reset_search();
        board.at_mut(start.position)?.distance_from_start = Some(0.0);

        let goal = Goal {
            target: end.position,
            piece: start.piece,
            min_weight: board.min_weight(),
        };
        let mut frontier = F::init(&goal);
        frontier.push(start.position, 0.0);

        Ok(Self {
            visited: Mapping2D::new(board.height(), board.width(), false),
            board,
            start,
            end,
            frontier,
            outcome: None,
            iterations: 0,
        })
    }

    fn pointer(&self, position: Position) -> ChessPointer {
        ChessPointer {
            position,
            piece: self.start.piece,
        }
    }

    fn finish(&mut self, result: SearchResult, to: Option<Position>) -> IterationResult {
        self.outcome = Some(result);
        debug!(
            ?result,
            iterations = self.iterations,
            distance = ?self.distance(),
            "search finished"
        );
        IterationResult {
            result,
            from: to
                .and_then(|to| self.board.squares[to].shortest_path)
                .map(|p| self.pointer(p)),
            to: to.map(|p| self.pointer(p)),
        }
    }

    pub fn step(&mut self) -> Result<IterationResult, SearchError> {
        if let Some(outcome) = self.outcome {
            return Err(SearchError::Terminated(outcome));
        }
        self.iterations += 1;

        let current = loop {
            match self.frontier.pop() {
                Some(position) if self.visited[position] => continue,
                Some(position) => break position,
                None => return Ok(self.finish(SearchResult::TargetNotFound, None)),
            }
        };
        self.visited[current] = true;

        if current == self.end.position {
            return Ok(self.finish(SearchResult::TargetFound, Some(current)));
        }

        let distance = self.board.squares[current].distance_from_start.unwrap_or(0.0);
        let destinations = self.board.get_moves(self.start.piece, current);
        for next in destinations {
            if self.visited[next] {
                continue;
            }
            let square = &mut self.board.squares[next];
            let candidate = distance + square.weight;
            if F::improves(square.distance_from_start, candidate) {
                square.distance_from_start = Some(candidate);
                square.shortest_path = Some(current);
                self.frontier.push(next, candidate);
            }
        }

        let from = self.board.squares[current].shortest_path;
        trace!(iteration = self.iterations, %current, distance, "visited");
        Ok(IterationResult {
            result: SearchResult::SearchContinues,
            from: from.map(|p| self.pointer(p)),
            to: Some(self.pointer(current)),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn start(&self) -> ChessPointer {
        self.start
    }

    pub fn end(&self) -> ChessPointer {
        self.end
    }

    pub fn outcome(&self) -> Option<SearchResult> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn path(&self) -> Option<Vec<Position>> {
        if self.outcome != Some(SearchResult::TargetFound) {
            return None;
        }
        let mut path = self.end.path_to_start(&self.board);
        path.reverse();
        Some(path)
    }

    /// Cost of the best known route to the target.
    pub fn distance(&self) -> Option<f64> {
        self.board.squares[self.end.position].distance_from_start
    }
}

impl<F: Frontier> Iterator for SearchIterator<F> {
    type Item = IterationResult;

    /// Yields records up to and including the terminal one.
    fn next(&mut self) -> Option<Self::Item> {
        self.step().ok()
    }
}

impl<F: Frontier> PathSearch for SearchIterator<F> {
    fn step(&mut self) -> Result<IterationResult, SearchError> {
        SearchIterator::step(self)
    }

    fn board(&self) -> &Board {
        SearchIterator::board(self)
    }

    fn start(&self) -> ChessPointer {
        self.start
    }

    fn end(&self) -> ChessPointer {
        self.end
    }

    fn outcome(&self) -> Option<SearchResult> {
        self.outcome
    }

    fn iterations(&self) -> usize {
        self.iterations
    }

    fn path(&self) -> Option<Vec<Position>> {
        SearchIterator::path(self)
    }
}
