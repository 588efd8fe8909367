use movegen::ChessPointer;
use serde::Serialize;

mod algorithm;
mod astar;
mod cost;
mod dfs;
mod dijkstra;
mod error;
mod frontier;
mod greedy;
pub mod heuristic;
mod search;

pub mod cli;
pub mod session;
pub mod settings;

pub use algorithm::Algorithm;
pub use astar::AStar;
pub use cost::Cost;
pub use dfs::DepthFirst;
pub use dijkstra::Dijkstra;
pub use error::SearchError;
pub use frontier::{Frontier, Goal};
pub use greedy::Greedy;
pub use search::{PathSearch, SearchIterator};

pub type DijkstraSearch = SearchIterator<Dijkstra>;
pub type DepthFirstSearch = SearchIterator<DepthFirst>;
pub type GreedySearch = SearchIterator<Greedy>;
pub type AStarSearch = SearchIterator<AStar>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SearchResult {
    SearchContinues,
    TargetFound,
    TargetNotFound,
}

impl SearchResult {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::SearchContinues)
    }
}

/// What a single call to [`PathSearch::step`] did.
///
/// On `SearchContinues` and `TargetFound`, `to` is the square just visited
/// and `from` the square it was reached from (absent for the start).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IterationResult {
    pub result: SearchResult,
    pub from: Option<ChessPointer>,
    pub to: Option<ChessPointer>,
}
