use std::{fmt, str::FromStr};

use movegen::{Board, ChessPointer};
use serde::{Deserialize, Serialize};
use util::error::GridError;

use crate::{
    error::SearchError,
    search::{PathSearch, SearchIterator},
    AStar, DepthFirst, Dijkstra, Greedy,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Dijkstra,
    #[serde(rename = "dfs")]
    DepthFirstSearch,
    Greedy,
    #[serde(rename = "astar")]
    AStar,
}

impl Algorithm {
    pub const ALL: [Self; 4] = [
        Self::Dijkstra,
        Self::DepthFirstSearch,
        Self::Greedy,
        Self::AStar,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::DepthFirstSearch => "dfs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dijkstra => "Dijkstra",
            Self::DepthFirstSearch => "Depth First Search",
            Self::Greedy => "Greedy",
            Self::AStar => "A-Star",
        }
    }

    /// Starts a fresh search of this kind over `board`.
    pub fn search(
        &self,
        start: ChessPointer,
        end: ChessPointer,
        board: Board,
    ) -> Result<Box<dyn PathSearch>, SearchError> {
        Ok(match self {
            Self::Dijkstra => Box::new(SearchIterator::<Dijkstra>::new(start, end, board)?),
            Self::DepthFirstSearch => Box::new(SearchIterator::<DepthFirst>::new(start, end, board)?),
            Self::Greedy => Box::new(SearchIterator::<Greedy>::new(start, end, board)?),
            Self::AStar => Box::new(SearchIterator::<AStar>::new(start, end, board)?),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalize = |s: &str| {
            s.chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
                .to_ascii_lowercase()
        };
        let wanted = normalize(input);
        Self::ALL
            .into_iter()
            .find(|algo| normalize(algo.name()) == wanted || normalize(algo.label()) == wanted)
            .ok_or_else(|| GridError::Parse(format!("'{input}' is not a known algorithm")))
    }
}

#[cfg(test)]
mod tests {
    use util::piece::Piece;

    use super::*;
    use crate::SearchResult;

    #[test]
    fn parses_names_and_labels() {
        assert_eq!("dfs".parse::<Algorithm>(), Ok(Algorithm::DepthFirstSearch));
        assert_eq!("A-Star".parse::<Algorithm>(), Ok(Algorithm::AStar));
        assert_eq!("DepthFirstSearch".parse::<Algorithm>(), Ok(Algorithm::DepthFirstSearch));
        assert!("bfs".parse::<Algorithm>().is_err());
        for algo in Algorithm::ALL {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
    }

    #[test]
    fn every_algorithm_reaches_an_open_target() {
        for algo in Algorithm::ALL {
            let board = Board::new(5, 5).unwrap();
            let start = ChessPointer::new(0, 0, Piece::Knight, &board).unwrap();
            let end = ChessPointer::new(4, 4, Piece::Knight, &board).unwrap();
            let mut search = algo.search(start, end, board).unwrap();
            let outcome = loop {
                let step = search.step().unwrap();
                if step.result.is_terminal() {
                    break step.result;
                }
            };
            assert_eq!(outcome, SearchResult::TargetFound, "{algo}");
            assert_eq!(search.outcome(), Some(SearchResult::TargetFound));
            let path = search.path().unwrap();
            assert_eq!(path.first(), Some(&start.position));
            assert_eq!(path.last(), Some(&end.position));
        }
    }
}
