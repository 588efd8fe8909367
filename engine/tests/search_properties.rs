//! Property-based tests for the search contract

use std::collections::{HashSet, VecDeque};

use engine::{Algorithm, IterationResult, PathSearch, SearchError, SearchResult};
use movegen::{Board, ChessPointer};
use proptest::prelude::*;
use util::{mapping::Mapping2D, piece::Piece, position::Position};

#[derive(Debug, Clone)]
struct Scenario {
    width: usize,
    height: usize,
    walls: Vec<bool>,
    weights: Vec<u8>,
    start: Position,
    end: Position,
    piece: Piece,
    algorithm: Algorithm,
}

impl Scenario {
    fn board(&self) -> Board {
        let mut board = Board::new(self.height, self.width).unwrap();
        let passability: Vec<Vec<bool>> = self
            .walls
            .chunks(self.width)
            .map(|row| row.iter().map(|wall| !wall).collect())
            .collect();
        let weights: Vec<Vec<f64>> = self
            .weights
            .chunks(self.width)
            .map(|row| row.iter().map(|w| f64::from(*w)).collect())
            .collect();
        board.set_passability(&passability).unwrap();
        board.set_weight(&weights).unwrap();
        for endpoint in [self.start, self.end] {
            board.at_mut(endpoint).unwrap().passable = true;
        }
        board
    }

    fn search(&self, algorithm: Algorithm) -> Box<dyn PathSearch> {
        let board = self.board();
        let start = ChessPointer::new(self.start.x, self.start.y, self.piece, &board).unwrap();
        let end = ChessPointer::new(self.end.x, self.end.y, self.piece, &board).unwrap();
        algorithm.search(start, end, board).unwrap()
    }
}

fn scenario(max_weight: u8) -> impl Strategy<Value = Scenario> {
    (2usize..8, 2usize..8).prop_flat_map(move |(width, height)| {
        let cells = width * height;
        (
            prop::collection::vec(prop::bool::weighted(0.25), cells),
            prop::collection::vec(1..=max_weight, cells),
            (0..width, 0..height),
            (0..width, 0..height),
            prop::sample::select(Piece::ALL.to_vec()),
            prop::sample::select(Algorithm::ALL.to_vec()),
        )
            .prop_map(move |(walls, weights, start, end, piece, algorithm)| Scenario {
                width,
                height,
                walls,
                weights,
                start: Position::new(start.0, start.1),
                end: Position::new(end.0, end.1),
                piece,
                algorithm,
            })
    })
}

fn run(search: &mut dyn PathSearch) -> Vec<IterationResult> {
    let mut records = Vec::new();
    loop {
        let record = search.step().unwrap();
        records.push(record);
        if record.result.is_terminal() {
            return records;
        }
    }
}

/// Fewest moves from `from` to every square, ignoring weights.
fn fewest_moves(board: &Board, piece: Piece, from: Position) -> Mapping2D<Option<usize>> {
    let mut moves = Mapping2D::new(board.height(), board.width(), None);
    moves[from] = Some(0);
    let mut queue = VecDeque::from([from]);
    while let Some(current) = queue.pop_front() {
        let next = moves[current].map(|m| m + 1);
        for to in board.get_moves(piece, current) {
            if moves[to].is_none() {
                moves[to] = next;
                queue.push_back(to);
            }
        }
    }
    moves
}

proptest! {
    #[test]
    fn runs_are_deterministic(scenario in scenario(4)) {
        let first = run(scenario.search(scenario.algorithm).as_mut());
        let second = run(scenario.search(scenario.algorithm).as_mut());
        prop_assert_eq!(first, second);
    }

    #[test]
    fn walls_are_never_visited(scenario in scenario(4)) {
        let board = scenario.board();
        let records = run(scenario.search(scenario.algorithm).as_mut());
        for record in records {
            if let Some(to) = record.to {
                prop_assert!(board.is_passable(to.position), "visited wall {}", to.position);
            }
        }
    }

    #[test]
    fn found_paths_are_legal_and_acyclic(scenario in scenario(4)) {
        let board = scenario.board();
        let mut search = scenario.search(scenario.algorithm);
        let result = run(search.as_mut()).last().map(|r| r.result);
        let reachable = fewest_moves(&board, scenario.piece, scenario.start)[scenario.end].is_some();
        prop_assert_eq!(
            result,
            Some(if reachable { SearchResult::TargetFound } else { SearchResult::TargetNotFound })
        );

        if let Some(path) = search.path() {
            prop_assert_eq!(path.first(), Some(&scenario.start));
            prop_assert_eq!(path.last(), Some(&scenario.end));
            let unique: HashSet<_> = path.iter().collect();
            prop_assert_eq!(unique.len(), path.len());
            for pair in path.windows(2) {
                prop_assert!(
                    board.get_moves(scenario.piece, pair[0]).contains(&pair[1]),
                    "{} cannot move {} -> {}", scenario.piece, pair[0], pair[1]
                );
            }
        }
    }

    #[test]
    fn terminal_state_is_final(scenario in scenario(4)) {
        let mut search = scenario.search(scenario.algorithm);
        let outcome = run(search.as_mut()).last().map(|r| r.result);
        let board = search.board().clone();
        let path = search.path();
        for _ in 0..3 {
            prop_assert!(matches!(search.step(), Err(SearchError::Terminated(_))));
        }
        prop_assert_eq!(search.outcome(), outcome);
        prop_assert_eq!(search.board(), &board);
        prop_assert_eq!(search.path(), path);
    }

    #[test]
    fn astar_matches_dijkstra_cost(scenario in scenario(5)) {
        let mut dijkstra = scenario.search(Algorithm::Dijkstra);
        let mut astar = scenario.search(Algorithm::AStar);
        run(dijkstra.as_mut());
        run(astar.as_mut());
        let end = scenario.end;
        prop_assert_eq!(
            dijkstra.board().at(end).unwrap().distance_from_start,
            astar.board().at(end).unwrap().distance_from_start
        );
    }

    #[test]
    fn open_boards_cost_the_fewest_moves(
        piece in prop::sample::select(Piece::ALL.to_vec()),
        start in (0usize..6, 0usize..6),
        end in (0usize..6, 0usize..6),
    ) {
        let board = Board::new(6, 6).unwrap();
        let start = ChessPointer::new(start.0, start.1, piece, &board).unwrap();
        let end = ChessPointer::new(end.0, end.1, piece, &board).unwrap();
        let expected = fewest_moves(&board, piece, start.position)[end.position];

        let mut search = Algorithm::Dijkstra.search(start, end, board).unwrap();
        run(search.as_mut());
        let distance = search.board().at(end.position).unwrap().distance_from_start;
        prop_assert_eq!(distance, expected.map(|moves| moves as f64));
        if piece == Piece::King {
            let (dx, dy) = start.position.delta(&end.position);
            prop_assert_eq!(distance, Some(dx.max(dy) as f64));
        }
    }
}

#[test]
fn enclosed_target_is_not_found() {
    for algorithm in Algorithm::ALL {
        for piece in [Piece::King, Piece::Rook, Piece::Bishop, Piece::Queen, Piece::Pawn] {
            let mut board = Board::new(7, 7).unwrap();
            let target = Position::new(4, 4);
            for y in 3..=5 {
                for x in 3..=5 {
                    board.at_mut(Position::new(x, y)).unwrap().passable = false;
                }
            }
            board.at_mut(target).unwrap().passable = true;

            let start = ChessPointer::new(0, 0, piece, &board).unwrap();
            let end = ChessPointer::new(target.x, target.y, piece, &board).unwrap();
            let mut search = algorithm.search(start, end, board).unwrap();
            let records = run(search.as_mut());
            assert_eq!(
                records.last().map(|r| r.result),
                Some(SearchResult::TargetNotFound),
                "{piece} with {algorithm}"
            );
            assert!(records.iter().all(|r| r.to.map(|to| to.position) != Some(target)));
            assert_eq!(search.path(), None);
        }
    }
}

#[test]
fn knight_leaps_over_walls_but_not_onto_them() {
    let mut board = Board::new(7, 7).unwrap();
    let target = Position::new(3, 3);
    for y in 2..=4 {
        for x in 2..=4 {
            board.at_mut(Position::new(x, y)).unwrap().passable = false;
        }
    }
    board.at_mut(target).unwrap().passable = true;
    let start = ChessPointer::new(0, 0, Piece::Knight, &board).unwrap();
    let end = ChessPointer::new(target.x, target.y, Piece::Knight, &board).unwrap();
    let mut search = Algorithm::Dijkstra.search(start, end, board.clone()).unwrap();
    assert_eq!(run(search.as_mut()).last().map(|r| r.result), Some(SearchResult::TargetFound));

    for jump in board.get_moves(Piece::Knight, target) {
        board.at_mut(jump).unwrap().passable = false;
    }
    let mut search = Algorithm::Dijkstra.search(start, end, board).unwrap();
    assert_eq!(
        run(search.as_mut()).last().map(|r| r.result),
        Some(SearchResult::TargetNotFound)
    );
}
