use std::{cmp::Reverse, collections::BinaryHeap};

use util::{piece::Piece, position::Position};

/// What a frontier may look at when ordering squares.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Goal {
    pub target: Position,
    pub piece: Piece,
    /// Cheapest passable square on the board.
    pub min_weight: f64,
}

/// Expansion order of a search: which discovered square gets visited next.
pub trait Frontier {
    fn init(goal: &Goal) -> Self;
    fn push(&mut self, position: Position, distance: f64);
    fn pop(&mut self) -> Option<Position>;

    /// Whether a square not yet visited should take `candidate` as its
    /// distance and be re-parented.
    fn improves(current: Option<f64>, candidate: f64) -> bool {
        current.map_or(true, |current| candidate < current)
    }
}

/// Min-heap popping equal keys in insertion order.
#[derive(Debug, Clone)]
pub(crate) struct PriorityQueue<K: Ord> {
    heap: BinaryHeap<Reverse<(K, u64, Position)>>,
    seq: u64,
}

impl<K: Ord> Default for PriorityQueue<K> {
    fn default() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }
}

impl<K: Ord> PriorityQueue<K> {
    pub fn push(&mut self, key: K, position: Position) {
        self.heap.push(Reverse((key, self.seq, position)));
        self.seq += 1;
    }

    pub fn pop(&mut self) -> Option<Position> {
        self.heap.pop().map(|Reverse((_, _, position))| position)
    }
}
