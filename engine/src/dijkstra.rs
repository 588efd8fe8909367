use util::position::Position;

use crate::{
    cost::Cost,
    frontier::{Frontier, Goal, PriorityQueue},
};

/// Uniform-cost order: cheapest cumulative cost first.
#[derive(Debug, Clone, Default)]
pub struct Dijkstra {
    queue: PriorityQueue<Cost>,
}

impl Frontier for Dijkstra {
    fn init(_: &Goal) -> Self {
        Self::default()
    }

    fn push(&mut self, position: Position, distance: f64) {
        self.queue.push(Cost(distance), position)
    }

    fn pop(&mut self) -> Option<Position> {
        self.queue.pop()
    }
}
