use util::position::Position;

use crate::{
    cost::Cost,
    frontier::{Frontier, Goal, PriorityQueue},
    heuristic::min_moves,
};

/// Cost so far plus the cheapest possible remainder; ties prefer squares
/// closer to the target.
#[derive(Debug, Clone)]
pub struct AStar {
    goal: Goal,
    queue: PriorityQueue<(Cost, Cost)>,
}

impl AStar {
    fn estimate(&self, position: Position) -> f64 {
        min_moves(self.goal.piece, position, self.goal.target) as f64 * self.goal.min_weight
    }
}

impl Frontier for AStar {
    fn init(goal: &Goal) -> Self {
        Self {
            goal: *goal,
            queue: PriorityQueue::default(),
        }
    }

    fn push(&mut self, position: Position, distance: f64) {
        let h = self.estimate(position);
        self.queue.push((Cost(distance + h), Cost(h)), position)
    }

    fn pop(&mut self) -> Option<Position> {
        self.queue.pop()
    }
}
