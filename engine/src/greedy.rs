use util::position::Position;

use crate::{
    cost::Cost,
    frontier::{Frontier, Goal, PriorityQueue},
    heuristic::min_moves,
};

/// Best-first on the estimate alone, straight-line distance breaks ties.
#[derive(Debug, Clone)]
pub struct Greedy {
    goal: Goal,
    queue: PriorityQueue<(usize, Cost)>,
}

impl Frontier for Greedy {
    fn init(goal: &Goal) -> Self {
        Self {
            goal: *goal,
            queue: PriorityQueue::default(),
        }
    }

    fn push(&mut self, position: Position, _: f64) {
        let key = (
            min_moves(self.goal.piece, position, self.goal.target),
            Cost(position.euclidean(&self.goal.target)),
        );
        self.queue.push(key, position)
    }

    fn pop(&mut self) -> Option<Position> {
        self.queue.pop()
    }
}
