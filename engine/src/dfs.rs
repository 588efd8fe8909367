use util::position::Position;

use crate::frontier::{Frontier, Goal};

/// Stack order. The most recently discovered square is visited next and a
/// rediscovered square is re-parented to whoever pushed it last.
#[derive(Debug, Clone, Default)]
pub struct DepthFirst {
    stack: Vec<Position>,
}

impl Frontier for DepthFirst {
    fn init(_: &Goal) -> Self {
        Self::default()
    }

    fn push(&mut self, position: Position, _: f64) {
        self.stack.push(position)
    }

    fn pop(&mut self) -> Option<Position> {
        self.stack.pop()
    }

    fn improves(_: Option<f64>, _: f64) -> bool {
        true
    }
}
