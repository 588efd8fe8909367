use std::{cmp::Ordering, ops::Add};

/// Path cost with a total order so it can key a heap.
#[derive(Debug, Clone, Copy, Default)]
pub struct Cost(pub f64);

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Cost {}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cost {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Cost {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_like_floats() {
        let mut costs = vec![Cost(2.5), Cost(0.0), Cost(1.0)];
        costs.sort();
        assert_eq!(costs, vec![Cost(0.0), Cost(1.0), Cost(2.5)]);
        assert_eq!(Cost(1.0) + Cost(0.5), Cost(1.5));
    }
}
