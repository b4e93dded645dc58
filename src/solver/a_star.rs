use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::moves::Move;
use crate::state::State;

#[derive(PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub(crate) fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    pub(crate) fn add_created(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate(&mut self, node: &SearchNode) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    /// Returns true if this is the first node at its depth.
    fn add(counts: &mut Vec<usize>, node: &SearchNode) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while node.dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let duplicates = self.total_reached_duplicates();
        let visited = self.total_unique_visited();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}Unknown (not reached)",
            "Depth", "Created", "Unique", "Duplicates"
        )?;
        // created_states is always the longest
        for (depth, &created) in self.created_states.iter().enumerate() {
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            let left = created - visited - duplicates;
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}

/// A frontier entry. Ordered by estimated total cost, ties by insertion order.
#[derive(Debug)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    pub(crate) prev: Option<(State, Move)>,
    pub(crate) dist: u32,
    pub(crate) h: u32,
    pub(crate) seq: u64,
}

impl SearchNode {
    pub(crate) fn new(
        state: State,
        prev: Option<(State, Move)>,
        dist: u32,
        h: u32,
        seq: u64,
    ) -> Self {
        SearchNode {
            state,
            prev,
            dist,
            h,
            seq,
        }
    }

    fn cost(&self) -> u32 {
        self.dist + self.h
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost()
            .cmp(&other.cost())
            .then(self.seq.cmp(&other.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use super::*;
    use crate::data::Pos;

    fn node(dist: u32, h: u32, seq: u64) -> SearchNode {
        SearchNode::new(State::new(Pos::new(0, 0), vec![]), None, dist, h, seq)
    }

    #[test]
    fn pops_lowest_cost_then_oldest() {
        let mut heap = BinaryHeap::new();
        heap.push(Reverse(node(1, 5, 0)));
        heap.push(Reverse(node(2, 2, 1)));
        heap.push(Reverse(node(0, 4, 2)));
        heap.push(Reverse(node(3, 0, 3)));

        let order: Vec<_> = ::std::iter::from_fn(|| heap.pop())
            .map(|Reverse(n)| n.seq)
            .collect();
        assert_eq!(order, vec![3, 1, 2, 0]);
    }

    #[test]
    fn counting_by_depth() {
        let mut stats = Stats::new();
        assert!(stats.add_created(&node(0, 0, 0)));
        assert!(stats.add_created(&node(2, 0, 1)));
        assert!(!stats.add_created(&node(2, 0, 2)));
        assert!(stats.add_unique_visited(&node(0, 0, 0)));
        assert!(stats.add_reached_duplicate(&node(2, 0, 2)));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(stats.created_states, vec![1, 0, 2]);
    }
}
