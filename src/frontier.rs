/*
Minimum-selection strategies for Dijkstra over the dense matrix.

`ScanFrontier` walks every vertex per selection (O(V)), `HeapFrontier` keeps the
tentative distances in a decrease-key binary heap (O(log V)). Both break ties on
the lowest vertex index, so they finalize vertices in the same order and
record the same predecessors.
*/

use ordered_float::OrderedFloat;
use orx_priority_queue::*;

use crate::graph::Cost;

pub(crate) trait Frontier {
    /// Next unvisited vertex with the smallest finite distance, or `None` when
    /// everything left is unreachable.
    fn select(&mut self, distance: &[Cost], visited: &[bool]) -> Option<usize>;

    /// Called after `distance[index]` was lowered to `cost`.
    fn relaxed(&mut self, index: usize, cost: Cost);
}

#[derive(Debug, Default)]
pub(crate) struct ScanFrontier;

impl Frontier for ScanFrontier {
    fn select(&mut self, distance: &[Cost], visited: &[bool]) -> Option<usize> {
        let mut best = Cost::INFINITY;
        let mut best_index = None;
        for (i, &d) in distance.iter().enumerate() {
            // Strict comparison keeps the earliest index on ties.
            if !visited[i] && d < best {
                best = d;
                best_index = Some(i);
            }
        }
        best_index
    }

    fn relaxed(&mut self, _index: usize, _cost: Cost) {}
}

// Key orders by cost, then by index.
type HeapKey = (OrderedFloat<Cost>, usize);

#[derive(Debug)]
pub(crate) struct HeapFrontier {
    pq: BinaryHeapWithMap<usize, HeapKey>,
}

impl HeapFrontier {
    pub(crate) fn new(source: usize) -> Self {
        let mut pq = BinaryHeapWithMap::new();
        pq.push(source, (OrderedFloat(0.0), source));
        Self { pq }
    }
}

impl Frontier for HeapFrontier {
    fn select(&mut self, _distance: &[Cost], visited: &[bool]) -> Option<usize> {
        while let Some((index, _)) = self.pq.pop() {
            if !visited[index] {
                return Some(index);
            }
        }
        None
    }

    fn relaxed(&mut self, index: usize, cost: Cost) {
        self.pq.decrease_key_or_push(&index, (OrderedFloat(cost), index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_prefers_lowest_index_on_ties() {
        let distance = [3.0, 1.0, 1.0, Cost::INFINITY];
        let visited = [false, false, false, false];
        assert_eq!(ScanFrontier.select(&distance, &visited), Some(1));
    }

    #[test]
    fn scan_skips_visited_and_infinite() {
        let distance = [0.0, Cost::INFINITY, 2.0];
        assert_eq!(ScanFrontier.select(&distance, &[true, false, true]), None);
        assert_eq!(ScanFrontier.select(&distance, &[true, false, false]), Some(2));
    }

    #[test]
    fn heap_pops_by_cost_then_index() {
        let mut frontier = HeapFrontier::new(0);
        let mut visited = vec![false; 4];
        let distance = [0.0; 4];

        assert_eq!(frontier.select(&distance, &visited), Some(0));
        visited[0] = true;
        frontier.relaxed(3, 5.0);
        frontier.relaxed(2, 5.0);
        frontier.relaxed(1, 9.0);
        frontier.relaxed(1, 5.0);

        assert_eq!(frontier.select(&distance, &visited), Some(1));
        visited[1] = true;
        assert_eq!(frontier.select(&distance, &visited), Some(2));
        visited[2] = true;
        assert_eq!(frontier.select(&distance, &visited), Some(3));
        visited[3] = true;
        assert_eq!(frontier.select(&distance, &visited), None);
    }
}
