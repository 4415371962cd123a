use crate::minimum_cost_flow::residual_graph::ResidualGraph;
use num_traits::NumAssign;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::Neg;

/// Dijkstra over reduced costs on the residual graph.
///
/// Distance, predecessor and visit buffers are reused across searches.
#[derive(Default)]
pub struct AugmentingPathFinder<Flow> {
    dist: Vec<Option<Flow>>,
    prev: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl<Flow> AugmentingPathFinder<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    /// Runs a full search from `source` and shifts the potentials of every reached node by its distance.
    /// Unreached nodes shift by the largest distance found, so edges into the reached part stay non-negative.
    /// Returns whether `sink` was reached.
    pub fn search(&mut self, graph: &ResidualGraph<Flow>, potentials: &mut [Flow], source: usize, sink: usize) -> bool {
        let num_nodes = graph.num_nodes();
        debug_assert_eq!(potentials.len(), num_nodes);

        self.dist.clear();
        self.dist.resize(num_nodes, None);
        self.prev.clear();
        self.prev.resize(num_nodes, None);
        self.visited.clear();
        self.visited.resize(num_nodes, false);

        let mut bh = BinaryHeap::new();
        bh.push((Reverse(Flow::zero()), Reverse(source)));
        self.dist[source] = Some(Flow::zero());

        while let Some((Reverse(d), Reverse(u))) = bh.pop() {
            if self.visited[u] {
                continue;
            }
            self.visited[u] = true;

            for &edge_id in graph.neighbors(u) {
                if graph.residual_capacity(edge_id) == Flow::zero() {
                    continue;
                }

                let reduced_cost = graph.reduced_cost(edge_id, potentials);
                debug_assert!(reduced_cost >= Flow::zero(), "negative reduced cost on residual edge {}", edge_id);

                // strict improvement only, so the earliest inserted edge wins ties
                let v = graph.head(edge_id);
                let new_dist = d + reduced_cost;
                if self.dist[v].map_or(true, |old| new_dist < old) {
                    self.dist[v] = Some(new_dist);
                    self.prev[v] = Some(edge_id);
                    bh.push((Reverse(new_dist), Reverse(v)));
                }
            }
        }

        // update potentials
        let farthest = (0..num_nodes).filter(|&u| self.visited[u]).filter_map(|u| self.dist[u]).max().unwrap_or(Flow::zero());
        for u in 0..num_nodes {
            match (self.visited[u], self.dist[u]) {
                (true, Some(d)) => potentials[u] += d,
                _ => potentials[u] += farthest,
            }
        }

        self.visited[sink]
    }

    #[cfg(test)]
    fn distance(&self, u: usize) -> Option<Flow> {
        if self.visited.get(u).copied().unwrap_or(false) {
            self.dist[u]
        } else {
            None
        }
    }

    /// Edge ids of the path found by the last search, ordered from `source` to `sink`.
    pub fn path_to(&self, graph: &ResidualGraph<Flow>, sink: usize) -> Vec<usize> {
        let mut path = Vec::new();
        let mut v = sink;
        while let Some(edge_id) = self.prev[v] {
            path.push(edge_id);
            v = graph.tail(edge_id);
            debug_assert!(path.len() < graph.num_nodes());
        }
        path.reverse();
        path
    }
}
