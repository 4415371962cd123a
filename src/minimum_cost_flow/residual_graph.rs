use crate::minimum_cost_flow::error::{Error, Result};
use num_traits::NumAssign;
use std::ops::Neg;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct ResidualEdge<Flow> {
    pub from: usize,
    pub to: usize,
    pub capacity: Flow, // residual capacity
    pub cost: Flow,
    pub pair: usize,
}

// Edges live in one arena. Edge 2k is the k-th inserted edge and 2k + 1 its reverse.
#[derive(Default, Debug, Clone)]
pub struct ResidualGraph<Flow> {
    num_nodes: usize,
    edges: Vec<ResidualEdge<Flow>>,
    adjacency: Vec<Vec<usize>>,
}

impl<Flow> ResidualGraph<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, edges: Vec::new(), adjacency: vec![Vec::new(); num_nodes] }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    // number of residual edges, reverse edges included
    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    /// Inserts `from -> to` together with its zero-capacity reverse edge and returns the id of the forward edge.
    pub fn add_edge(&mut self, from: usize, to: usize, capacity: Flow, cost: Flow) -> Result<usize> {
        for node in [from, to] {
            if node >= self.num_nodes {
                return Err(Error::NodeOutOfRange { node, num_nodes: self.num_nodes });
            }
        }
        if capacity < Flow::zero() {
            return Err(Error::NegativeCapacity { from, to });
        }

        let forward = self.edges.len();
        let backward = forward + 1;
        self.edges.push(ResidualEdge { from, to, capacity, cost, pair: backward });
        self.edges.push(ResidualEdge { from: to, to: from, capacity: Flow::zero(), cost: -cost, pair: forward });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(backward);

        Ok(forward)
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    #[cfg(test)]
    fn edge(&self, edge_id: usize) -> &ResidualEdge<Flow> {
        &self.edges[edge_id]
    }

    #[inline]
    pub fn residual_capacity(&self, edge_id: usize) -> Flow {
        self.edges[edge_id].capacity
    }

    #[inline]
    pub fn cost(&self, edge_id: usize) -> Flow {
        self.edges[edge_id].cost
    }

    #[inline]
    pub fn head(&self, edge_id: usize) -> usize {
        self.edges[edge_id].to
    }

    #[inline]
    pub fn tail(&self, edge_id: usize) -> usize {
        self.edges[edge_id].from
    }

    #[inline]
    pub fn pair(&self, edge_id: usize) -> usize {
        self.edges[edge_id].pair
    }

    #[inline]
    pub fn is_forward(&self, edge_id: usize) -> bool {
        edge_id % 2 == 0
    }

    pub fn forward_edges(&self) -> impl Iterator<Item = usize> {
        (0..self.edges.len()).step_by(2)
    }

    /// Flow currently sent along a forward edge. This is the residual capacity of its reverse edge.
    #[inline]
    pub fn flow(&self, edge_id: usize) -> Flow {
        debug_assert!(self.is_forward(edge_id));
        self.edges[self.edges[edge_id].pair].capacity
    }

    #[inline]
    pub fn original_capacity(&self, edge_id: usize) -> Flow {
        debug_assert!(self.is_forward(edge_id));
        self.edges[edge_id].capacity + self.flow(edge_id)
    }

    #[inline]
    pub fn reduced_cost(&self, edge_id: usize, potentials: &[Flow]) -> Flow {
        let e = &self.edges[edge_id];
        e.cost + potentials[e.from] - potentials[e.to]
    }

    pub fn has_negative_cost(&self) -> bool {
        self.edges.iter().any(|e| e.capacity > Flow::zero() && e.cost < Flow::zero())
    }

    /// Moves `amount` units of residual capacity from `edge_id` to its pair.
    ///
    /// Panics when `amount` exceeds the residual capacity: the capacity invariant would be broken for every later search.
    #[inline]
    pub fn push_flow(&mut self, edge_id: usize, amount: Flow) {
        assert!(amount >= Flow::zero() && amount <= self.edges[edge_id].capacity, "push of an invalid amount on residual edge {}", edge_id);
        let pair = self.edges[edge_id].pair;
        self.edges[edge_id].capacity -= amount;
        self.edges[pair].capacity += amount;
    }

    // signed excess of outgoing over incoming flow, counted on forward edges
    pub fn net_outflow(&self, u: usize) -> Flow {
        self.forward_edges().fold(Flow::zero(), |mut net, edge_id| {
            let e = &self.edges[edge_id];
            if e.from == u {
                net += self.flow(edge_id);
            }
            if e.to == u {
                net -= self.flow(edge_id);
            }
            net
        })
    }
}
