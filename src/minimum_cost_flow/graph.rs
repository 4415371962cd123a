use crate::minimum_cost_flow::error::{Error, Result};
use num_traits::NumAssign;
use std::ops::Neg;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub lower: Flow,
    pub upper: Flow,
    pub cost: Flow,
}

/// A supply/demand network. Positive supply marks a source of flow, negative supply a demand.
#[derive(Default, Debug, Clone)]
pub struct Graph<Flow> {
    num_nodes: usize,
    num_edges: usize,
    // lower bounds are pre-routed: `flow` and `upper` are stored shifted by `lowers`
    pub(crate) edges: Vec<Edge<Flow>>,
    pub(crate) b: Vec<Flow>,
    pub(crate) lowers: Vec<Flow>,
    pub(crate) excesses: Vec<Flow>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, num_edges: 0, edges: Vec::new(), b: vec![Flow::zero(); num_nodes], lowers: Vec::new(), excesses: vec![Flow::zero(); num_nodes] }
    }

    /// Builds a graph from `(from, to, capacity, cost)` tuples.
    pub fn from_edges(num_nodes: usize, edges: &[(usize, usize, Flow, Flow)]) -> Result<Self> {
        let mut graph = Self::new(num_nodes);
        for &(from, to, capacity, cost) in edges {
            graph.add_directed_edge(from, to, Flow::zero(), capacity, cost)?;
        }
        log::trace!("built graph with {} nodes and {} edges", graph.num_nodes, graph.num_edges);
        Ok(graph)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn add_node(&mut self) -> usize {
        self.b.push(Flow::zero());
        self.excesses.push(Flow::zero());
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    pub fn add_nodes(&mut self, num_nodes: usize) -> Vec<usize> {
        self.b.extend(vec![Flow::zero(); num_nodes]);
        self.excesses.extend(vec![Flow::zero(); num_nodes]);
        self.num_nodes += num_nodes;
        ((self.num_nodes - num_nodes)..self.num_nodes).collect()
    }

    pub fn add_supply(&mut self, u: usize, supply: Flow) -> Result<()> {
        self.check_node(u)?;
        self.b[u] += supply;
        self.excesses[u] += supply;
        Ok(())
    }

    pub fn add_demand(&mut self, u: usize, demand: Flow) -> Result<()> {
        self.add_supply(u, -demand)
    }

    #[inline]
    pub fn supply(&self, u: usize) -> Flow {
        self.b[u]
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, lower: Flow, upper: Flow, cost: Flow) -> Result<usize> {
        self.check_node(from)?;
        self.check_node(to)?;
        if upper < Flow::zero() {
            return Err(Error::NegativeCapacity { from, to });
        }
        if lower < Flow::zero() || lower > upper {
            return Err(Error::InvalidBounds { from, to });
        }

        self.edges.push(Edge { from, to, flow: Flow::zero(), lower: Flow::zero(), upper: upper - lower, cost });
        self.excesses[from] -= lower;
        self.excesses[to] += lower;
        self.lowers.push(lower);

        self.num_edges += 1;
        Ok(self.num_edges - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        let edge = self.edges.get(edge_id)?;
        let lower = self.lowers[edge_id];
        Some(Edge { from: edge.from, to: edge.to, flow: edge.flow + lower, lower, upper: edge.upper + lower, cost: edge.cost })
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<Flow>> + '_ {
        (0..self.num_edges).filter_map(|edge_id| self.get_edge(edge_id))
    }

    pub fn minimum_cost(&self) -> Flow {
        self.edges().fold(Flow::zero(), |cost, edge| cost + edge.cost * edge.flow)
    }

    pub fn net_outflow(&self, u: usize) -> Flow {
        self.edges().fold(Flow::zero(), |mut net, edge| {
            if edge.from == u {
                net += edge.flow;
            }
            if edge.to == u {
                net -= edge.flow;
            }
            net
        })
    }

    pub fn is_unbalance(&self) -> bool {
        self.b.iter().fold(Flow::zero(), |sum, &supply| sum + supply) != Flow::zero()
    }

    fn check_node(&self, u: usize) -> Result<()> {
        if u >= self.num_nodes {
            return Err(Error::NodeOutOfRange { node: u, num_nodes: self.num_nodes });
        }
        Ok(())
    }
}
