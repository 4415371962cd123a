use crate::minimum_cost_flow::augmenter;
use crate::minimum_cost_flow::error::{Error, Result};
use crate::minimum_cost_flow::graph::Graph;
use crate::minimum_cost_flow::potential;
use crate::minimum_cost_flow::residual_graph::ResidualGraph;
use crate::minimum_cost_flow::shortest_path::AugmentingPathFinder;
use crate::minimum_cost_flow::status::{Outcome, Status};
use num_traits::NumAssign;
use std::fmt::Debug;
use std::ops::Neg;

/// Successive shortest path with Johnson potentials.
///
/// Each round runs Dijkstra on reduced costs, pushes the bottleneck amount along the cheapest path and
/// keeps the potentials valid for the next round. Negative edge costs are allowed as long as no negative cycle exists.
#[derive(Default)]
pub struct SuccessiveShortestPath<Flow> {
    finder: AugmentingPathFinder<Flow>,
    potentials: Vec<Flow>,
    flow: Flow,
    num_augmentations: usize,
    iteration_limit: Option<usize>,
}

impl<Flow> SuccessiveShortestPath<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug,
{
    // a run that needs more augmentations fails with `Error::IterationLimitExceeded`
    pub fn set_iteration_limit(&mut self, limit: usize) {
        self.iteration_limit = Some(limit);
    }

    /// Units routed by the last run. When the run was infeasible this is the maximum flow.
    #[inline]
    pub fn flow(&self) -> Flow {
        self.flow
    }

    #[inline]
    pub fn num_augmentations(&self) -> usize {
        self.num_augmentations
    }

    #[inline]
    pub fn potentials(&self) -> &[Flow] {
        &self.potentials
    }

    /// Sends `demand` units from `source` to `sink` at minimum cost, mutating `graph` in place.
    pub fn run(&mut self, graph: &mut ResidualGraph<Flow>, source: usize, sink: usize, demand: Flow) -> Result<Outcome<Flow>> {
        for node in [source, sink] {
            if node >= graph.num_nodes() {
                return Err(Error::NodeOutOfRange { node, num_nodes: graph.num_nodes() });
            }
        }
        if demand < Flow::zero() {
            return Err(Error::NegativeDemand);
        }

        self.flow = Flow::zero();
        self.num_augmentations = 0;
        self.potentials.clear();
        log::debug!("routing {:?} units from {} to {} over {} nodes and {} residual edges", demand, source, sink, graph.num_nodes(), graph.num_edges());

        if demand == Flow::zero() || source == sink {
            return Ok(Outcome::Optimal(Flow::zero()));
        }

        self.potentials = potential::initial_potentials(graph)?;

        let mut remaining = demand;
        let mut total_cost = Flow::zero();
        while remaining > Flow::zero() {
            if let Some(limit) = self.iteration_limit {
                if self.num_augmentations >= limit {
                    log::debug!("stopped after {} augmentations with {:?} units left", limit, remaining);
                    return Err(Error::IterationLimitExceeded { limit });
                }
            }

            if !self.finder.search(graph, &mut self.potentials, source, sink) {
                log::debug!("sink {} is unreachable with {:?} of {:?} units left", sink, remaining, demand);
                return Ok(Outcome::Infeasible);
            }

            let path = self.finder.path_to(graph, sink);
            let augmentation = augmenter::augment(graph, path, remaining);
            log::trace!("pushed {:?} units along {} edges at cost {:?}", augmentation.amount, augmentation.path.len(), augmentation.cost);

            remaining = augmentation.remaining;
            total_cost += augmentation.cost;
            self.flow += augmentation.amount;
            self.num_augmentations += 1;
        }

        log::debug!("routed {:?} units at cost {:?} in {} augmentations", self.flow, total_cost, self.num_augmentations);
        Ok(Outcome::Optimal(total_cost))
    }

    /// Satisfies every supply and demand of `graph` and writes the resulting edge flows back into it.
    pub fn solve(&mut self, graph: &mut Graph<Flow>) -> Result<Status> {
        if graph.is_unbalance() {
            return Err(Error::Unbalanced);
        }

        let num_nodes = graph.num_nodes();
        let mut residual = ResidualGraph::new(num_nodes);
        let mut edge_ids = Vec::with_capacity(graph.num_edges());
        for edge in graph.edges.iter() {
            edge_ids.push(residual.add_edge(edge.from, edge.to, edge.upper, edge.cost)?);
        }

        // transforms the problem into one with a single excess node and a single deficit node
        let (source, sink) = (residual.add_node(), residual.add_node());
        let mut demand = Flow::zero();
        for u in 0..num_nodes {
            let excess = graph.excesses[u];
            if excess > Flow::zero() {
                residual.add_edge(source, u, excess, Flow::zero())?;
                demand += excess;
            } else if excess < Flow::zero() {
                residual.add_edge(u, sink, -excess, Flow::zero())?;
            }
        }

        let outcome = self.run(&mut residual, source, sink, demand)?;

        for (edge, &edge_id) in graph.edges.iter_mut().zip(edge_ids.iter()) {
            edge.flow = residual.flow(edge_id);
        }

        Ok(Status::from(&outcome))
    }
}

/// Minimum cost of sending `demand` units from `source` to `sink` over `(from, to, capacity, cost)` edges.
pub fn min_cost_flow<Flow>(num_nodes: usize, edges: &[(usize, usize, Flow, Flow)], source: usize, sink: usize, demand: Flow) -> Result<Outcome<Flow>>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug + Default,
{
    let mut graph = ResidualGraph::new(num_nodes);
    for &(from, to, capacity, cost) in edges {
        graph.add_edge(from, to, capacity, cost)?;
    }
    SuccessiveShortestPath::default().run(&mut graph, source, sink, demand)
}

/// Minimum cost of meeting signed node supplies (positive = supply, negative = demand).
/// Repeated nodes accumulate.
pub fn min_cost_flow_with_supplies<Flow, I>(num_nodes: usize, edges: &[(usize, usize, Flow, Flow)], supplies: I) -> Result<Outcome<Flow>>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Debug + Default,
    I: IntoIterator<Item = (usize, Flow)>,
{
    let mut graph = Graph::from_edges(num_nodes, edges)?;
    for (u, supply) in supplies {
        graph.add_supply(u, supply)?;
    }

    match SuccessiveShortestPath::default().solve(&mut graph)? {
        Status::Optimal => Ok(Outcome::Optimal(graph.minimum_cost())),
        _ => Ok(Outcome::Infeasible),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn potentials_certify_optimality() {
        let mut graph = ResidualGraph::<i64>::new(4);
        graph.add_edge(0, 1, 10, 1).unwrap();
        graph.add_edge(1, 3, 10, 1).unwrap();
        graph.add_edge(0, 2, 10, 5).unwrap();
        graph.add_edge(2, 3, 10, 1).unwrap();
        graph.add_edge(1, 2, 3, -2).unwrap();

        let mut solver = SuccessiveShortestPath::default();
        let outcome = solver.run(&mut graph, 0, 3, 12).unwrap();
        assert!(outcome.is_feasible());
        assert_eq!(solver.flow(), 12);

        let potentials = solver.potentials();
        for edge_id in 0..graph.num_edges() {
            if graph.residual_capacity(edge_id) > 0 {
                assert!(graph.reduced_cost(edge_id, potentials) >= 0, "edge {} violates reduced cost optimality", edge_id);
            }
        }
    }

    #[test]
    fn potentials_stay_valid_for_unreached_nodes() {
        // node 2 is never reached from the source but its edge into node 1 keeps capacity
        let mut graph = ResidualGraph::<i64>::new(3);
        graph.add_edge(0, 1, 1, 1).unwrap();
        graph.add_edge(2, 1, 1, 0).unwrap();

        let mut solver = SuccessiveShortestPath::default();
        assert_eq!(solver.run(&mut graph, 0, 1, 1), Ok(Outcome::Optimal(1)));

        let potentials = solver.potentials();
        for edge_id in 0..graph.num_edges() {
            if graph.residual_capacity(edge_id) > 0 {
                assert!(graph.reduced_cost(edge_id, potentials) >= 0, "edge {} has a negative reduced cost", edge_id);
            }
        }
    }

    #[test]
    fn solver_state_resets_between_runs() {
        let mut solver = SuccessiveShortestPath::default();

        let mut first = ResidualGraph::<i32>::new(2);
        first.add_edge(0, 1, 4, 3).unwrap();
        assert_eq!(solver.run(&mut first, 0, 1, 4), Ok(Outcome::Optimal(12)));
        assert_eq!(solver.num_augmentations(), 1);

        let mut second = ResidualGraph::<i32>::new(3);
        second.add_edge(0, 1, 1, 1).unwrap();
        assert_eq!(solver.run(&mut second, 0, 2, 1), Ok(Outcome::Infeasible));
        assert_eq!(solver.flow(), 0);
        assert_eq!(solver.num_augmentations(), 0);
    }
}
