use crate::minimum_cost_flow::error::{Error, Result};
use crate::minimum_cost_flow::residual_graph::ResidualGraph;
use num_traits::NumAssign;
use std::ops::Neg;

/// Potentials under which every residual edge with positive capacity has a non-negative reduced cost.
///
/// Zero when no such edge has a negative cost. Otherwise the shortest distances from a virtual node joined to every node by
/// zero-cost edges, computed with Bellman-Ford. A relaxation in round `num_nodes` means a negative cycle.
pub fn initial_potentials<Flow>(graph: &ResidualGraph<Flow>) -> Result<Vec<Flow>>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    let mut potentials = vec![Flow::zero(); graph.num_nodes()];
    if !graph.has_negative_cost() {
        return Ok(potentials);
    }

    // the virtual node's edges are already relaxed
    let mut prev = vec![None; graph.num_nodes()];
    let mut last_updated = None;
    for _ in 0..graph.num_nodes() {
        last_updated = None;
        for u in 0..graph.num_nodes() {
            for &edge_id in graph.neighbors(u) {
                if graph.residual_capacity(edge_id) == Flow::zero() {
                    continue;
                }
                let v = graph.head(edge_id);
                let new_dist = potentials[u] + graph.cost(edge_id);
                if new_dist < potentials[v] {
                    potentials[v] = new_dist;
                    prev[v] = Some(u);
                    last_updated = Some(v);
                }
            }
        }
        if last_updated.is_none() {
            return Ok(potentials);
        }
    }

    match last_updated {
        Some(start) => {
            // the node relaxed last may only hang off the cycle; walking back num_nodes steps lands on it
            let mut node = start;
            for _ in 0..graph.num_nodes() {
                match prev[node] {
                    Some(u) => node = u,
                    None => break,
                }
            }
            log::debug!("negative cycle detected through node {}", node);
            Err(Error::NegativeCycle { node })
        }
        None => Ok(potentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_costs_give_zero_potentials() {
        let mut graph = ResidualGraph::<i64>::new(3);
        graph.add_edge(0, 1, 1, 4).unwrap();
        graph.add_edge(1, 2, 1, 0).unwrap();
        assert_eq!(initial_potentials(&graph), Ok(vec![0, 0, 0]));
    }

    #[test]
    fn negative_costs_give_shortest_distances() {
        let mut graph = ResidualGraph::<i64>::new(4);
        graph.add_edge(0, 1, 1, -2).unwrap();
        graph.add_edge(1, 2, 1, -3).unwrap();
        graph.add_edge(0, 2, 1, 1).unwrap();
        graph.add_edge(2, 3, 1, 4).unwrap();

        let potentials = initial_potentials(&graph).unwrap();
        assert_eq!(potentials, vec![0, -2, -5, -1]);
        for edge_id in graph.forward_edges() {
            assert!(graph.reduced_cost(edge_id, &potentials) >= 0);
        }
    }

    #[test]
    fn saturated_negative_edges_are_ignored() {
        let mut graph = ResidualGraph::<i64>::new(2);
        graph.add_edge(0, 1, 0, -5).unwrap();
        assert_eq!(initial_potentials(&graph), Ok(vec![0, 0]));
    }

    #[test]
    fn negative_cycle_is_reported() {
        let mut graph = ResidualGraph::<i64>::new(3);
        graph.add_edge(0, 1, 1, 1).unwrap();
        graph.add_edge(1, 2, 1, -3).unwrap();
        graph.add_edge(2, 0, 1, 1).unwrap();
        assert!(matches!(initial_potentials(&graph), Err(Error::NegativeCycle { .. })));
    }

    #[test]
    fn reported_node_lies_on_the_cycle() {
        // node 3 hangs off the cycle 1 -> 2 -> 1 and is relaxed after it in every round
        let mut graph = ResidualGraph::<i64>::new(4);
        graph.add_edge(0, 1, 1, 1).unwrap();
        graph.add_edge(1, 2, 1, -3).unwrap();
        graph.add_edge(2, 1, 1, 1).unwrap();
        graph.add_edge(2, 3, 1, 0).unwrap();

        match initial_potentials(&graph) {
            Err(Error::NegativeCycle { node }) => assert!(node == 1 || node == 2, "node {} is not on the cycle", node),
            other => panic!("expected a negative cycle, got {:?}", other),
        }
    }

    #[test]
    fn negative_self_loop_is_a_cycle() {
        let mut graph = ResidualGraph::<i32>::new(1);
        graph.add_edge(0, 0, 1, -1).unwrap();
        assert_eq!(initial_potentials(&graph), Err(Error::NegativeCycle { node: 0 }));
    }
}
