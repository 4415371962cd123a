use crate::minimum_cost_flow::residual_graph::ResidualGraph;
use num_traits::NumAssign;
use std::ops::Neg;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Augmentation<Flow> {
    pub amount: Flow,
    pub cost: Flow,
    pub remaining: Flow,
    pub path: Vec<usize>,
}

/// Pushes as much flow as possible, capped by `remaining`, along `path` (edge ids from source to sink).
/// The cost is accumulated with the true edge costs.
pub fn augment<Flow>(graph: &mut ResidualGraph<Flow>, path: Vec<usize>, remaining: Flow) -> Augmentation<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    // calculate delta
    let delta = path.iter().fold(remaining, |delta, &edge_id| delta.min(graph.residual_capacity(edge_id)));
    debug_assert!(!path.is_empty() && delta > Flow::zero());

    // update flow
    let mut cost = Flow::zero();
    for &edge_id in path.iter() {
        graph.push_flow(edge_id, delta);
        cost += delta * graph.cost(edge_id);
    }

    Augmentation { amount: delta, cost, remaining: remaining - delta, path }
}
