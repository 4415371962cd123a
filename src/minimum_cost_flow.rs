pub mod augmenter;
pub mod error;
pub mod graph;
pub mod potential;
pub mod residual_graph;
pub mod shortest_path;
pub mod status;
pub mod successive_shortest_path;

pub use error::Error;
pub use graph::{Edge, Graph};
pub use residual_graph::ResidualGraph;
pub use status::{Outcome, Status};
pub use successive_shortest_path::{min_cost_flow, min_cost_flow_with_supplies, SuccessiveShortestPath};
