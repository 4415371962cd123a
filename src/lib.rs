pub mod minimum_cost_flow;
