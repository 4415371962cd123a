#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    #[error("edge {from}->{to} has a negative capacity")]
    NegativeCapacity { from: usize, to: usize },

    #[error("edge {from}->{to} has a lower bound outside 0..=capacity")]
    InvalidBounds { from: usize, to: usize },

    #[error("demand must be non-negative")]
    NegativeDemand,

    #[error("total supply does not match total demand")]
    Unbalanced,

    #[error("negative cost cycle through node {node}")]
    NegativeCycle { node: usize },

    #[error("no optimal flow found within {limit} augmentations")]
    IterationLimitExceeded { limit: usize },
}

impl Error {
    /// True for errors caused by malformed problem data, raised before any search starts.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::NodeOutOfRange { .. } | Error::NegativeCapacity { .. } | Error::InvalidBounds { .. } | Error::NegativeDemand | Error::Unbalanced)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
