#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub enum Status {
    #[default]
    NotSolved,
    Infeasible,
    Optimal,
}

/// Result of routing a fixed amount of flow.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Outcome<Flow> {
    Optimal(Flow),
    // the network cannot carry the requested amount
    Infeasible,
}

impl<Flow: Copy> Outcome<Flow> {
    pub fn cost(&self) -> Option<Flow> {
        match self {
            Outcome::Optimal(cost) => Some(*cost),
            Outcome::Infeasible => None,
        }
    }

    pub fn is_feasible(&self) -> bool {
        matches!(self, Outcome::Optimal(_))
    }
}

impl<Flow> From<&Outcome<Flow>> for Status {
    fn from(outcome: &Outcome<Flow>) -> Self {
        match outcome {
            Outcome::Optimal(_) => Status::Optimal,
            Outcome::Infeasible => Status::Infeasible,
        }
    }
}
