use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("node {0} is out of range")]
    InvalidNode(usize),
    #[error("negative-cost cycle reachable from the source")]
    NegativeCostCycle,
}
