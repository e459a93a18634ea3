pub mod error;
pub mod graph;
pub mod maximum_flow;
pub mod minimum_cost_flow;
pub(crate) mod path;

#[cfg(test)]
pub(crate) mod test_utility;
