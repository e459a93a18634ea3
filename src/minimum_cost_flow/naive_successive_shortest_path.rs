use crate::error::Error;
use crate::graph::Graph;
use crate::minimum_cost_flow::bellman_ford::bellman_ford;
use crate::path::{find_path, saturate_flow};
use num_traits::NumAssign;
use std::ops::Neg;

// successive shortest paths with a full Bellman-Ford search per phase
#[derive(Default)]
pub struct NaiveSuccessiveShortestPath;

impl NaiveSuccessiveShortestPath {
    pub fn new() -> Self {
        NaiveSuccessiveShortestPath
    }

    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<(Flow, Flow), Error>
    where
        Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
    {
        graph.check_node(source)?;
        graph.check_node(sink)?;
        graph.reset_flow();

        // a path from the source to itself carries no flow
        if source == sink {
            return Ok((Flow::zero(), Flow::zero()));
        }

        let mut total_cost = Flow::zero();
        let mut total_flow = Flow::zero();
        loop {
            let (min_cost, previous_edge) = bellman_ford(graph, source)?;
            if min_cost[sink].is_none() {
                return Ok((total_cost, total_flow));
            }

            let path = find_path(graph, &previous_edge, source, sink);
            let (cost, flow) = saturate_flow(graph, &path);
            total_cost += cost;
            total_flow += flow;
        }
    }
}
