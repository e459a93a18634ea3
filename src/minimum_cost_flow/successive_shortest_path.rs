use crate::error::Error;
use crate::graph::Graph;
use crate::minimum_cost_flow::bellman_ford::bellman_ford;
use crate::minimum_cost_flow::dijkstra::dijkstra;
use crate::path::{find_path, saturate_flow};
use num_traits::NumAssign;
use std::ops::Neg;

// successive shortest paths with node potentials
// one Bellman-Ford pass absorbs the negative costs into the prices; from then
// on every residual arc has a non-negative reduced cost and each phase runs
// Dijkstra instead
#[derive(Default)]
pub struct SuccessiveShortestPath<Flow> {
    prices: Vec<Option<Flow>>,
}

impl<Flow> SuccessiveShortestPath<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    pub fn new() -> Self {
        SuccessiveShortestPath { prices: Vec::new() }
    }

    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<(Flow, Flow), Error> {
        graph.check_node(source)?;
        graph.check_node(sink)?;
        graph.reset_flow();

        // a path from the source to itself carries no flow
        if source == sink {
            return Ok((Flow::zero(), Flow::zero()));
        }

        let num_nodes = graph.num_nodes();
        self.prices.clear();
        self.prices.resize(num_nodes, Some(Flow::zero()));

        let (mut min_cost, mut previous_edge) = bellman_ford(graph, source)?;

        let mut total_cost = Flow::zero();
        let mut total_flow = Flow::zero();
        while min_cost[sink].is_some() {
            let path = find_path(graph, &previous_edge, source, sink);
            let (cost, flow) = saturate_flow(graph, &path);
            total_cost += cost;
            total_flow += flow;

            // fold the latest distances into the prices; nodes the search did
            // not reach stay unpriced
            for u in 0..num_nodes {
                self.prices[u] = match (self.prices[u], min_cost[u]) {
                    (Some(price), Some(cost)) => Some(price + cost),
                    _ => None,
                };
            }

            // run to completion: every settled label feeds the next prices
            (min_cost, previous_edge) = dijkstra(graph, source, None, &self.prices)?;
        }

        Ok((total_cost, total_flow))
    }
}
