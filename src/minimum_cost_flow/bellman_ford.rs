use crate::error::Error;
use crate::graph::Graph;
use num_traits::NumAssign;
use std::ops::Neg;

// minimum-cost paths from the source over arcs with residual capacity,
// relaxing only from nodes improved in the previous round
// after round k, min_cost[v] is the minimum cost over paths of at most k arcs,
// so an improvement in round num_nodes proves a reachable negative-cost cycle
pub fn bellman_ford<Flow>(graph: &Graph<Flow>, source: usize) -> Result<(Vec<Option<Flow>>, Vec<Option<usize>>), Error>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    graph.check_node(source)?;

    let num_nodes = graph.num_nodes();
    let mut min_cost: Vec<Option<Flow>> = vec![None; num_nodes];
    let mut previous_edge: Vec<Option<usize>> = vec![None; num_nodes];
    min_cost[source] = Some(Flow::zero());

    let mut todo = vec![source];
    for _ in 0..num_nodes {
        let mut new_min_cost = min_cost.clone();
        let mut new_todo = Vec::new();
        let mut improved = vec![false; num_nodes];

        for &u in &todo {
            let cost = min_cost[u].unwrap();
            for arc_id in graph.neighbors(u) {
                let edge = &graph.edges[arc_id];
                if edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                let next_cost = cost + edge.cost;
                if new_min_cost[edge.to].map_or(true, |c| next_cost < c) {
                    new_min_cost[edge.to] = Some(next_cost);
                    previous_edge[edge.to] = Some(arc_id);
                    if !improved[edge.to] {
                        improved[edge.to] = true;
                        new_todo.push(edge.to);
                    }
                }
            }
        }

        min_cost = new_min_cost;
        todo = new_todo;
        if todo.is_empty() {
            return Ok((min_cost, previous_edge));
        }
    }

    Err(Error::NegativeCostCycle)
}
