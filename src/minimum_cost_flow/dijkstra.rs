use crate::error::Error;
use crate::graph::Graph;
use num_traits::NumAssign;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::ops::Neg;

// minimum-cost paths from the source over arcs with residual capacity, using
// arc costs reduced by the node prices: cost + price[from] - price[to]
// every reduced cost must be non-negative; the returned costs are relative to
// the prices, so with all-zero prices they are plain path costs
// with sink = Some(t), stops as soon as t is settled
pub fn dijkstra<Flow>(
    graph: &Graph<Flow>,
    source: usize,
    sink: Option<usize>,
    prices: &[Option<Flow>],
) -> Result<(Vec<Option<Flow>>, Vec<Option<usize>>), Error>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    graph.check_node(source)?;
    if let Some(t) = sink {
        graph.check_node(t)?;
    }

    let num_nodes = graph.num_nodes();
    let mut min_cost: Vec<Option<Flow>> = vec![None; num_nodes];
    let mut previous_edge: Vec<Option<usize>> = vec![None; num_nodes];
    let mut visited = vec![false; num_nodes];
    let mut todo = BinaryHeap::new();

    min_cost[source] = Some(Flow::zero());
    todo.push((Reverse(Flow::zero()), source));

    while let Some((Reverse(cost), u)) = todo.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;

        if Some(u) == sink {
            break;
        }

        let price = prices[u].unwrap();
        for arc_id in graph.neighbors(u) {
            let edge = &graph.edges[arc_id];
            if edge.residual_capacity() == Flow::zero() {
                continue;
            }
            // a residual arc never leads out of the priced region
            let next_price = match prices[edge.to] {
                Some(p) => p,
                None => continue,
            };

            let reduced_cost = edge.cost + price - next_price;
            debug_assert!(reduced_cost >= Flow::zero());

            let next_cost = cost + reduced_cost;
            if min_cost[edge.to].map_or(true, |c| next_cost < c) {
                min_cost[edge.to] = Some(next_cost);
                previous_edge[edge.to] = Some(arc_id);
                todo.push((Reverse(next_cost), edge.to));
            }
        }
    }

    Ok((min_cost, previous_edge))
}
