use crate::graph::Graph;
use num_traits::NumAssign;
use std::ops::Neg;

// walk back from sink along the parent arcs and return the path in
// source-to-sink order
// previous_edge must encode an acyclic chain from sink back to source
pub(crate) fn find_path<Flow>(graph: &Graph<Flow>, previous_edge: &[Option<usize>], source: usize, sink: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut v = sink;
    while v != source {
        let arc_id = previous_edge[v].unwrap();
        path.push(arc_id);
        v = graph.edges[arc_id].from;
    }
    path.reverse();
    path
}

// saturate the path with its bottleneck residual capacity and return
// (cost, flow); a zero bottleneck mutates nothing
pub(crate) fn saturate_flow<Flow>(graph: &mut Graph<Flow>, path: &[usize]) -> (Flow, Flow)
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    let mut flow = match path.first() {
        Some(&arc_id) => graph.edges[arc_id].residual_capacity(),
        None => return (Flow::zero(), Flow::zero()),
    };
    for &arc_id in path {
        flow = flow.min(graph.edges[arc_id].residual_capacity());
    }
    if flow == Flow::zero() {
        return (Flow::zero(), Flow::zero());
    }

    let mut cost = Flow::zero();
    for &arc_id in path {
        graph.push_flow(arc_id, flow);
        cost += graph.edges[arc_id].cost * flow;
    }
    (cost, flow)
}
