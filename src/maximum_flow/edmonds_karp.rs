use crate::error::Error;
use crate::graph::Graph;
use crate::path::{find_path, saturate_flow};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::ops::Neg;

#[derive(Default)]
pub struct EdmondsKarp {
    previous_edge: Vec<Option<usize>>,
    visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl EdmondsKarp {
    pub fn new() -> Self {
        EdmondsKarp::default()
    }

    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<Flow, Error>
    where
        Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
    {
        graph.check_node(source)?;
        graph.check_node(sink)?;
        graph.reset_flow();

        self.previous_edge.resize(graph.num_nodes(), None);
        self.visited.resize(graph.num_nodes(), false);

        let mut total_flow = Flow::zero();
        loop {
            match self.shortest_augmenting_path(source, sink, graph) {
                Some(path) => {
                    let (_, flow) = saturate_flow(graph, &path);
                    total_flow += flow;
                }
                None => return Ok(total_flow),
            }
        }
    }

    // bfs over arcs with residual capacity; the first path that reaches the
    // sink is shortest by arc count
    fn shortest_augmenting_path<Flow>(&mut self, source: usize, sink: usize, graph: &Graph<Flow>) -> Option<Vec<usize>>
    where
        Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
    {
        self.previous_edge.fill(None);
        self.visited.fill(false);
        self.que.clear();

        self.visited[source] = true;
        self.que.push_back(source);
        while let Some(u) = self.que.pop_front() {
            for arc_id in graph.neighbors(u) {
                let edge = &graph.edges[arc_id];
                if self.visited[edge.to] || edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.visited[edge.to] = true;
                self.previous_edge[edge.to] = Some(arc_id);
                if edge.to == sink {
                    return Some(find_path(graph, &self.previous_edge, source, sink));
                }
                self.que.push_back(edge.to);
            }
        }

        None
    }
}
