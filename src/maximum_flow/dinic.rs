use crate::error::Error;
use crate::graph::Graph;
use crate::path::{find_path, saturate_flow};
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::ops::Neg;

#[derive(Default)]
pub struct Dinic {
    level: Vec<usize>,
    previous_edge: Vec<Option<usize>>,
    que: VecDeque<usize>,
    stack: Vec<usize>,
}

impl Dinic {
    pub fn new() -> Self {
        Dinic::default()
    }

    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Result<Flow, Error>
    where
        Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
    {
        graph.check_node(source)?;
        graph.check_node(sink)?;
        graph.reset_flow();

        self.level.resize(graph.num_nodes(), 0);
        self.previous_edge.resize(graph.num_nodes(), None);

        let mut total_flow = Flow::zero();
        loop {
            if !self.update_levels(source, sink, graph) {
                return Ok(total_flow);
            }

            // blocking flow: saturate level-respecting paths until none is left
            while let Some(path) = self.level_path(source, sink, graph) {
                let (_, flow) = saturate_flow(graph, &path);
                total_flow += flow;
            }
        }
    }

    // bfs from the sink; level[v] is the hop distance from v to the sink in
    // the residual network, num_nodes when no residual path exists
    // an arc of the bfs is usable when its twin still has residual capacity
    fn update_levels<Flow>(&mut self, source: usize, sink: usize, graph: &Graph<Flow>) -> bool
    where
        Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
    {
        let unleveled = graph.num_nodes();
        self.level.fill(unleveled);
        self.que.clear();

        self.level[sink] = 0;
        self.que.push_back(sink);
        while let Some(v) = self.que.pop_front() {
            for arc_id in graph.neighbors(v) {
                let to = graph.edges[arc_id].to;
                if self.level[to] != unleveled || graph.edges[arc_id ^ 1].residual_capacity() == Flow::zero() {
                    continue;
                }

                self.level[to] = self.level[v] + 1;
                if to == source {
                    return true;
                }
                self.que.push_back(to);
            }
        }

        false
    }

    // dfs with an explicit stack; admissible arcs step one level closer to
    // the sink
    fn level_path<Flow>(&mut self, source: usize, sink: usize, graph: &Graph<Flow>) -> Option<Vec<usize>>
    where
        Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
    {
        self.previous_edge.fill(None);
        self.stack.clear();

        self.stack.push(source);
        while let Some(u) = self.stack.pop() {
            for arc_id in graph.neighbors(u) {
                let edge = &graph.edges[arc_id];
                if self.level[u] != self.level[edge.to] + 1 || edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.previous_edge[edge.to] = Some(arc_id);
                if edge.to == sink {
                    return Some(find_path(graph, &self.previous_edge, source, sink));
                }
                self.stack.push(edge.to);
            }
        }

        None
    }
}
