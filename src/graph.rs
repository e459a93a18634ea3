use crate::error::Error;
use num_traits::NumAssign;
use std::ops::Neg;

#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub cost: Flow,
}

impl<Flow> Edge<Flow>
where
    Flow: NumAssign + Ord + Copy,
{
    #[inline]
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

// residual graph
// every client edge is stored as a twin pair of arcs: the forward arc at
// index 2k and the backward arc (zero capacity, negated cost) at 2k + 1,
// so the twin of arc i is always i ^ 1
#[derive(Default)]
pub struct Graph<Flow> {
    num_nodes: usize,
    pub(crate) edges: Vec<Edge<Flow>>,
    pub(crate) adjacency: Vec<Vec<usize>>,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    pub fn new(num_nodes: usize) -> Self {
        Graph { num_nodes, edges: Vec::new(), adjacency: vec![Vec::new(); num_nodes] }
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    pub fn add_node(&mut self) -> usize {
        self.adjacency.push(Vec::new());
        self.num_nodes += 1;
        self.num_nodes - 1
    }

    // return edge index
    pub fn add_directed_edge(&mut self, from: usize, to: usize, upper: Flow, cost: Flow) -> Option<usize> {
        if from >= self.num_nodes || to >= self.num_nodes || upper < Flow::zero() {
            return None;
        }

        let forward = self.edges.len();
        self.edges.push(Edge { from, to, flow: Flow::zero(), upper, cost });
        self.edges.push(Edge { from: to, to: from, flow: Flow::zero(), upper: Flow::zero(), cost: -cost });
        self.adjacency[from].push(forward);
        self.adjacency[to].push(forward + 1);

        Some(self.num_edges() - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        if edge_id >= self.num_edges() {
            return None;
        }
        Some(self.edges[2 * edge_id].clone())
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        self.adjacency[u].iter().copied()
    }

    // net out-flow at u
    pub fn maximum_flow(&self, u: usize) -> Flow {
        (0..self.num_edges()).fold(Flow::zero(), |mut flow, edge_id| {
            let edge = &self.edges[2 * edge_id];
            if edge.from == u {
                flow += edge.flow;
            } else if edge.to == u {
                flow -= edge.flow;
            }
            flow
        })
    }

    // the caller must ensure delta <= residual capacity
    pub(crate) fn push_flow(&mut self, arc_id: usize, delta: Flow) {
        assert!(delta > Flow::zero());
        self.edges[arc_id].flow += delta;
        self.edges[arc_id ^ 1].flow -= delta;
    }

    pub fn reset_flow(&mut self) {
        for edge in self.edges.iter_mut() {
            edge.flow = Flow::zero();
        }
    }

    pub(crate) fn check_node(&self, u: usize) -> Result<(), Error> {
        if u < self.num_nodes {
            Ok(())
        } else {
            Err(Error::InvalidNode(u))
        }
    }
}
