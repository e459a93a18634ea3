use crate::graph::Graph;

pub fn build_graph(num_nodes: usize, edges: &[(usize, usize, i64, i64)]) -> Graph<i64> {
    let mut graph = Graph::new(num_nodes);
    for &(from, to, upper, cost) in edges {
        graph.add_directed_edge(from, to, upper, cost).unwrap();
    }
    graph
}

// 6 nodes, source 0, sink 5, maximum flow 19
pub fn max_flow_instance() -> Graph<i64> {
    build_graph(
        6,
        &[
            (0, 1, 10, 0),
            (0, 2, 10, 0),
            (1, 2, 2, 0),
            (1, 3, 4, 0),
            (1, 4, 8, 0),
            (2, 4, 9, 0),
            (3, 5, 10, 0),
            (4, 3, 6, 0),
            (4, 5, 10, 0),
        ],
    )
}

// 7 nodes, source 0, sink 6, minimum cost 12, maximum flow 5
pub fn min_cost_flow_instance() -> Graph<i64> {
    build_graph(
        7,
        &[
            (0, 1, 5, 0),
            (1, 2, 7, 1),
            (1, 3, 7, 5),
            (2, 3, 2, -2),
            (2, 4, 3, 8),
            (3, 4, 3, -3),
            (3, 5, 2, 4),
            (4, 6, 3, 0),
            (5, 6, 2, 0),
        ],
    )
}

// capacity bounds, twin antisymmetry and conservation at non-terminals
pub fn assert_feasible_flow(graph: &Graph<i64>, source: usize, sink: usize) {
    for edge_id in 0..graph.num_edges() {
        let edge = graph.get_edge(edge_id).unwrap();
        assert!(edge.flow >= 0 && edge.flow <= edge.upper);
    }
    for arc_id in (0..2 * graph.num_edges()).step_by(2) {
        assert_eq!(graph.edges[arc_id].flow, -graph.edges[arc_id ^ 1].flow);
    }
    for u in 0..graph.num_nodes() {
        if u != source && u != sink {
            assert_eq!(graph.maximum_flow(u), 0);
        }
    }
}

// xorshift64
pub struct Random(u64);

impl Random {
    pub fn new(seed: u64) -> Self {
        Random(seed.max(1))
    }

    pub fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

pub fn random_flow_network(seed: u64, num_nodes: usize, num_edges: usize, max_capacity: i64) -> Graph<i64> {
    let mut random = Random::new(seed);
    let mut graph = Graph::new(num_nodes);
    for _ in 0..num_edges {
        let from = random.below(num_nodes as u64) as usize;
        let to = random.below(num_nodes as u64) as usize;
        let upper = 1 + random.below(max_capacity as u64) as i64;
        graph.add_directed_edge(from, to, upper, 0).unwrap();
    }
    graph
}

// edges only go from lower to higher indices, so the graph is acyclic and
// negative costs cannot form a negative-cost cycle
pub fn random_cost_network(seed: u64, num_nodes: usize, num_edges: usize, max_capacity: i64, max_cost: i64) -> Graph<i64> {
    let mut random = Random::new(seed);
    let mut graph = Graph::new(num_nodes);
    for _ in 0..num_edges {
        let from = random.below(num_nodes as u64 - 1) as usize;
        let to = from + 1 + random.below((num_nodes - 1 - from) as u64) as usize;
        let upper = 1 + random.below(max_capacity as u64) as i64;
        let cost = random.below(2 * max_cost as u64 + 1) as i64 - max_cost;
        graph.add_directed_edge(from, to, upper, cost).unwrap();
    }
    graph
}
