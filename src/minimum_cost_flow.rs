pub mod bellman_ford;
pub mod dijkstra;
pub mod naive_successive_shortest_path;
pub mod successive_shortest_path;
