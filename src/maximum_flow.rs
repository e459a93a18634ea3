pub mod dinic;
pub mod edmonds_karp;
