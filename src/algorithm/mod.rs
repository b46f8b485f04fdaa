pub mod dijkstra;
pub mod floyd_warshall;

pub use dijkstra::Dijkstra;
pub use floyd_warshall::FloydWarshall;
