pub mod compact;
pub mod generators;
pub mod traits;

pub use compact::{CompactGraph, Edge};
pub use traits::Graph;
