pub mod indexed_heap;
pub mod square_matrix;

pub use indexed_heap::IndexedMinHeap;
pub use square_matrix::SquareMatrix;
