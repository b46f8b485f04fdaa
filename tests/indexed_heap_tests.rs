use graph_efficiency::{Error, IndexedMinHeap};
use rand::prelude::*;

#[test]
fn test_extract_follows_decrease_key() {
    let mut heap: IndexedMinHeap<f64> = IndexedMinHeap::new();
    heap.insert(0, 5.0).unwrap();
    heap.insert(1, 3.0).unwrap();
    heap.insert(2, 8.0).unwrap();

    heap.decrease_key(2, 1.0).unwrap();

    assert_eq!(heap.extract_min(), Some((2, 1.0)));
    assert_eq!(heap.extract_min(), Some((1, 3.0)));
    assert_eq!(heap.extract_min(), Some((0, 5.0)));
    assert_eq!(heap.extract_min(), None);
    assert!(heap.is_empty());
}

#[test]
fn test_decrease_key_tracks_moved_slots() {
    // Regression for the position-map-on-swap invariant: force vertices to
    // move slots through extractions, then decrease a moved vertex. A heap
    // that updates entries without the reverse index re-keys whatever sits
    // in the vertex's original slot instead.
    let mut heap: IndexedMinHeap<f64> = IndexedMinHeap::new();
    for (vertex, priority) in [(0, 10.0), (1, 20.0), (2, 30.0), (3, 40.0), (4, 5.0)] {
        heap.insert(vertex, priority).unwrap();
    }

    // Extracting vertex 4 moves the last entry to the root and sifts.
    assert_eq!(heap.extract_min(), Some((4, 5.0)));

    heap.decrease_key(3, 1.0).unwrap();
    assert_eq!(heap.priority(3), Some(1.0));
    assert_eq!(heap.extract_min(), Some((3, 1.0)));
    assert_eq!(heap.extract_min(), Some((0, 10.0)));
    assert_eq!(heap.extract_min(), Some((1, 20.0)));
    assert_eq!(heap.extract_min(), Some((2, 30.0)));
}

#[test]
fn test_extract_min_is_global_minimum_under_random_ops() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut heap: IndexedMinHeap<f64> = IndexedMinHeap::new();
    let mut expected: Vec<f64> = Vec::new();

    for vertex in 0..200 {
        let priority = rng.gen_range(0.0..1000.0);
        heap.insert(vertex, priority).unwrap();
        expected.push(priority);
    }
    for _ in 0..100 {
        let vertex = rng.gen_range(0..200);
        let lower = expected[vertex] * rng.gen_range(0.0..1.0);
        heap.decrease_key(vertex, lower).unwrap();
        expected[vertex] = expected[vertex].min(lower);
    }

    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    for want in expected {
        let (_, got) = heap.extract_min().expect("heap drained too early");
        assert_eq!(got, want);
    }
    assert!(heap.is_empty());
}

#[test]
fn test_decrease_key_on_absent_vertex_errors() {
    let mut heap: IndexedMinHeap<f64> = IndexedMinHeap::new();
    heap.insert(0, 1.0).unwrap();

    assert!(matches!(
        heap.decrease_key(7, 0.5),
        Err(Error::InvalidVertex(7))
    ));

    heap.extract_min();
    assert!(matches!(
        heap.decrease_key(0, 0.5),
        Err(Error::InvalidVertex(0))
    ));
}

#[test]
fn test_decrease_key_ignores_increases() {
    let mut heap: IndexedMinHeap<f64> = IndexedMinHeap::new();
    heap.insert(0, 2.0).unwrap();
    heap.insert(1, 3.0).unwrap();

    // Only decreases are supported; an increase leaves the heap untouched.
    heap.decrease_key(0, 9.0).unwrap();
    assert_eq!(heap.priority(0), Some(2.0));
    assert_eq!(heap.extract_min(), Some((0, 2.0)));
}

#[test]
fn test_insert_extends_vertex_domain() {
    let mut heap = IndexedMinHeap::with_capacity(2).unwrap();
    heap.insert(0, 4.0).unwrap();
    heap.insert(100, 2.0).unwrap();

    assert!(heap.contains(100));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.extract_min(), Some((100, 2.0)));
}

#[test]
fn test_duplicate_insert_errors() {
    let mut heap: IndexedMinHeap<f64> = IndexedMinHeap::new();
    heap.insert(3, 1.0).unwrap();
    assert!(matches!(heap.insert(3, 2.0), Err(Error::InvalidVertex(3))));
}
