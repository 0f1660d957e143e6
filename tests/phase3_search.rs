//! Phase 3 tests: BFS shortest path and DFS path search.

use digraph::graph::{DirectedGraph, GraphBuilder};
use digraph::types::GraphError;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, VecDeque};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_graph() -> DirectedGraph<u32> {
    let mut builder = GraphBuilder::new();
    builder.vertices(1..=7).edges([
        (5, 3),
        (6, 3),
        (7, 1),
        (4, 7),
        (1, 2),
        (7, 6),
        (2, 4),
        (3, 5),
        (2, 3),
        (4, 6),
    ]);
    builder.build().unwrap()
}

/// Shortest edge distance from `start` to each reachable vertex.
fn distances(graph: &DirectedGraph<u32>, start: u32) -> HashMap<u32, usize> {
    let mut dist = HashMap::from([(start, 0)]);
    let mut frontier = VecDeque::from([start]);
    while let Some(v) = frontier.pop_front() {
        let d = dist[&v];
        for &n in graph.get_neighbors(&v).unwrap() {
            dist.entry(n).or_insert_with(|| {
                frontier.push_back(n);
                d + 1
            });
        }
    }
    dist
}

fn assert_valid_path(graph: &DirectedGraph<u32>, path: &[u32], start: u32, dest: u32) {
    assert!(graph.is_path(path), "not a path: {:?}", path);
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&dest));
}

// ==================== Breadth-First Search ====================

#[test]
fn test_bfs_sample_shortest_path() {
    init_logger();
    let graph = sample_graph();
    assert_eq!(graph.bfs(&1, &6).unwrap(), Some(vec![1, 2, 4, 6]));
}

#[test]
fn test_bfs_prefers_fewer_edges() {
    // Long way: a -> b -> c -> d; short way: a -> d.
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["a", "b", "c", "d"])
        .edges([("a", "b"), ("b", "c"), ("c", "d"), ("a", "d")]);
    let graph = builder.build().unwrap();
    assert_eq!(graph.bfs(&"a", &"d").unwrap(), Some(vec!["a", "d"]));
}

#[test]
fn test_bfs_unreachable() {
    let graph = sample_graph();
    // 3 and 5 only reach each other.
    assert_eq!(graph.bfs(&3, &1).unwrap(), None);
}

// ==================== Depth-First Search ====================

#[test]
fn test_dfs_sample_path() {
    let graph = sample_graph();
    let path = graph.dfs(&1, &6).unwrap().unwrap();
    assert_valid_path(&graph, &path, 1, 6);
    assert!(
        path == vec![1, 2, 4, 6] || path == vec![1, 2, 4, 7, 6],
        "unexpected dfs path {:?}",
        path
    );
}

#[test]
fn test_dfs_recursive_sample_path() {
    let graph = sample_graph();
    let path = graph.dfs_recursive(&1, &6).unwrap().unwrap();
    assert_valid_path(&graph, &path, 1, 6);
    assert!(
        path == vec![1, 2, 4, 6] || path == vec![1, 2, 4, 7, 6],
        "unexpected dfs_recursive path {:?}",
        path
    );
}

#[test]
fn test_dfs_unreachable() {
    let graph = sample_graph();
    assert_eq!(graph.dfs(&5, &2).unwrap(), None);
    assert_eq!(graph.dfs_recursive(&5, &2).unwrap(), None);
}

#[test]
fn test_dfs_recursive_backtracks_out_of_dead_ends() {
    // 0 -> 1 (dead end), 0 -> 2 -> 3: the returned path never contains 1.
    let mut builder = GraphBuilder::new();
    builder.vertices(0..4).edges([(0, 1), (0, 2), (2, 3)]);
    let graph = builder.build().unwrap();

    assert_eq!(graph.dfs_recursive(&0, &3).unwrap(), Some(vec![0, 2, 3]));
    assert_eq!(graph.dfs(&0, &3).unwrap(), Some(vec![0, 2, 3]));
}

// ==================== Shared Edge Cases ====================

#[test]
fn test_search_start_equals_destination() {
    let graph = sample_graph();
    assert_eq!(graph.bfs(&4, &4).unwrap(), Some(vec![4]));
    assert_eq!(graph.dfs(&4, &4).unwrap(), Some(vec![4]));
    assert_eq!(graph.dfs_recursive(&4, &4).unwrap(), Some(vec![4]));
}

#[test]
fn test_search_missing_start() {
    let graph = sample_graph();
    let expected = Err(GraphError::VertexNotFound("0".to_string()));
    assert_eq!(graph.bfs(&0, &1), expected);
    assert_eq!(graph.dfs(&0, &1), expected);
    assert_eq!(graph.dfs_recursive(&0, &1), expected);
}

#[test]
fn test_search_missing_destination_is_not_unreachable() {
    let graph = sample_graph();
    for result in [
        graph.bfs(&1, &8),
        graph.dfs(&1, &8),
        graph.dfs_recursive(&1, &8),
    ] {
        match result {
            Err(GraphError::VertexNotFound(id)) => assert_eq!(id, "8"),
            other => panic!("Expected VertexNotFound error, got {:?}", other),
        }
    }
}

#[test]
fn test_is_path() {
    let graph = sample_graph();
    assert!(graph.is_path(&[1]));
    assert!(graph.is_path(&[1, 2, 4, 7, 1]));
    assert!(!graph.is_path(&[]));
    assert!(!graph.is_path(&[9]));
    assert!(!graph.is_path(&[1, 3]));
}

// ==================== Randomized ====================

#[test]
fn test_searches_on_random_graphs() {
    init_logger();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let n: u32 = rng.gen_range(1..30);
        let mut graph = DirectedGraph::new();
        for id in 0..n {
            graph.add_vertex(id).unwrap();
        }
        for _ in 0..rng.gen_range(0..(n as usize * 2)) {
            let src = rng.gen_range(0..n);
            let dst = rng.gen_range(0..n);
            graph.add_edge(src, dst).unwrap();
        }

        let start = rng.gen_range(0..n);
        let dist = distances(&graph, start);

        for dest in 0..n {
            let bfs = graph.bfs(&start, &dest).unwrap();
            let dfs = graph.dfs(&start, &dest).unwrap();
            let dfs_rec = graph.dfs_recursive(&start, &dest).unwrap();

            match dist.get(&dest) {
                Some(&d) => {
                    let bfs = bfs.expect("reachable destination");
                    assert_valid_path(&graph, &bfs, start, dest);
                    assert_eq!(bfs.len() - 1, d);

                    assert_valid_path(&graph, &dfs.expect("reachable"), start, dest);
                    assert_valid_path(&graph, &dfs_rec.expect("reachable"), start, dest);
                }
                None => {
                    assert!(bfs.is_none());
                    assert!(dfs.is_none());
                    assert!(dfs_rec.is_none());
                }
            }
        }
    }
}
