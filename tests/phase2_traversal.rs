//! Phase 2 tests: breadth-first and depth-first traversal.

use std::collections::{HashMap, HashSet, VecDeque};

use adjacency_graph::graph::{bfs, dfs, AdjacencyGraph, GraphBuilder, TraversalOrder};
use rand::Rng;

// ==================== Helpers ====================

/// Undirected path a-b-c-d.
fn path_graph() -> AdjacencyGraph<&'static str> {
    let mut builder = GraphBuilder::new();
    builder.path(["a", "b", "c", "d"]);
    builder.build()
}

/// Random graph over vertices 0..n with mixed directed/undirected edges.
fn random_graph(n: u32, edges: usize) -> AdjacencyGraph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = AdjacencyGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for _ in 0..edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        graph.add_edge(a, b, rng.gen_bool(0.5));
    }
    graph
}

/// Recursive reference DFS.
fn recursive_dfs(graph: &AdjacencyGraph<u32>, v: u32, seen: &mut HashSet<u32>, out: &mut Vec<u32>) {
    seen.insert(v);
    out.push(v);
    for &n in graph.neighbors(&v) {
        if !seen.contains(&n) {
            recursive_dfs(graph, n, seen, out);
        }
    }
}

/// Hop distance from start for every reachable vertex.
fn distances(graph: &AdjacencyGraph<u32>, start: u32) -> HashMap<u32, usize> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(v) = queue.pop_front() {
        let d = dist[&v];
        for &n in graph.neighbors(&v) {
            if !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                queue.push_back(n);
            }
        }
    }
    dist
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_path_graph() {
    let graph = path_graph();
    assert_eq!(graph.bfs(&"a"), vec!["a", "b", "c", "d"]);
    assert_eq!(graph.bfs(&"c"), vec!["c", "b", "d", "a"]);
}

#[test]
fn test_bfs_layers_before_depth() {
    // a -> b, a -> c, b -> d, c -> e
    let mut graph = AdjacencyGraph::new();
    graph.add_arc("a", "b");
    graph.add_arc("a", "c");
    graph.add_arc("b", "d");
    graph.add_arc("c", "e");
    assert_eq!(graph.bfs(&"a"), vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_bfs_unknown_start_is_singleton() {
    let graph = path_graph();
    assert_eq!(graph.bfs(&"zzz"), vec!["zzz"]);
}

#[test]
fn test_bfs_disconnected_vertex() {
    let mut graph = path_graph();
    graph.add_vertex("e");
    assert_eq!(graph.bfs(&"e"), vec!["e"]);
    assert!(!graph.bfs(&"a").contains(&"e"));
}

#[test]
fn test_bfs_respects_direction() {
    let mut graph = AdjacencyGraph::new();
    graph.add_arc(1, 2);
    graph.add_arc(2, 3);
    assert_eq!(graph.bfs(&1), vec![1, 2, 3]);
    assert_eq!(graph.bfs(&3), vec![3]);
}

#[test]
fn test_bfs_tolerates_duplicate_edges_and_cycles() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", false);
    graph.add_edge("a", "b", false);
    graph.add_edge("b", "c", false);
    graph.add_edge("c", "a", false);
    assert_eq!(graph.bfs(&"a"), vec!["a", "b", "c"]);
}

#[test]
fn test_bfs_diamond_visits_once() {
    // a-b, a-c, b-d, c-d: d is reached through b and c but listed once
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", false);
    graph.add_edge("a", "c", false);
    graph.add_edge("b", "d", false);
    graph.add_edge("c", "d", false);
    assert_eq!(bfs(&graph, &"a"), vec!["a", "b", "c", "d"]);
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_path_graph() {
    let graph = path_graph();
    assert_eq!(graph.dfs(&"a"), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_dfs_pre_order_branches() {
    // a-b, a-c, b-d, c-e
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", false);
    graph.add_edge("a", "c", false);
    graph.add_edge("b", "d", false);
    graph.add_edge("c", "e", false);
    assert_eq!(graph.dfs(&"a"), vec!["a", "b", "d", "c", "e"]);
}

#[test]
fn test_dfs_revisit_through_later_branch() {
    // a -> [b, c], b -> [c]: c is reached through b before a's second neighbor
    let mut graph = AdjacencyGraph::new();
    graph.add_arc("a", "b");
    graph.add_arc("a", "c");
    graph.add_arc("b", "c");
    assert_eq!(dfs(&graph, &"a"), vec!["a", "b", "c"]);
}

#[test]
fn test_dfs_unknown_start_is_singleton() {
    let graph: AdjacencyGraph<u64> = AdjacencyGraph::new();
    assert_eq!(graph.dfs(&42), vec![42]);
}

#[test]
fn test_dfs_deep_path_does_not_overflow() {
    let mut graph = AdjacencyGraph::new();
    let n = 200_000u32;
    for i in 0..n - 1 {
        graph.add_arc(i, i + 1);
    }
    let order = graph.dfs(&0);
    assert_eq!(order.len(), n as usize);
    assert_eq!(order.first(), Some(&0));
    assert_eq!(order.last(), Some(&(n - 1)));
}

// ==================== TraversalOrder Tests ====================

#[test]
fn test_traversal_order_names() {
    assert_eq!(TraversalOrder::from_name("bfs"), Some(TraversalOrder::BreadthFirst));
    assert_eq!(TraversalOrder::from_name("DFS"), Some(TraversalOrder::DepthFirst));
    assert_eq!(
        TraversalOrder::from_name("depth-first"),
        Some(TraversalOrder::DepthFirst)
    );
    assert_eq!(TraversalOrder::from_name("dijkstra"), None);
    assert_eq!(TraversalOrder::DepthFirst.to_string(), "dfs");
    assert_eq!(TraversalOrder::default(), TraversalOrder::BreadthFirst);
}

#[test]
fn test_traverse_dispatch() {
    let mut graph = AdjacencyGraph::new();
    graph.add_edge("a", "b", false);
    graph.add_edge("a", "c", false);
    graph.add_edge("b", "d", false);
    assert_eq!(
        graph.traverse(&"a", TraversalOrder::BreadthFirst),
        vec!["a", "b", "c", "d"]
    );
    assert_eq!(
        graph.traverse(&"a", TraversalOrder::DepthFirst),
        vec!["a", "b", "d", "c"]
    );
}

// ==================== Randomized Properties ====================

#[test]
fn test_random_graphs_visit_each_reachable_vertex_once() {
    for _ in 0..50 {
        let graph = random_graph(30, 45);
        for start in 0..30 {
            let reachable: HashSet<u32> = distances(&graph, start).keys().copied().collect();
            for order in [graph.bfs(&start), graph.dfs(&start)] {
                assert_eq!(order[0], start);
                let unique: HashSet<u32> = order.iter().copied().collect();
                assert_eq!(unique.len(), order.len(), "duplicate in {:?}", order);
                assert_eq!(unique, reachable);
            }
        }
    }
}

#[test]
fn test_random_graphs_bfs_non_decreasing_distance() {
    for _ in 0..50 {
        let graph = random_graph(25, 40);
        let dist = distances(&graph, 0);
        let order = graph.bfs(&0);
        for pair in order.windows(2) {
            assert!(dist[&pair[0]] <= dist[&pair[1]], "order {:?}", order);
        }
    }
}

#[test]
fn test_random_graphs_dfs_matches_recursive() {
    for _ in 0..50 {
        let graph = random_graph(25, 40);
        for start in 0..25 {
            let mut seen = HashSet::new();
            let mut expected = Vec::new();
            recursive_dfs(&graph, start, &mut seen, &mut expected);
            assert_eq!(graph.dfs(&start), expected);
        }
    }
}
