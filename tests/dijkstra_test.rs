use ahash::{HashSet, HashSetExt};
use plain_dijkstra::{
    graphs::{Graph, NodeId, Weight, INFINITY},
    search::dijkstra::single_source,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn build_graph(num_nodes: u32, edges: &[(NodeId, NodeId, Weight)]) -> Graph {
    let mut graph = Graph::new(num_nodes, edges.len() as u32).unwrap();
    for &(node1, node2, weight) in edges {
        graph.add_undirected_edge(node1, node2, weight);
    }
    graph
}

fn random_simple_graph(rng: &mut StdRng) -> Graph {
    let num_nodes: u32 = rng.gen_range(2..=50);
    let max_edges = num_nodes as u64 * (num_nodes - 1) as u64 / 2;
    let num_edges = rng.gen_range(0..=max_edges.min(3 * num_nodes as u64)) as u32;

    let mut graph = Graph::new(num_nodes, num_edges).unwrap();
    let mut seen = HashSet::new();
    let mut added = 0;
    while added < num_edges {
        let node1 = rng.gen_range(0..num_nodes);
        let node2 = rng.gen_range(0..num_nodes);
        if node1 == node2 || !seen.insert((node1.min(node2), node1.max(node2))) {
            continue;
        }
        graph.add_undirected_edge(node1, node2, rng.gen_range(0..=30));
        added += 1;
    }
    graph
}

/// Floyd-Warshall, as an oracle that shares no code with the search.
fn brute_force_distances(graph: &Graph, source: NodeId) -> Vec<Weight> {
    let num_nodes = graph.number_of_nodes() as usize;
    let mut distance = vec![vec![INFINITY; num_nodes]; num_nodes];
    for node in 0..num_nodes {
        distance[node][node] = 0;
        for link in graph.links(node as NodeId) {
            distance[node][link.head as usize] = link.weight;
        }
    }
    for k in 0..num_nodes {
        for i in 0..num_nodes {
            for j in 0..num_nodes {
                let through = distance[i][k] + distance[k][j];
                if through < distance[i][j] {
                    distance[i][j] = through;
                }
            }
        }
    }
    distance[source as usize].clone()
}

#[test]
fn line_graph_distances() {
    let graph = build_graph(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1)]);

    let result = single_source(&graph, 0);

    assert_eq!(result.min_distance, [0, 1, 3, 4]);
    assert!(!result.ended_early);
}

#[test]
fn takes_the_shorter_detour() {
    // direct 0-3 edge costs 10, the path through 1 and 2 costs 6
    let graph = build_graph(4, &[(0, 3, 10), (0, 1, 2), (1, 2, 2), (2, 3, 2)]);

    let result = single_source(&graph, 0);

    assert_eq!(result.min_distance, [0, 2, 4, 6]);
}

#[test]
fn unreachable_nodes_stay_at_infinity() {
    let graph = build_graph(3, &[(0, 1, 5)]);

    let result = single_source(&graph, 0);

    assert_eq!(result.min_distance, [0, 5, INFINITY]);
    assert!(result.ended_early);
}

#[test]
fn single_node_graph() {
    let graph = build_graph(1, &[]);

    let result = single_source(&graph, 0);

    assert_eq!(result.min_distance, [0]);
    assert!(!result.ended_early);
}

#[test]
fn empty_graph() {
    let graph = build_graph(0, &[]);

    let result = single_source(&graph, 0);

    assert!(result.min_distance.is_empty());
    assert!(!result.ended_early);
}

#[test]
fn zero_weight_edges_propagate() {
    let graph = build_graph(3, &[(0, 1, 0), (1, 2, 0)]);

    let result = single_source(&graph, 0);

    assert_eq!(result.min_distance, [0, 0, 0]);
}

#[test]
fn first_parallel_edge_decides_the_distance() {
    let graph = build_graph(2, &[(0, 1, 7), (0, 1, 3)]);

    let result = single_source(&graph, 0);

    assert_eq!(result.min_distance, [0, 7]);
}

#[test]
fn source_can_be_any_node() {
    let graph = build_graph(4, &[(0, 1, 1), (1, 2, 2), (2, 3, 1)]);

    let result = single_source(&graph, 3);

    assert_eq!(result.min_distance, [4, 3, 1, 0]);
}

#[test]
fn deterministic_across_runs() {
    let mut rng = StdRng::seed_from_u64(117);
    let graph = random_simple_graph(&mut rng);

    let first = single_source(&graph, 0);
    let second = single_source(&graph, 0);

    assert_eq!(first.min_distance, second.min_distance);
    assert_eq!(first.ended_early, second.ended_early);
}

#[test]
fn matches_brute_force_on_random_graphs() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_simple_graph(&mut rng);

        let result = single_source(&graph, 0);

        assert_eq!(
            result.min_distance,
            brute_force_distances(&graph, 0),
            "seed {}",
            seed
        );
    }
}
