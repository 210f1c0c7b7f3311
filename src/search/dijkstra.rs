use std::time::Duration;

use crate::{
    graphs::{Graph, NodeId, Weight, INFINITY},
    utility::measure,
};

#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Shortest distance from the source per node, INFINITY where the source
    /// cannot reach the node.
    pub min_distance: Vec<Weight>,
    /// Whether the search stopped before visiting every node.
    pub ended_early: bool,
    /// Wall-clock time of the computation, from initialization to the last
    /// relaxation. Reading the graph is not included.
    pub duration: Duration,
}

/// Classical array-scan Dijkstra from one source node. Each step picks the
/// nearest unvisited node with a linear scan over all nodes (ties go to the
/// lowest index) and relaxes every remaining node through a per-pair edge
/// lookup, so there is no priority queue anywhere.
///
/// If at some step no unvisited node is reachable, a warning is printed to
/// stderr and the remaining nodes keep their INFINITY distance.
pub fn single_source(graph: &Graph, source: NodeId) -> SearchResult {
    let num_nodes = graph.number_of_nodes() as usize;

    let ((min_distance, ended_early), duration) = measure(|| {
        let mut min_distance = vec![INFINITY; num_nodes];
        let mut tree = vec![false; num_nodes];
        let mut ended_early = false;

        if num_nodes == 0 {
            return (min_distance, ended_early);
        }

        tree[source as usize] = true;
        for node in 0..num_nodes {
            min_distance[node] = graph.direct_distance(source, node as NodeId);
        }

        for _step in 1..num_nodes {
            let mut nearest = None;
            let mut shortest_distance = INFINITY;
            for node in 0..num_nodes {
                if !tree[node] && min_distance[node] < shortest_distance {
                    nearest = Some(node);
                    shortest_distance = min_distance[node];
                }
            }

            let nearest = match nearest {
                Some(nearest) => nearest,
                None => {
                    eprintln!("Warning: Search ended early, the graph might not be connected.");
                    ended_early = true;
                    break;
                }
            };
            tree[nearest] = true;

            for node in 0..num_nodes {
                if tree[node] {
                    continue;
                }
                let direct = graph.direct_distance(nearest as NodeId, node as NodeId);
                if direct < INFINITY && min_distance[nearest] + direct < min_distance[node] {
                    min_distance[node] = min_distance[nearest] + direct;
                }
            }
        }

        (min_distance, ended_early)
    });

    SearchResult {
        min_distance,
        ended_early,
        duration,
    }
}
