use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};

pub mod loader;

pub type NodeId = u32;
pub type Weight = u32;

/// Stands in for "no path known". Half of the value range so that adding an
/// edge weight on top of it cannot overflow.
pub const INFINITY: Weight = Weight::MAX / 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub head: NodeId,
    pub weight: Weight,
}

/// Undirected graph as one owned link array per node. Every undirected edge
/// is stored as two directed link records, one per endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Graph {
    num_edges: u32,
    links: Vec<Vec<Link>>,
}

impl Graph {
    /// Allocates the per-node arrays for a graph of known size. The only
    /// fallible allocation is the node-count-sized outer array, which is
    /// sized from untrusted input.
    pub fn new(num_nodes: u32, num_edges: u32) -> Result<Graph, TryReserveError> {
        let mut links = Vec::new();
        links.try_reserve_exact(num_nodes as usize)?;
        links.resize_with(num_nodes as usize, Vec::new);
        Ok(Graph { num_edges, links })
    }

    pub fn number_of_nodes(&self) -> u32 {
        self.links.len() as u32
    }

    /// The undirected edge count the input declared, not the number of link
    /// records (which is twice that once all edges are added).
    pub fn number_of_edges(&self) -> u32 {
        self.num_edges
    }

    /// Appends one link record to the tail of each endpoint's array, so
    /// records keep input order within an array.
    pub fn add_undirected_edge(&mut self, node1: NodeId, node2: NodeId, weight: Weight) {
        self.links[node1 as usize].push(Link {
            head: node2,
            weight,
        });
        self.links[node2 as usize].push(Link {
            head: node1,
            weight,
        });
    }

    pub fn links(&self, node: NodeId) -> &[Link] {
        &self.links[node as usize]
    }

    /// Weight of the direct edge between two nodes, 0 for a node and itself,
    /// INFINITY if no direct edge exists. A linear scan of the first node's
    /// link array; with parallel edges the record appended first wins.
    pub fn direct_distance(&self, node1: NodeId, node2: NodeId) -> Weight {
        if node1 == node2 {
            return 0;
        }
        self.links[node1 as usize]
            .iter()
            .find(|link| link.head == node2)
            .map(|link| link.weight)
            .unwrap_or(INFINITY)
    }
}
