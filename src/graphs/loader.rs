use std::{
    collections::TryReserveError,
    ffi::OsStr,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use thiserror::Error;

use super::{Graph, NodeId, Weight};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File {} not found.", .0.display())]
    FileNotFound(PathBuf),
    #[error("Error in file format in line:\n{0}")]
    FileFormat(String),
    #[error("Error in file format: no graph size ('p') line found")]
    MissingSizeLine,
    #[error("Error: cannot allocate memory.")]
    OutOfMemory(#[from] TryReserveError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Cache(#[from] bincode::Error),
}

/// Reads a graph from disk, dispatching on the file extension: `.bincode`
/// files hold a cached serialized graph, everything else is parsed as the
/// DIMACS-style text format.
pub fn read_graph(path: &Path) -> Result<Graph, LoadError> {
    match path.extension().and_then(OsStr::to_str) {
        Some("bincode") => read_bincode_file(path),
        _ => read_gr_file(path),
    }
}

/// Parses the DIMACS-style text format. Lines are dispatched on their first
/// character: `c` lines are comments, the single `p` line declares the node
/// and edge counts, `a` lines add one undirected edge with 1-based node ids,
/// and lines with any other prefix are skipped.
pub fn read_gr_file(path: &Path) -> Result<Graph, LoadError> {
    let file = File::open(path).map_err(|_| LoadError::FileNotFound(path.to_path_buf()))?;
    let reader = BufReader::new(file);

    let mut graph: Option<Graph> = None;
    let mut edges_read = 0;

    for line in reader.lines() {
        let line = line?;
        match line.bytes().next() {
            Some(b'p') => {
                if graph.is_some() {
                    return Err(LoadError::FileFormat(line));
                }
                let (num_nodes, num_edges) = parse_size_line(&line)?;
                eprintln!("Graph contains {} nodes and {} edges", num_nodes, num_edges);
                graph = Some(Graph::new(num_nodes, num_edges)?);
            }
            Some(b'a') => match graph.as_mut() {
                Some(graph) => {
                    let (node1, node2, weight) = parse_edge_line(&line, graph.number_of_nodes())?;
                    if edges_read == graph.number_of_edges() {
                        return Err(LoadError::FileFormat(line));
                    }
                    graph.add_undirected_edge(node1, node2, weight);
                    edges_read += 1;
                }
                None => return Err(LoadError::FileFormat(line)),
            },
            _ => {}
        }
    }

    graph.ok_or(LoadError::MissingSizeLine)
}

pub fn read_bincode_file(path: &Path) -> Result<Graph, LoadError> {
    let file = File::open(path).map_err(|_| LoadError::FileNotFound(path.to_path_buf()))?;
    let reader = BufReader::new(file);
    let graph: Graph = bincode::deserialize_from(reader)?;
    eprintln!(
        "Graph contains {} nodes and {} edges",
        graph.number_of_nodes(),
        graph.number_of_edges()
    );
    Ok(graph)
}

/// `p <tag> <num_nodes> <num_edges>`, fields past the edge count are ignored.
fn parse_size_line(line: &str) -> Result<(u32, u32), LoadError> {
    let mut fields = line.split_whitespace().skip(2);
    let num_nodes = fields.next().and_then(|field| field.parse().ok());
    let num_edges = fields.next().and_then(|field| field.parse().ok());
    match (num_nodes, num_edges) {
        (Some(num_nodes), Some(num_edges)) => Ok((num_nodes, num_edges)),
        _ => Err(LoadError::FileFormat(line.to_string())),
    }
}

/// `a <node1> <node2> <weight>` with 1-based node ids, converted to 0-based.
fn parse_edge_line(line: &str, num_nodes: u32) -> Result<(NodeId, NodeId, Weight), LoadError> {
    let mut fields = line.split_whitespace().skip(1);
    let node1: Option<u32> = fields.next().and_then(|field| field.parse().ok());
    let node2: Option<u32> = fields.next().and_then(|field| field.parse().ok());
    let weight: Option<u32> = fields.next().and_then(|field| field.parse().ok());
    match (node1, node2, weight) {
        (Some(node1), Some(node2), Some(weight))
            if (1..=num_nodes).contains(&node1) && (1..=num_nodes).contains(&node2) =>
        {
            Ok((node1 - 1, node2 - 1, weight))
        }
        _ => Err(LoadError::FileFormat(line.to_string())),
    }
}
