use std::{path::PathBuf, process};

use clap::Parser;
use plain_dijkstra::{graphs::loader::read_graph, search::dijkstra::single_source};

/// Computes single source shortest paths from node 0 and reports how long
/// the computation took
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file, DIMACS-style text or .bincode
    graph: PathBuf,
}

fn main() {
    let args = Args::parse();

    let graph = match read_graph(&args.graph) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let result = single_source(&graph, 0);

    eprintln!("Computation time: {:.6}", result.duration.as_secs_f64());
}
