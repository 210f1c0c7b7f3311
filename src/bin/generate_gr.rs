use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
    process,
};

use ahash::{HashSet, HashSetExt};
use clap::Parser;
use plain_dijkstra::utility::get_progressbar;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Writes a random undirected graph in the DIMACS-style text format, for
/// feeding the shortest path timing
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes
    #[arg(short, long)]
    num_nodes: u32,
    /// Number of undirected edges, without duplicates or self loops
    #[arg(short = 'm', long)]
    num_edges: u32,
    /// Weights are drawn uniformly from 1..=max_weight
    #[arg(short = 'w', long, default_value = "100")]
    max_weight: u32,
    /// Seed for reproducible output, random otherwise
    #[arg(short, long)]
    seed: Option<u64>,
    /// Outfile in .gr format
    #[arg(short, long)]
    outfile: PathBuf,
}

fn main() {
    let args = Args::parse();

    let max_edges = args.num_nodes as u64 * args.num_nodes.saturating_sub(1) as u64 / 2;
    if args.num_edges as u64 > max_edges {
        eprintln!("{} nodes fit at most {} edges", args.num_nodes, max_edges);
        process::exit(1);
    }
    if args.max_weight == 0 {
        eprintln!("max_weight must be at least 1");
        process::exit(1);
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let bar = get_progressbar("Generating edges", args.num_edges as u64);
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    while edges.len() < args.num_edges as usize {
        let node1 = rng.gen_range(0..args.num_nodes);
        let node2 = rng.gen_range(0..args.num_nodes);
        if node1 == node2 {
            continue;
        }
        if !seen.insert((node1.min(node2), node1.max(node2))) {
            continue;
        }
        let weight = rng.gen_range(1..=args.max_weight);
        edges.push((node1, node2, weight));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let mut writer = BufWriter::new(File::create(&args.outfile).unwrap());
    writeln!(writer, "c random graph, {} nodes", args.num_nodes).unwrap();
    writeln!(writer, "p sp {} {}", args.num_nodes, args.num_edges).unwrap();
    for (node1, node2, weight) in edges {
        writeln!(writer, "a {} {} {}", node1 + 1, node2 + 1, weight).unwrap();
    }
    writer.flush().unwrap();
}
