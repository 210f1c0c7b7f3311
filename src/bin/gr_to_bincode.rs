use std::{fs::File, io::BufWriter, path::PathBuf, process, time::Instant};

use clap::Parser;
use plain_dijkstra::graphs::loader::read_gr_file;

/// Converts a DIMACS-style text graph to a bincode file, which loads much
/// faster
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Infile in .gr format
    #[arg(short, long)]
    infile: PathBuf,
    /// Outfile in .bincode format
    #[arg(short, long)]
    outfile: PathBuf,
}

fn main() {
    let args = Args::parse();

    let start = Instant::now();
    let graph = match read_gr_file(&args.infile) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    println!("loading graph took {:?}", start.elapsed());

    let start = Instant::now();
    let writer = BufWriter::new(File::create(&args.outfile).unwrap());
    bincode::serialize_into(writer, &graph).unwrap();
    println!("writing graph took {:?}", start.elapsed());
}
