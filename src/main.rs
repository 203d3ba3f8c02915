use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sssp::{load, Selection, ShortestPathEngine};
use tracing_subscriber::EnvFilter;

mod report;

#[derive(Parser, Debug)]
#[command(name = "sssp")]
#[command(about = "Build a graph from a CSV with from,to,weight rows and run Dijkstra from a source vertex.", long_about = None)]
struct Cli {
    /// Path to the .csv edge list (one-based vertex labels)
    #[arg(short, long)]
    csv: String,

    /// Source vertex label
    #[arg(short, long)]
    source: usize,

    /// Only report the route to this vertex (text report and CSV alike)
    #[arg(short, long)]
    destination: Option<usize>,

    /// Number of vertices. If omitted, the largest label in the CSV is used.
    #[arg(short, long)]
    vertices: Option<usize>,

    #[arg(short, long, default_value_t = Selection::Scan)]
    algorithm: Selection,

    /// Output CSV (vertex, distance, path). If omitted, prints a report to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable vertices in the CSV with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let graph = load::graph_from_path(&cli.csv, cli.vertices)
        .with_context(|| format!("loading {}", &cli.csv))?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    let engine = ShortestPathEngine::with_selection(&graph, cli.algorithm);
    let paths = engine
        .run_from(cli.source)
        .with_context(|| format!("running from source {}", cli.source))?;
    if let Some(destination) = cli.destination {
        // Validates the label before anything is printed.
        engine
            .path_to(destination, &paths)
            .with_context(|| format!("destination {}", destination))?;
    }

    if let Some(out_path) = cli.out {
        let file = File::create(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        let written = report::write_csv(file, &paths, cli.destination, cli.include_unreachable)?;
        tracing::info!(rows = written, path = %out_path, "wrote distances");
    } else {
        let stdout = io::stdout();
        report::write_text(&mut stdout.lock(), &paths, cli.destination)?;
    }

    Ok(())
}
