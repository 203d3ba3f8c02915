//! Building a [`Graph`] from a CSV edge list.
//!
//! The file needs a header row and three columns, `from,to,weight`, with
//! one-based vertex labels:
//!
//! ```text
//! from,to,weight
//! 1,2,10
//! 1,4,30
//! ```

use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::error::GraphError;
use crate::graph::{Cost, Graph, VertexId};

#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("line {line}: cannot parse {field} from {value:?}")]
    Parse {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: {source}")]
    Graph {
        line: u64,
        #[source]
        source: GraphError,
    },

    #[error(transparent)]
    VertexCount(GraphError),
}

/// Reads `(from, to, weight)` rows. Labels are not range-checked here.
pub fn read_edges<R: Read>(reader: R) -> Result<Vec<(u64, VertexId, VertexId, Cost)>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut edges = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        let from = parse_field(&record, 0, "from", line)?;
        let to = parse_field(&record, 1, "to", line)?;
        let weight = parse_field(&record, 2, "weight", line)?;
        edges.push((line, from, to, weight));
    }
    Ok(edges)
}

/// Loads a graph from CSV. With `vertex_count` unset, the largest label present decides it.
pub fn graph_from_reader<R: Read>(reader: R, vertex_count: Option<usize>) -> Result<Graph, LoadError> {
    let edges = read_edges(reader)?;
    let vertex_count = vertex_count.unwrap_or_else(|| {
        edges
            .iter()
            .map(|&(_, from, to, _)| std::cmp::max(from, to))
            .max()
            .unwrap_or(1)
    });
    let mut graph = Graph::new(vertex_count).map_err(LoadError::VertexCount)?;

    for (line, from, to, weight) in edges {
        let previous = graph
            .edge(from, to)
            .map_err(|source| LoadError::Graph { line, source })?;
        graph
            .add_edge(from, to, weight)
            .map_err(|source| LoadError::Graph { line, source })?;
        if let Some(previous) = previous {
            warn!(line, from, to, previous, weight, "duplicate edge, keeping the later weight");
        }
    }
    debug!(vertices = graph.vertex_count(), edges = graph.edge_count(), "loaded graph");
    Ok(graph)
}

pub fn graph_from_path<P: AsRef<Path>>(path: P, vertex_count: Option<usize>) -> Result<Graph, LoadError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    graph_from_reader(file, vertex_count)
}

fn parse_field<T: FromStr>(
    record: &StringRecord,
    i: usize,
    field: &'static str,
    line: u64,
) -> Result<T, LoadError> {
    let value = record.get(i).unwrap_or("");
    value.parse().map_err(|_| LoadError::Parse {
        line,
        field,
        value: value.to_string(),
    })
}
