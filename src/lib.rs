//! Single-source shortest paths over a dense adjacency matrix.
//!
//! Build a [`Graph`] with one-based vertex labels, run a
//! [`ShortestPathEngine`] from a source and read distances and routes from the
//! returned [`ShortestPaths`]:
//!
//! ```
//! use matrix_sssp::{Graph, ShortestPathEngine};
//!
//! let graph = Graph::from_edges(3, &[(1, 2, 4.0), (2, 3, 1.0), (1, 3, 9.0)])?;
//! let engine = ShortestPathEngine::new(&graph);
//! let paths = engine.run_from(1)?;
//! assert_eq!(paths.distance(3)?, 5.0);
//! assert_eq!(engine.path_to(3, &paths)?, Some(vec![1, 2, 3]));
//! # Ok::<(), matrix_sssp::GraphError>(())
//! ```

pub mod dijkstra;
pub mod error;
mod frontier;
pub mod graph;
pub mod load;

pub use dijkstra::{Route, Selection, ShortestPathEngine, ShortestPaths, INFINITE_COST};
pub use error::{GraphError, Result};
pub use graph::{Cost, Graph, VertexId};
pub use load::LoadError;
