/*
Dense adjacency matrix over a fixed number of vertices.

Vertices are addressed by one-based labels at the public boundary (label 1 is
row/column 0). Each cell holds an optional weight, so "no edge" and a
zero-weight edge stay distinguishable.
*/

use crate::error::{GraphError, Result};

/// One-based vertex label.
pub type VertexId = usize;
pub type Cost = f64;

#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    // Row-major, vertex_count * vertex_count cells.
    weights: Vec<Option<Cost>>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::InvalidArgument(String::from(
                "vertex count must be positive",
            )));
        }
        let cells = vertex_count.checked_mul(vertex_count).ok_or_else(|| {
            GraphError::InvalidArgument(format!(
                "vertex count {} overflows the adjacency matrix size",
                vertex_count
            ))
        })?;
        let mut weights = Vec::new();
        weights.try_reserve_exact(cells).map_err(|e| {
            GraphError::InvalidArgument(format!(
                "cannot allocate a matrix for {} vertices: {}",
                vertex_count, e
            ))
        })?;
        weights.resize(cells, None);
        Ok(Self {
            vertex_count,
            weights,
        })
    }

    /// Builds a graph from `(from, to, weight)` triples, stopping at the first invalid edge.
    pub fn from_edges(vertex_count: usize, edges: &[(VertexId, VertexId, Cost)]) -> Result<Self> {
        let mut graph = Graph::new(vertex_count)?;
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.weights.iter().filter(|w| w.is_some()).count()
    }

    /// All vertex labels in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> {
        1..=self.vertex_count
    }

    /// Stores `weight` for the ordered pair, replacing any earlier weight.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: Cost) -> Result<()> {
        let cell = self.cell(from, to)?;
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight { from, to, weight });
        }
        self.weights[cell] = Some(weight);
        Ok(())
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> Result<bool> {
        Ok(self.edge(from, to)?.is_some())
    }

    /// The stored weight, or `0` when there is no edge. Use [`Graph::edge`] to tell the two apart.
    pub fn weight_of(&self, from: VertexId, to: VertexId) -> Result<Cost> {
        Ok(self.edge(from, to)?.unwrap_or(0.0))
    }

    pub fn edge(&self, from: VertexId, to: VertexId) -> Result<Option<Cost>> {
        let cell = self.cell(from, to)?;
        Ok(self.weights[cell])
    }

    /// Outgoing edges of `from` as `(to, weight)`, in label order.
    pub fn neighbors(&self, from: VertexId) -> Result<impl Iterator<Item = (VertexId, Cost)> + '_> {
        let row = self.index(from)?;
        Ok(self
            .row(row)
            .iter()
            .enumerate()
            .filter_map(|(to, w)| w.map(|w| (to + 1, w))))
    }

    /// Converts a one-based label into a zero-based index.
    pub(crate) fn index(&self, vertex: VertexId) -> Result<usize> {
        if vertex == 0 || vertex > self.vertex_count {
            return Err(GraphError::InvalidVertexIndex {
                vertex,
                vertex_count: self.vertex_count,
            });
        }
        Ok(vertex - 1)
    }

    /// Zero-based row of the matrix.
    pub(crate) fn row(&self, index: usize) -> &[Option<Cost>] {
        let start = index * self.vertex_count;
        &self.weights[start..start + self.vertex_count]
    }

    fn cell(&self, from: VertexId, to: VertexId) -> Result<usize> {
        let from = self.index(from)?;
        let to = self.index(to)?;
        Ok(from * self.vertex_count + to)
    }
}
