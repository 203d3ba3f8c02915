use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::frontier::{Frontier, HeapFrontier, ScanFrontier};
use crate::graph::{Cost, Graph, VertexId};

/// Distance held by vertices the source cannot reach.
pub const INFINITE_COST: Cost = Cost::INFINITY;

/// How the next vertex to finalize is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    /// Linear scan over all vertices per step.
    #[default]
    Scan,
    /// Decrease-key binary heap.
    Heap,
}

impl FromStr for Selection {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "scan" => Ok(Selection::Scan),
            "heap" => Ok(Selection::Heap),
            _ => Err(GraphError::UnknownSelection(s.to_string())),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Scan => f.write_str("scan"),
            Selection::Heap => f.write_str("heap"),
        }
    }
}

/// A minimal-cost path, source first. Only built from a finished run, so it
/// always holds at least the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    vertices: Vec<VertexId>,
    cost: Cost,
}

impl Route {
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<VertexId> {
        self.vertices
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn source(&self) -> VertexId {
        self.vertices[0]
    }

    pub fn destination(&self) -> VertexId {
        self.vertices[self.vertices.len() - 1]
    }

    /// Number of edges on the route.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }
}

/// Distances and predecessor links from one run of [`ShortestPathEngine::run_from`].
///
/// Internally indexed from zero; every accessor takes one-based labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    distance: Vec<Cost>,
    predecessor: Vec<Option<usize>>,
    visited: Vec<bool>,
}

impl ShortestPaths {
    fn init(vertex_count: usize, source: usize) -> Self {
        let mut distance = vec![INFINITE_COST; vertex_count];
        distance[source] = 0.0;
        Self {
            source,
            distance,
            predecessor: vec![None; vertex_count],
            visited: vec![false; vertex_count],
        }
    }

    pub fn source(&self) -> VertexId {
        self.source + 1
    }

    pub fn vertex_count(&self) -> usize {
        self.distance.len()
    }

    /// Per-vertex distances indexed from zero, [`INFINITE_COST`] when unreachable.
    pub fn distances(&self) -> &[Cost] {
        &self.distance
    }

    pub fn distance(&self, vertex: VertexId) -> Result<Cost> {
        Ok(self.distance[self.index(vertex)?])
    }

    /// The vertex before `vertex` on its shortest path; `None` for the source and unreached vertices.
    pub fn predecessor(&self, vertex: VertexId) -> Result<Option<VertexId>> {
        Ok(self.predecessor[self.index(vertex)?].map(|p| p + 1))
    }

    pub fn is_visited(&self, vertex: VertexId) -> Result<bool> {
        Ok(self.visited[self.index(vertex)?])
    }

    pub fn is_reachable(&self, vertex: VertexId) -> Result<bool> {
        Ok(self.distance(vertex)?.is_finite())
    }

    /// Walks predecessor links back from `destination`. `None` if it is unreachable.
    pub fn route_to(&self, destination: VertexId) -> Result<Option<Route>> {
        let destination = self.index(destination)?;
        Ok(self.route_from_index(destination))
    }

    /// Routes to every reachable vertex other than the source, in label order.
    pub fn routes(&self) -> impl Iterator<Item = (VertexId, Route)> + '_ {
        (0..self.vertex_count())
            .filter(move |&i| i != self.source)
            .filter_map(move |i| self.route_from_index(i).map(|route| (i + 1, route)))
    }

    fn route_from_index(&self, destination: usize) -> Option<Route> {
        let cost = self.distance[destination];
        if !cost.is_finite() {
            return None;
        }
        let mut vertices = vec![destination + 1];
        let mut cur = destination;
        while let Some(prev) = self.predecessor[cur] {
            vertices.push(prev + 1);
            cur = prev;
        }
        vertices.reverse();
        Some(Route { vertices, cost })
    }

    fn index(&self, vertex: VertexId) -> Result<usize> {
        if vertex == 0 || vertex > self.vertex_count() {
            return Err(GraphError::InvalidVertexIndex {
                vertex,
                vertex_count: self.vertex_count(),
            });
        }
        Ok(vertex - 1)
    }
}

/// Runs Dijkstra over a borrowed [`Graph`].
///
/// The graph is only read, so any number of engines may share it.
#[derive(Debug, Clone, Copy)]
pub struct ShortestPathEngine<'g> {
    graph: &'g Graph,
    selection: Selection,
}

impl<'g> ShortestPathEngine<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_selection(graph, Selection::default())
    }

    pub fn with_selection(graph: &'g Graph, selection: Selection) -> Self {
        Self { graph, selection }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Dijkstra from `source` to all vertices.
    pub fn run_from(&self, source: VertexId) -> Result<ShortestPaths> {
        let start = self.graph.index(source)?;
        debug!(
            source,
            vertices = self.graph.vertex_count(),
            selection = %self.selection,
            "running dijkstra"
        );
        let paths = match self.selection {
            Selection::Scan => self.relax_all(start, ScanFrontier)?,
            Selection::Heap => self.relax_all(start, HeapFrontier::new(start))?,
        };
        debug!(
            source,
            finalized = paths.visited.iter().filter(|&&v| v).count(),
            "dijkstra finished"
        );
        Ok(paths)
    }

    /// Shortest route from `source` to `destination`, or `None` if unreachable.
    pub fn run_to(&self, source: VertexId, destination: VertexId) -> Result<Option<Route>> {
        self.graph.index(destination)?;
        let paths = self.run_from(source)?;
        paths.route_to(destination)
    }

    /// Rebuilds the source-to-`destination` vertex sequence from a finished run.
    pub fn path_to(
        &self,
        destination: VertexId,
        paths: &ShortestPaths,
    ) -> Result<Option<Vec<VertexId>>> {
        if paths.vertex_count() != self.graph.vertex_count() {
            return Err(GraphError::ResultMismatch {
                result: paths.vertex_count(),
                graph: self.graph.vertex_count(),
            });
        }
        Ok(paths.route_to(destination)?.map(Route::into_vertices))
    }

    fn relax_all<F: Frontier>(&self, source: usize, mut frontier: F) -> Result<ShortestPaths> {
        let mut paths = ShortestPaths::init(self.graph.vertex_count(), source);

        for _ in 0..self.graph.vertex_count() {
            let Some(u) = frontier.select(&paths.distance, &paths.visited) else {
                // Everything left is unreachable.
                break;
            };
            paths.visited[u] = true;
            let cost_to_u = paths.distance[u];
            trace!(vertex = u + 1, cost = cost_to_u, "finalized");

            for (v, weight) in self.graph.row(u).iter().enumerate() {
                let Some(weight) = *weight else { continue };
                if paths.visited[v] {
                    continue;
                }
                let candidate = cost_to_u + weight;
                // Finite weights whose sum leaves f64 range.
                if !candidate.is_finite() {
                    return Err(GraphError::CostOverflow {
                        from: u + 1,
                        to: v + 1,
                    });
                }
                if candidate < paths.distance[v] {
                    paths.distance[v] = candidate;
                    paths.predecessor[v] = Some(u);
                    frontier.relaxed(v, candidate);
                }
            }
        }
        Ok(paths)
    }
}
