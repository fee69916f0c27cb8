pub mod classify;
pub mod extract;
pub mod sample;

pub use classify::{classify_rails, Classification, RailPair, TopologyClass};
pub use extract::{extract_chains, EdgeAdjacency};
pub use sample::ArcLength;

use crate::error::Result;
use crate::math::Point3;
use crate::mesh::{MeshStore, VertexId};

/// An ordered open run of connected vertices — one rail of the region to
/// bridge.
///
/// Consecutive entries were joined by a selected edge during extraction and
/// no vertex repeats. Chains are rebuilt from the live selection on every
/// invocation and never outlive it.
#[derive(Debug, Clone)]
pub struct Chain {
    vertices: Vec<VertexId>,
}

impl Chain {
    pub(crate) fn new(vertices: Vec<VertexId>) -> Self {
        Self { vertices }
    }

    /// Ordered vertex handles of the chain.
    #[must_use]
    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }

    /// Number of vertices in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the chain has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges in the chain, i.e. vertex count − 1.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// Reverses the traversal order in place.
    pub fn reverse(&mut self) {
        self.vertices.reverse();
    }

    /// Resolves every vertex handle to its position, in chain order.
    ///
    /// # Errors
    ///
    /// Returns an error if any handle is stale.
    pub fn positions(&self, store: &MeshStore) -> Result<Vec<Point3>> {
        self.vertices
            .iter()
            .map(|&v| Ok(store.vertex(v)?.point))
            .collect()
    }
}
