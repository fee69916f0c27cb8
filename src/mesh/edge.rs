use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for an edge in the mesh store.
    pub struct EdgeId;
}

/// Data associated with a mesh edge.
///
/// Endpoint order carries no meaning; an edge is an unordered vertex pair.
#[derive(Debug, Clone)]
pub struct EdgeData {
    /// One endpoint of the edge.
    pub start: VertexId,
    /// The other endpoint of the edge.
    pub end: VertexId,
    /// Whether the edge is part of the current selection.
    pub selected: bool,
}

impl EdgeData {
    /// Returns the endpoint opposite to `v`, or `None` if `v` is not an
    /// endpoint of this edge.
    #[must_use]
    pub fn other_vertex(&self, v: VertexId) -> Option<VertexId> {
        if v == self.start {
            Some(self.end)
        } else if v == self.end {
            Some(self.start)
        } else {
            None
        }
    }
}
