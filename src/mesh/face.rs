use crate::math::Vector3;

use super::vertex::VertexId;

slotmap::new_key_type! {
    /// Unique identifier for a face in the mesh store.
    pub struct FaceId;
}

/// Data associated with a mesh face.
///
/// The boundary is an ordered cyclic vertex sequence with consistent
/// winding; the stored normal is refreshed by
/// [`MeshStore::recompute_normals`](super::MeshStore::recompute_normals).
#[derive(Debug, Clone)]
pub struct FaceData {
    /// Ordered boundary vertices (at least three, no repeats).
    pub vertices: Vec<VertexId>,
    /// Unit normal from the last recomputation, `None` while the face is
    /// fresh or if its polygon is degenerate.
    pub normal: Option<Vector3>,
}
