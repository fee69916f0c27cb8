pub mod edge;
pub mod face;
pub mod vertex;

pub use edge::{EdgeData, EdgeId};
pub use face::{FaceData, FaceId};
pub use vertex::{VertexData, VertexId};

use crate::error::MeshError;
use crate::math::{Point3, Vector3, TOLERANCE};
use slotmap::SlotMap;

/// Arena that owns all mesh entities.
///
/// Entities reference each other via typed IDs (generational indices). The
/// bridging core only reads vertex positions and the edge selection, and
/// creates new vertices and faces; it never deletes anything.
#[derive(Debug, Default)]
pub struct MeshStore {
    vertices: SlotMap<VertexId, VertexData>,
    edges: SlotMap<EdgeId, EdgeData>,
    faces: SlotMap<FaceId, FaceData>,
}

impl MeshStore {
    /// Creates a new, empty mesh store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Vertex operations ---

    /// Creates a vertex at the given position and returns its ID.
    pub fn add_vertex(&mut self, point: Point3) -> VertexId {
        self.vertices.insert(VertexData::new(point))
    }

    /// Returns a reference to the vertex data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn vertex(&self, id: VertexId) -> Result<&VertexData, MeshError> {
        self.vertices
            .get(id)
            .ok_or(MeshError::EntityNotFound("vertex"))
    }

    /// Number of vertices currently stored.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // --- Edge operations ---

    /// Creates an unselected edge between two distinct vertices.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::DegenerateEdge`] if both endpoints are the same
    /// vertex, or an error if either endpoint handle is stale.
    pub fn add_edge(&mut self, start: VertexId, end: VertexId) -> Result<EdgeId, MeshError> {
        if start == end {
            return Err(MeshError::DegenerateEdge);
        }
        self.vertex(start)?;
        self.vertex(end)?;
        Ok(self.edges.insert(EdgeData {
            start,
            end,
            selected: false,
        }))
    }

    /// Returns a reference to the edge data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn edge(&self, id: EdgeId) -> Result<&EdgeData, MeshError> {
        self.edges.get(id).ok_or(MeshError::EntityNotFound("edge"))
    }

    // --- Selection ---

    /// Marks an edge as selected.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge is not found in the store.
    pub fn select_edge(&mut self, id: EdgeId) -> Result<(), MeshError> {
        self.edges
            .get_mut(id)
            .ok_or(MeshError::EntityNotFound("edge"))?
            .selected = true;
        Ok(())
    }

    /// Clears the edge selection.
    pub fn deselect_all(&mut self) {
        for edge in self.edges.values_mut() {
            edge.selected = false;
        }
    }

    /// IDs of the currently selected edges, in storage order.
    #[must_use]
    pub fn selected_edges(&self) -> Vec<EdgeId> {
        self.edges
            .iter()
            .filter(|(_, edge)| edge.selected)
            .map(|(id, _)| id)
            .collect()
    }

    // --- Face operations ---

    /// Creates a face from an ordered boundary of at least three distinct
    /// vertices and returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::FaceTooFewVertices`] for a boundary shorter than
    /// three entries, [`MeshError::FaceDuplicateVertex`] if any vertex
    /// repeats, or an error if any handle is stale.
    pub fn add_face(&mut self, boundary: &[VertexId]) -> Result<FaceId, MeshError> {
        if boundary.len() < 3 {
            return Err(MeshError::FaceTooFewVertices(boundary.len()));
        }
        for (i, &v) in boundary.iter().enumerate() {
            self.vertex(v)?;
            if boundary[i + 1..].contains(&v) {
                return Err(MeshError::FaceDuplicateVertex);
            }
        }
        Ok(self.faces.insert(FaceData {
            vertices: boundary.to_vec(),
            normal: None,
        }))
    }

    /// Returns a reference to the face data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn face(&self, id: FaceId) -> Result<&FaceData, MeshError> {
        self.faces.get(id).ok_or(MeshError::EntityNotFound("face"))
    }

    /// Number of faces currently stored.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    // --- Normals ---

    /// Recomputes and stores the polygon normal of each listed face.
    ///
    /// Degenerate polygons keep `normal = None` rather than erroring.
    ///
    /// # Errors
    ///
    /// Returns an error if any face or vertex handle is stale.
    pub fn recompute_normals(&mut self, faces: &[FaceId]) -> Result<(), MeshError> {
        for &id in faces {
            let boundary = self.face(id)?.vertices.clone();
            let mut points = Vec::with_capacity(boundary.len());
            for v in boundary {
                points.push(self.vertex(v)?.point);
            }
            let normal = newell_normal(&points);
            self.faces
                .get_mut(id)
                .ok_or(MeshError::EntityNotFound("face"))?
                .normal = normal;
        }
        Ok(())
    }
}

/// Computes the normal of a polygon using Newell's method.
///
/// Returns `None` for a degenerate polygon.
fn newell_normal(points: &[Point3]) -> Option<Vector3> {
    let n = points.len();
    let mut normal = Vector3::zeros();
    for i in 0..n {
        let curr = &points[i];
        let next = &points[(i + 1) % n];
        normal.x += (curr.y - next.y) * (curr.z + next.z);
        normal.y += (curr.z - next.z) * (curr.x + next.x);
        normal.z += (curr.x - next.x) * (curr.y + next.y);
    }
    let len = normal.norm();
    if len < TOLERANCE {
        None
    } else {
        Some(normal / len)
    }
}
