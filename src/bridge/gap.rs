use crate::chain::{ArcLength, Chain};
use crate::error::Result;
use crate::math::midpoint;
use crate::mesh::{MeshStore, VertexId};

use super::BridgePatch;

/// Odd-gap bridge, outer variant.
///
/// Creates one new vertex per top segment, placed at the midpoint between
/// the bottom vertex and the arclength-equivalent position on the top rail,
/// then stitches two closing quads at the ends and an alternating run of
/// interior quads. Produces `n_top + 1` vertices and `2 * n_top + 2` faces.
///
/// # Errors
///
/// Returns an error if face creation fails or a handle is stale.
pub fn bridge_gap_outer(store: &mut MeshStore, top: &Chain, bottom: &Chain) -> Result<BridgePatch> {
    let n_top = top.segment_count();
    debug_assert!(n_top >= 1);
    debug_assert_eq!(bottom.segment_count(), n_top + 2);

    let tp = top.positions(store)?;
    let bp = bottom.positions(store)?;
    let top_arc = ArcLength::new(&tp);
    let bot_arc = ArcLength::new(&bp);

    let mut mid: Vec<VertexId> = Vec::with_capacity(n_top + 1);
    for i in 0..=n_top {
        let u = bot_arc.fraction_at(i + 1);
        let on_top = top_arc.position_at(&tp, u);
        mid.push(store.add_vertex(midpoint(&on_top, &bp[i + 1])));
    }

    let t = top.vertices();
    let b = bottom.vertices();
    let mut patch = BridgePatch {
        new_vertices: mid.clone(),
        faces: Vec::with_capacity(2 * n_top + 2),
    };

    patch.faces.push(store.add_face(&[t[0], b[0], b[1], mid[0]])?);
    patch.faces.push(store.add_face(&[
        mid[n_top],
        b[b.len() - 2],
        b[b.len() - 1],
        t[t.len() - 1],
    ])?);
    for i in 0..n_top {
        patch
            .faces
            .push(store.add_face(&[t[i], mid[i], mid[i + 1], t[i + 1]])?);
        patch
            .faces
            .push(store.add_face(&[mid[i], b[i + 1], b[i + 2], mid[i + 1]])?);
    }
    Ok(patch)
}

/// Odd-gap bridge, inner variant.
///
/// Concentrates the length mismatch into a single central dart: two new
/// vertices at the cross-rail midpoints of the center vertex pairs, aligned
/// quads walked outward from the center on both sides, and boundary quads
/// closing against a center vertex where the index ranges diverge.
///
/// The caller passes the denser rail as `top`; dispatch swaps the pair.
///
/// # Errors
///
/// Returns an error if face creation fails or a handle is stale.
pub fn bridge_gap_inner(store: &mut MeshStore, top: &Chain, bottom: &Chain) -> Result<BridgePatch> {
    let n_top = top.segment_count();
    let n_bot = bottom.segment_count();
    debug_assert!(n_top >= 2 && n_bot >= 2);

    let tp = top.positions(store)?;
    let bp = bottom.positions(store)?;
    let t = top.vertices();
    let b = bottom.vertices();

    let top_center_left = n_top / 2;
    let top_center_right = top_center_left + 1;
    let bot_center_left = n_bot / 2;
    let bot_center_right = bot_center_left + 1;

    let v_left = store.add_vertex(midpoint(&tp[top_center_left], &bp[bot_center_left]));
    let v_right = store.add_vertex(midpoint(&tp[top_center_right], &bp[bot_center_right]));

    let mut patch = BridgePatch::default();
    patch.new_vertices.extend([v_left, v_right]);

    // Left half, start toward center.
    for i in 0..top_center_left {
        if i < bot_center_left || i != top_center_left - 1 {
            patch
                .faces
                .push(store.add_face(&[t[i], t[i + 1], b[i + 1], b[i]])?);
        } else {
            patch
                .faces
                .push(store.add_face(&[t[i], t[i + 1], v_left, b[i]])?);
        }
    }

    // Right half, end toward center. Bottom indices trail by the segment
    // count difference.
    for i in (top_center_right..n_top).rev() {
        let right_bot = (i + n_bot).checked_sub(n_top);
        match right_bot {
            Some(j) if j >= bot_center_right && j + 1 < n_bot => {
                patch
                    .faces
                    .push(store.add_face(&[t[i], b[j], b[j + 1], t[i + 1]])?);
            }
            _ if i == top_center_right => {
                patch
                    .faces
                    .push(store.add_face(&[t[i], v_right, b[bot_center_right], t[i + 1]])?);
            }
            Some(j) if j < n_bot => {
                patch
                    .faces
                    .push(store.add_face(&[t[i], b[j], b[j + 1], t[i + 1]])?);
            }
            _ => {}
        }
    }

    // The dart itself.
    patch.faces.push(store.add_face(&[
        t[top_center_left],
        t[top_center_right],
        v_right,
        v_left,
    ])?);
    patch.faces.push(store.add_face(&[
        v_left,
        v_right,
        b[bot_center_right],
        b[bot_center_left],
    ])?);

    Ok(patch)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use approx::assert_relative_eq;

    fn straight_chain(store: &mut MeshStore, z: f64, segments: usize) -> Chain {
        let verts = (0..=segments)
            .map(|i| {
                let x = i as f64 / segments as f64;
                store.add_vertex(Point3::new(x, 0.0, z))
            })
            .collect();
        Chain::new(verts)
    }

    // ── Outer variant ──────────────────────────────────────────

    #[test]
    fn outer_on_3_to_5_segments_creates_4_vertices_and_8_faces() {
        let mut store = MeshStore::new();
        let top = straight_chain(&mut store, 0.0, 3);
        let bottom = straight_chain(&mut store, -1.0, 5);

        let patch = bridge_gap_outer(&mut store, &top, &bottom).unwrap();
        assert_eq!(patch.new_vertices.len(), 4);
        assert_eq!(patch.faces.len(), 8);

        // All faces are quads.
        for &f in &patch.faces {
            assert_eq!(store.face(f).unwrap().vertices.len(), 4);
        }
    }

    #[test]
    fn outer_new_vertices_sit_between_the_rails() {
        let mut store = MeshStore::new();
        let top = straight_chain(&mut store, 0.0, 3);
        let bottom = straight_chain(&mut store, -1.0, 5);

        let patch = bridge_gap_outer(&mut store, &top, &bottom).unwrap();
        for &v in &patch.new_vertices {
            let point = store.vertex(v).unwrap().point;
            assert_relative_eq!(point.z, -0.5, epsilon = 1e-12);
            assert!(point.x > 0.0 && point.x < 1.0);
        }
    }

    #[test]
    fn outer_vertices_follow_the_bottom_spacing() {
        let mut store = MeshStore::new();
        let top = straight_chain(&mut store, 0.0, 1);
        let bottom = straight_chain(&mut store, -1.0, 3);

        let patch = bridge_gap_outer(&mut store, &top, &bottom).unwrap();
        assert_eq!(patch.new_vertices.len(), 2);
        // Bottom interior vertices sit at x = 1/3 and 2/3; the equivalent
        // top samples share those fractions, so the midpoints do too.
        let first = store.vertex(patch.new_vertices[0]).unwrap().point;
        let second = store.vertex(patch.new_vertices[1]).unwrap().point;
        assert_relative_eq!(first.x, 1.0 / 3.0, epsilon = 1e-3);
        assert_relative_eq!(second.x, 2.0 / 3.0, epsilon = 1e-3);
    }

    // ── Inner variant ──────────────────────────────────────────

    #[test]
    fn inner_on_5_to_3_segments_creates_2_vertices_and_quads_only() {
        let mut store = MeshStore::new();
        // Dispatch passes the denser rail first.
        let dense = straight_chain(&mut store, -1.0, 5);
        let sparse = straight_chain(&mut store, 0.0, 3);

        let patch = bridge_gap_inner(&mut store, &dense, &sparse).unwrap();
        assert_eq!(patch.new_vertices.len(), 2);
        for &f in &patch.faces {
            assert_eq!(store.face(f).unwrap().vertices.len(), 4);
        }
        // 2 left + 2 right + 2 dart faces for this pairing.
        assert_eq!(patch.faces.len(), 6);
    }

    #[test]
    fn inner_dart_vertices_sit_at_central_midpoints() {
        let mut store = MeshStore::new();
        let dense = straight_chain(&mut store, -1.0, 5);
        let sparse = straight_chain(&mut store, 0.0, 3);

        let patch = bridge_gap_inner(&mut store, &dense, &sparse).unwrap();
        let left = store.vertex(patch.new_vertices[0]).unwrap().point;
        let right = store.vertex(patch.new_vertices[1]).unwrap().point;
        // Centers: dense index 2 (x = 0.4) with sparse index 1 (x = 1/3),
        // and dense index 3 (x = 0.6) with sparse index 2 (x = 2/3).
        assert_relative_eq!(left.x, (0.4 + 1.0 / 3.0) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(right.x, (0.6 + 2.0 / 3.0) / 2.0, epsilon = 1e-12);
        assert_relative_eq!(left.z, -0.5, epsilon = 1e-12);
    }
}
