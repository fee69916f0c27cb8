use crate::chain::RailPair;
use crate::error::Result;
use crate::math::{centroid, lerp, midpoint};
use crate::mesh::MeshStore;

use super::{BridgePatch, FlowStyle};

/// Blend factor pulling each new diamond vertex from its top vertex toward
/// the bottom middle vertex. Empirically chosen to favor the denser side.
const DIAMOND_BLEND: f64 = 0.55;

/// Bridges a one-segment top rail onto a two-segment bottom rail.
///
/// Every style adds vertices: the split cannot be covered with quads alone.
///
/// # Errors
///
/// Returns an error if face creation fails or a handle is stale.
pub fn bridge_one_to_two(
    store: &mut MeshStore,
    rails: &RailPair,
    flow: FlowStyle,
) -> Result<BridgePatch> {
    debug_assert_eq!(rails.top.len(), 2);
    debug_assert_eq!(rails.bottom.len(), 3);

    let tp = rails.top.positions(store)?;
    let bp = rails.bottom.positions(store)?;
    let (t0, t1) = (rails.top.vertices()[0], rails.top.vertices()[1]);
    let (b0, b1, b2) = (
        rails.bottom.vertices()[0],
        rails.bottom.vertices()[1],
        rails.bottom.vertices()[2],
    );

    let mut patch = BridgePatch::default();
    match flow {
        FlowStyle::Diamond => {
            let m1 = store.add_vertex(lerp(&tp[0], &bp[1], DIAMOND_BLEND));
            let m2 = store.add_vertex(lerp(&tp[1], &bp[1], DIAMOND_BLEND));
            patch.new_vertices.extend([m1, m2]);
            patch.faces.push(store.add_face(&[t0, m1, b1, b0])?);
            patch.faces.push(store.add_face(&[t1, b2, b1, m2])?);
            patch.faces.push(store.add_face(&[t0, t1, m2, m1])?);
            patch.faces.push(store.add_face(&[m1, m2, b1])?);
        }
        FlowStyle::RightWeighted => {
            let p_right = midpoint(&tp[1], &bp[2]);
            let p_center = centroid(&tp[0], &bp[1], &p_right);
            let vr = store.add_vertex(p_right);
            let vc = store.add_vertex(p_center);
            patch.new_vertices.extend([vr, vc]);
            patch.faces.push(store.add_face(&[t0, b0, b1, vc])?);
            patch.faces.push(store.add_face(&[vc, b1, b2, vr])?);
            patch.faces.push(store.add_face(&[t0, vc, vr, t1])?);
        }
        FlowStyle::LeftWeighted => {
            let p_left = midpoint(&tp[0], &bp[0]);
            let p_center = centroid(&tp[1], &bp[1], &p_left);
            let vl = store.add_vertex(p_left);
            let vc = store.add_vertex(p_center);
            patch.new_vertices.extend([vl, vc]);
            patch.faces.push(store.add_face(&[t1, vc, b1, b2])?);
            patch.faces.push(store.add_face(&[vl, b0, b1, vc])?);
            patch.faces.push(store.add_face(&[t0, vl, vc, t1])?);
        }
    }
    Ok(patch)
}
