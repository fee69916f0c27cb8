use crate::chain::{ArcLength, Chain};
use crate::error::Result;
use crate::mesh::MeshStore;

use super::BridgePatch;

/// Greedy arclength-matched bridge for arbitrary n-to-m rails.
///
/// Walks both rails front to back with one cursor each. Segments whose
/// arclength fractions line up are paired into a quad; a density mismatch
/// advances only the rail that is behind, emitting a triangle. Creates no
/// vertices, so the patch boundary is exactly the two rails plus the two
/// end-connecting edges. Also serves the even-gap case, which has no
/// specialized layout.
///
/// # Errors
///
/// Returns an error if face creation fails or a handle is stale.
pub fn bridge_general(store: &mut MeshStore, top: &Chain, bottom: &Chain) -> Result<BridgePatch> {
    let t = top.vertices();
    let b = bottom.vertices();
    let mut patch = BridgePatch::default();
    if t.len() < 2 || b.len() < 2 {
        return Ok(patch);
    }

    let top_arc = ArcLength::new(&top.positions(store)?);
    let bot_arc = ArcLength::new(&bottom.positions(store)?);
    let n_top = top.segment_count();
    let n_bot = bottom.segment_count();

    let mut i = 0;
    let mut j = 0;
    while i < n_top || j < n_bot {
        if i < n_top && j < n_bot {
            let u_top = top_arc.fraction_at(i + 1);
            let u_bot = bot_arc.fraction_at(j + 1);
            let step = (u_top - top_arc.fraction_at(i)).max(u_bot - bot_arc.fraction_at(j));
            if (u_top - u_bot).abs() <= step * 0.5 {
                patch
                    .faces
                    .push(store.add_face(&[t[i], b[j], b[j + 1], t[i + 1]])?);
                i += 1;
                j += 1;
            } else if u_top < u_bot {
                patch.faces.push(store.add_face(&[t[i], b[j], t[i + 1]])?);
                i += 1;
            } else {
                patch.faces.push(store.add_face(&[t[i], b[j], b[j + 1]])?);
                j += 1;
            }
        } else if i < n_top {
            patch.faces.push(store.add_face(&[t[i], b[j], t[i + 1]])?);
            i += 1;
        } else {
            patch.faces.push(store.add_face(&[t[i], b[j], b[j + 1]])?);
            j += 1;
        }
    }
    Ok(patch)
}
