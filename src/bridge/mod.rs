pub mod gap;
pub mod general;
pub mod one_to_two;

pub use gap::{bridge_gap_inner, bridge_gap_outer};
pub use general::bridge_general;
pub use one_to_two::bridge_one_to_two;

use crate::chain::{RailPair, TopologyClass};
use crate::error::Result;
use crate::mesh::{FaceId, MeshStore, VertexId};

/// How a one-to-two split is resolved.
///
/// A one-segment rail cannot be tiled onto a two-segment rail with pure
/// quads without added vertices; each style is a different compromise
/// between quad count and shape regularity, left as a user choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowStyle {
    /// Two blended vertices and a small central triangle, four faces.
    #[default]
    Diamond,
    /// Three quads, the extra vertex biased toward the right end.
    RightWeighted,
    /// Mirror of `RightWeighted`.
    LeftWeighted,
}

/// Where an odd-gap bridge concentrates the segment-count mismatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoopStyle {
    /// One extra vertex per top segment, spread along the whole gap.
    #[default]
    Outer,
    /// A single central dart absorbing the mismatch.
    Inner,
}

/// Method selectors for one bridge invocation.
///
/// Both styles are always carried; the classified topology picks which one
/// applies, mirroring the two prompt values of the interactive flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeMethod {
    /// Resolution style for a one-to-two split.
    pub flow: FlowStyle,
    /// Resolution style for an odd gap.
    pub loop_style: LoopStyle,
}

/// New primitives produced by one bridge invocation.
#[derive(Debug, Default)]
pub struct BridgePatch {
    /// Vertices created by the algorithm, in creation order.
    pub new_vertices: Vec<VertexId>,
    /// Faces created by the algorithm, in creation order.
    pub faces: Vec<FaceId>,
}

/// Runs the bridging algorithm selected by `class` and `method`.
///
/// # Errors
///
/// Returns an error if face creation fails or a handle is stale.
pub fn bridge(
    store: &mut MeshStore,
    class: TopologyClass,
    rails: &RailPair,
    method: BridgeMethod,
) -> Result<BridgePatch> {
    let n_top = rails.top.segment_count();
    match class {
        TopologyClass::OneToTwo => bridge_one_to_two(store, rails, method.flow),
        TopologyClass::Gap if n_top % 2 == 1 => match method.loop_style {
            LoopStyle::Outer => bridge_gap_outer(store, &rails.top, &rails.bottom),
            // The inner dart walks the denser rail, so roles swap here.
            LoopStyle::Inner => bridge_gap_inner(store, &rails.bottom, &rails.top),
        },
        TopologyClass::Gap | TopologyClass::General => {
            bridge_general(store, &rails.top, &rails.bottom)
        }
    }
}
