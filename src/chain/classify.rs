use crate::error::Result;
use crate::math::{Point3, Vector3};
use crate::mesh::MeshStore;

use super::Chain;

/// Mismatch pattern between the two rails.
///
/// A pure function of the two segment counts and the island count, computed
/// fresh on every invocation and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyClass {
    /// One top segment facing two bottom segments.
    OneToTwo,
    /// Segment counts differ by exactly two, with more than one top segment.
    Gap,
    /// Any other pairing, including selections without two usable rails.
    General,
}

/// The two rails after role assignment and orientation normalization.
#[derive(Debug, Clone)]
pub struct RailPair {
    /// The shorter rail (by vertex count).
    pub top: Chain,
    /// The longer rail, reoriented to run the same way as `top`.
    pub bottom: Chain,
}

/// Result of topology analysis for one invocation.
#[derive(Debug, Clone)]
pub struct Classification {
    /// The classified mismatch pattern.
    pub class: TopologyClass,
    /// `None` when the selection did not yield exactly two rails.
    pub rails: Option<RailPair>,
}

/// Assigns rail roles, aligns orientation and classifies the pairing.
///
/// The chain with fewer vertices becomes `top` (ties keep encounter order).
/// The bottom chain is reversed in place when its end-to-end direction
/// opposes the top's, so both rails run the same way along the bridge; the
/// normalization is idempotent. Anything other than exactly two chains
/// yields [`TopologyClass::General`] with no rails.
///
/// # Errors
///
/// Returns an error if any vertex handle is stale.
pub fn classify_rails(store: &MeshStore, mut chains: Vec<Chain>) -> Result<Classification> {
    if chains.len() != 2 {
        return Ok(Classification {
            class: TopologyClass::General,
            rails: None,
        });
    }
    let mut drain = chains.drain(..);
    let (Some(first), Some(second)) = (drain.next(), drain.next()) else {
        return Ok(Classification {
            class: TopologyClass::General,
            rails: None,
        });
    };

    let (top, mut bottom) = if first.len() < second.len() {
        (first, second)
    } else {
        (second, first)
    };

    let d_top = end_direction(&top.positions(store)?);
    let d_bot = end_direction(&bottom.positions(store)?);
    if d_top.dot(&d_bot) < 0.0 {
        bottom.reverse();
    }

    let n_top = top.segment_count();
    let n_bot = bottom.segment_count();
    let class = if n_top == 1 && n_bot == 2 {
        TopologyClass::OneToTwo
    } else if n_top.abs_diff(n_bot) == 2 && n_top > 1 {
        TopologyClass::Gap
    } else {
        TopologyClass::General
    };

    Ok(Classification {
        class,
        rails: Some(RailPair { top, bottom }),
    })
}

/// Vector from the first to the last point, zero for degenerate chains.
fn end_direction(points: &[Point3]) -> Vector3 {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => last - first,
        _ => Vector3::zeros(),
    }
}
