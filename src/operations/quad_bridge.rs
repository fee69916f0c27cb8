use crate::bridge::{self, BridgeMethod, BridgePatch, FlowStyle, LoopStyle};
use crate::chain::{classify_rails, extract_chains, TopologyClass};
use crate::error::{ChainError, Result};
use crate::mesh::MeshStore;

/// Bridges the two rails formed by the current edge selection with a
/// quad-dominant patch.
///
/// The interactive flow is two-phase: [`QuadBridge::classify`] first,
/// without mutating, so the caller can decide which method prompt (if any)
/// to show; then [`QuadBridge::execute`] re-derives the topology from the
/// live selection and commits the patch. Nothing is cached between the two
/// phases — the host may invalidate handles in between, so the second phase
/// must start from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadBridge {
    method: BridgeMethod,
}

/// What one executed bridge produced.
#[derive(Debug)]
pub struct BridgeOutcome {
    /// The topology classification the patch was built for.
    pub class: TopologyClass,
    /// The vertices and faces created.
    pub patch: BridgePatch,
}

impl QuadBridge {
    /// Creates a new `QuadBridge` operation with default method choices.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects how a one-to-two split is resolved.
    #[must_use]
    pub fn with_flow(mut self, flow: FlowStyle) -> Self {
        self.method.flow = flow;
        self
    }

    /// Selects how an odd gap is resolved.
    #[must_use]
    pub fn with_loop(mut self, loop_style: LoopStyle) -> Self {
        self.method.loop_style = loop_style;
        self
    }

    /// Phase one: classifies the current selection without mutating the
    /// mesh.
    ///
    /// Returns `None` for an empty selection. A result of
    /// [`TopologyClass::OneToTwo`] or [`TopologyClass::Gap`] means a method
    /// choice applies before execution; [`TopologyClass::General`] needs no
    /// prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if any selected edge handle is stale.
    pub fn classify(&self, store: &MeshStore) -> Result<Option<TopologyClass>> {
        let selected = store.selected_edges();
        if selected.is_empty() {
            return Ok(None);
        }
        let chains = extract_chains(store, &selected)?;
        Ok(Some(classify_rails(store, chains)?.class))
    }

    /// Phase two: re-derives the topology from the live selection, runs the
    /// selected bridging algorithm and recomputes the normals of the new
    /// faces.
    ///
    /// An empty selection is a silent no-op (`Ok(None)`). All mesh mutation
    /// happens here, after classification succeeds; a selection that does
    /// not yield two usable rails aborts before any vertex or face is
    /// created.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::NotTwoRails`] when the selection has no two
    /// linearizable islands, or an error if face creation fails or a handle
    /// is stale.
    pub fn execute(&self, store: &mut MeshStore) -> Result<Option<BridgeOutcome>> {
        let selected = store.selected_edges();
        if selected.is_empty() {
            return Ok(None);
        }

        let chains = extract_chains(store, &selected)?;
        let islands = chains.len();
        let classification = classify_rails(store, chains)?;
        let Some(rails) = classification.rails else {
            return Err(ChainError::NotTwoRails { islands }.into());
        };

        let patch = bridge::bridge(store, classification.class, &rails, self.method)?;
        store.recompute_normals(&patch.faces)?;
        Ok(Some(BridgeOutcome {
            class: classification.class,
            patch,
        }))
    }
}
