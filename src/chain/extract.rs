use slotmap::SecondaryMap;

use crate::error::MeshError;
use crate::mesh::{EdgeId, MeshStore, VertexId};

use super::Chain;

/// Adjacency of a selected-edge graph: vertex → incident edges.
///
/// Built once per invocation from the flat edge set and discarded with it.
#[derive(Debug, Default)]
pub struct EdgeAdjacency {
    links: SecondaryMap<VertexId, Vec<EdgeId>>,
}

impl EdgeAdjacency {
    /// Builds the adjacency map for a set of edges.
    ///
    /// # Errors
    ///
    /// Returns an error if any edge handle is stale.
    pub fn build(store: &MeshStore, edges: &[EdgeId]) -> Result<Self, MeshError> {
        let mut links: SecondaryMap<VertexId, Vec<EdgeId>> = SecondaryMap::new();
        for &id in edges {
            let edge = store.edge(id)?;
            for v in [edge.start, edge.end] {
                match links.get_mut(v) {
                    Some(incident) => incident.push(id),
                    None => {
                        links.insert(v, vec![id]);
                    }
                }
            }
        }
        Ok(Self { links })
    }

    /// Edges incident to `v` within the graph.
    #[must_use]
    pub fn incident(&self, v: VertexId) -> &[EdgeId] {
        self.links.get(v).map_or(&[], Vec::as_slice)
    }

    /// Number of incident edges of `v`.
    #[must_use]
    pub fn degree(&self, v: VertexId) -> usize {
        self.incident(v).len()
    }

    /// All vertices touched by the graph, in slot order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.links.keys()
    }
}

/// Partitions a flat edge set into connected components and linearizes each
/// into an ordered open chain.
///
/// Components with no degree-1 vertex (pure cycles) or with branching that
/// breaks the unique-successor walk are dropped silently; callers must treat
/// "fewer than two chains" as "cannot bridge".
///
/// # Errors
///
/// Returns an error if any edge handle is stale.
pub fn extract_chains(store: &MeshStore, edges: &[EdgeId]) -> Result<Vec<Chain>, MeshError> {
    let adjacency = EdgeAdjacency::build(store, edges)?;
    let mut visited: SecondaryMap<VertexId, ()> = SecondaryMap::new();
    let mut chains = Vec::new();

    for seed in adjacency.vertices() {
        if visited.contains_key(seed) {
            continue;
        }
        let component = collect_component(store, &adjacency, seed, &mut visited)?;
        if let Some(chain) = linearize(store, &adjacency, &component)? {
            chains.push(chain);
        }
    }
    Ok(chains)
}

/// Depth-first collection of the component containing `seed`.
fn collect_component(
    store: &MeshStore,
    adjacency: &EdgeAdjacency,
    seed: VertexId,
    visited: &mut SecondaryMap<VertexId, ()>,
) -> Result<Vec<VertexId>, MeshError> {
    let mut stack = vec![seed];
    let mut component = Vec::new();
    while let Some(v) = stack.pop() {
        if visited.contains_key(v) {
            continue;
        }
        visited.insert(v, ());
        component.push(v);
        for &id in adjacency.incident(v) {
            if let Some(other) = store.edge(id)?.other_vertex(v) {
                if !visited.contains_key(other) {
                    stack.push(other);
                }
            }
        }
    }
    Ok(component)
}

/// Orders a component into an open chain starting at a degree-1 endpoint.
///
/// Returns `None` for components that are not a simple open path.
fn linearize(
    store: &MeshStore,
    adjacency: &EdgeAdjacency,
    component: &[VertexId],
) -> Result<Option<Chain>, MeshError> {
    let Some(&start) = component.iter().find(|&&v| adjacency.degree(v) == 1) else {
        // Pure cycle, no endpoint to start from.
        return Ok(None);
    };

    let mut in_chain: SecondaryMap<VertexId, ()> = SecondaryMap::new();
    in_chain.insert(start, ());
    let mut ordered = vec![start];

    while ordered.len() < component.len() {
        let prev = ordered[ordered.len() - 1];
        let mut next = None;
        for &id in adjacency.incident(prev) {
            if let Some(candidate) = store.edge(id)?.other_vertex(prev) {
                if !in_chain.contains_key(candidate) {
                    next = Some(candidate);
                    break;
                }
            }
        }
        let Some(next) = next else {
            // The walk stalled before consuming the component: branching.
            return Ok(None);
        };
        in_chain.insert(next, ());
        ordered.push(next);
    }
    Ok(Some(Chain::new(ordered)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    fn line_chain(store: &mut MeshStore, points: &[(f64, f64, f64)]) -> Vec<EdgeId> {
        let verts: Vec<VertexId> = points
            .iter()
            .map(|&(x, y, z)| store.add_vertex(Point3::new(x, y, z)))
            .collect();
        verts
            .windows(2)
            .map(|w| store.add_edge(w[0], w[1]).unwrap())
            .collect()
    }

    // ── Open paths ─────────────────────────────────────────────

    #[test]
    fn single_path_is_linearized_end_to_end() {
        let mut store = MeshStore::new();
        let edges = line_chain(
            &mut store,
            &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0), (2.0, 0.0, 0.0), (3.0, 0.0, 0.0)],
        );

        let chains = extract_chains(&store, &edges).unwrap();
        assert_eq!(chains.len(), 1);
        let chain = &chains[0];
        assert_eq!(chain.len(), 4);
        assert_eq!(chain.segment_count(), 3);

        // Endpoints have degree 1, interior vertices degree 2.
        let adjacency = EdgeAdjacency::build(&store, &edges).unwrap();
        let verts = chain.vertices();
        assert_eq!(adjacency.degree(verts[0]), 1);
        assert_eq!(adjacency.degree(verts[3]), 1);
        assert_eq!(adjacency.degree(verts[1]), 2);
    }

    #[test]
    fn two_disjoint_paths_yield_two_chains() {
        let mut store = MeshStore::new();
        let mut edges = line_chain(&mut store, &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
        edges.extend(line_chain(
            &mut store,
            &[(0.0, 0.0, -1.0), (0.5, 0.0, -1.0), (1.0, 0.0, -1.0)],
        ));

        let chains = extract_chains(&store, &edges).unwrap();
        assert_eq!(chains.len(), 2);
        let mut lens: Vec<usize> = chains.iter().map(Chain::len).collect();
        lens.sort_unstable();
        assert_eq!(lens, vec![2, 3]);
    }

    // ── Rejected components ────────────────────────────────────

    #[test]
    fn cycle_is_dropped() {
        let mut store = MeshStore::new();
        let a = store.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = store.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = store.add_vertex(Point3::new(0.5, 1.0, 0.0));
        let edges = vec![
            store.add_edge(a, b).unwrap(),
            store.add_edge(b, c).unwrap(),
            store.add_edge(c, a).unwrap(),
        ];

        let chains = extract_chains(&store, &edges).unwrap();
        assert!(chains.is_empty());
    }

    #[test]
    fn branching_component_is_dropped() {
        let mut store = MeshStore::new();
        // A Y shape: three spokes meeting at a hub.
        let hub = store.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let tips = [
            store.add_vertex(Point3::new(1.0, 0.0, 0.0)),
            store.add_vertex(Point3::new(-1.0, 0.0, 0.0)),
            store.add_vertex(Point3::new(0.0, 1.0, 0.0)),
        ];
        let edges: Vec<EdgeId> = tips
            .iter()
            .map(|&tip| store.add_edge(hub, tip).unwrap())
            .collect();

        let chains = extract_chains(&store, &edges).unwrap();
        assert!(chains.is_empty());
    }

    #[test]
    fn mixed_selection_keeps_only_open_paths() {
        let mut store = MeshStore::new();
        let mut edges = line_chain(&mut store, &[(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);

        // A triangle alongside the open path.
        let a = store.add_vertex(Point3::new(5.0, 0.0, 0.0));
        let b = store.add_vertex(Point3::new(6.0, 0.0, 0.0));
        let c = store.add_vertex(Point3::new(5.5, 1.0, 0.0));
        edges.push(store.add_edge(a, b).unwrap());
        edges.push(store.add_edge(b, c).unwrap());
        edges.push(store.add_edge(c, a).unwrap());

        let chains = extract_chains(&store, &edges).unwrap();
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].len(), 2);
    }
}
