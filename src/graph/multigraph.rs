use std::collections::HashMap;

use crate::error::Result;

use super::contraction::check_vertices;

/// Undirected multigraph stored as one adjacency map per vertex,
/// `adj[u][v]` = multiplicity of the (u, v) edge.
///
/// Supernode identity over time is the active-vertex bookkeeping itself:
/// a contracted vertex is deactivated and its adjacency drained, while the
/// surviving vertex keeps representing the merged group. The structure is
/// symmetric (`adj[u][v] == adj[v][u]`) and never holds self-loop entries.
#[derive(Debug)]
pub struct Multigraph {
    adj: Vec<HashMap<usize, usize>>,
    active: Vec<bool>,
    live: usize,
}

impl Multigraph {
    /// Builds the adjacency structure from an edge list.
    ///
    /// Self-loops are filtered here and never enter the structure. Returns
    /// [`Error::InvalidVertex`](crate::Error::InvalidVertex) if an endpoint
    /// falls outside `0..n`.
    pub fn from_edges(n: usize, edges: &[(usize, usize)]) -> Result<Self> {
        check_vertices(n, edges)?;
        let mut graph = Self {
            adj: vec![HashMap::new(); n],
            active: vec![true; n],
            live: n,
        };
        for &(u, v) in edges {
            if u != v {
                graph.add_edge(u, v);
            }
        }
        Ok(graph)
    }

    fn add_edge(&mut self, u: usize, v: usize) {
        *self.adj[u].entry(v).or_insert(0) += 1;
        *self.adj[v].entry(u).or_insert(0) += 1;
    }

    /// Number of originally declared vertices.
    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of supernodes still live.
    pub fn active_count(&self) -> usize {
        self.live
    }

    pub fn is_active(&self, u: usize) -> bool {
        self.active[u]
    }

    /// Live supernodes in ascending vertex order.
    pub fn active_vertices(&self) -> impl Iterator<Item = usize> + '_ {
        self.active
            .iter()
            .enumerate()
            .filter_map(|(u, &alive)| alive.then_some(u))
    }

    /// Current multiplicity of the (u, v) edge, 0 when the pair is not
    /// adjacent.
    pub fn multiplicity(&self, u: usize, v: usize) -> usize {
        self.adj[u].get(&v).copied().unwrap_or(0)
    }

    /// Sum of edge multiplicities incident to `u`.
    ///
    /// Recomputed from the adjacency map on every call; callers that need
    /// it repeatedly pay O(degree) each time.
    pub fn degree(&self, u: usize) -> usize {
        self.adj[u].values().sum()
    }

    /// Current neighbors of `u` with their multiplicities.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adj[u].iter().map(|(&v, &mult)| (v, mult))
    }

    /// Contracts the (u, v) edge, merging supernode `v` into `u`.
    ///
    /// Requires `u < v` with both vertices active. Every edge incident to
    /// `v` is redirected to `u`; parallel edges accumulate multiplicity
    /// instead of collapsing, and the contracted edge itself disappears so
    /// no self-loop survives.
    pub fn contract(&mut self, u: usize, v: usize) {
        debug_assert!(u < v, "contract expects the smaller index first");
        debug_assert!(self.active[u] && self.active[v]);

        let absorbed = std::mem::take(&mut self.adj[v]);
        for (w, mult) in absorbed {
            if w == u {
                continue;
            }
            *self.adj[u].entry(w).or_insert(0) += mult;
            self.adj[w].remove(&v);
            *self.adj[w].entry(u).or_insert(0) += mult;
        }
        // The contracted edge itself would now be a self-loop on u.
        self.adj[u].remove(&v);
        self.active[v] = false;
        self.live -= 1;
    }
}
