use log::trace;

use crate::error::{Error, Result};

use super::union_find::UnionFind;

/// An edge-selection policy driving the shared contraction loop.
///
/// Implementations own whatever graph state their selection rule needs
/// (a flat edge list over a union-find, or a live adjacency structure) and
/// expose the single capability the loop requires: pick the next eligible
/// edge between two distinct supernodes.
pub(crate) trait ContractionStrategy {
    /// Number of supernodes still live.
    fn supernodes(&self) -> usize;

    /// Selects the next edge to contract, as a pair of vertices belonging
    /// to distinct supernodes, or `None` when no eligible edge remains.
    fn select(&mut self) -> Option<(usize, usize)>;

    /// Merges the supernode containing `v` into the one containing `u`.
    fn contract(&mut self, u: usize, v: usize);
}

/// Runs the contraction loop to its terminal state: two supernodes, or
/// fewer eligible edges than that requires (disconnected input).
pub(crate) fn contract_to_terminal<S: ContractionStrategy>(strategy: &mut S) {
    while strategy.supernodes() > 2 {
        let Some((u, v)) = strategy.select() else {
            trace!(
                "no eligible edge with {} supernodes left",
                strategy.supernodes()
            );
            break;
        };
        trace!("contracting ({u}, {v})");
        strategy.contract(u, v);
    }
}

/// Validates that every edge endpoint lies in `0..n`.
pub(crate) fn check_vertices(n: usize, edges: &[(usize, usize)]) -> Result<()> {
    for &(u, v) in edges {
        for vertex in [u, v] {
            if vertex >= n {
                return Err(Error::InvalidVertex {
                    vertex,
                    vertices: n,
                });
            }
        }
    }
    Ok(())
}

/// Contraction state shared by the strategies that work over a flat edge
/// list: a union-find partition plus the live supernode count.
pub(crate) struct EdgeListContraction {
    uf: UnionFind,
    supernodes: usize,
}

impl EdgeListContraction {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            uf: UnionFind::new(n),
            supernodes: n,
        }
    }

    pub(crate) fn supernodes(&self) -> usize {
        self.supernodes
    }

    pub(crate) fn same_supernode(&mut self, u: usize, v: usize) -> bool {
        self.uf.find(u) == self.uf.find(v)
    }

    /// Merges the two supernodes; merging an already-merged pair is a
    /// no-op and does not touch the count.
    pub(crate) fn contract(&mut self, u: usize, v: usize) {
        if self.uf.union(u, v) {
            self.supernodes -= 1;
        }
    }

    /// Counts original edges crossing between the two lowest-indexed
    /// surviving supernodes, 0 when fewer than two groups exist or no edge
    /// crosses (disconnected input).
    pub(crate) fn crossing_edges(&mut self, n: usize, edges: &[(usize, usize)]) -> usize {
        if n == 0 {
            return 0;
        }
        let first = self.uf.find(0);
        let mut second = None;
        for v in 1..n {
            let root = self.uf.find(v);
            if root != first {
                second = Some(root);
                break;
            }
        }
        let Some(second) = second else { return 0 };

        let mut crossing = 0;
        for &(u, v) in edges {
            let a = self.uf.find(u);
            let b = self.uf.find(v);
            if (a == first && b == second) || (a == second && b == first) {
                crossing += 1;
            }
        }
        crossing
    }
}
