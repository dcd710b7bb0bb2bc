use log::debug;

use crate::error::Result;

use super::bridge::is_bridge;
use super::contraction::{contract_to_terminal, ContractionStrategy};
use super::multigraph::Multigraph;

/// Degree-biased deterministic edge selection over the live multigraph.
struct DegreeBiasedContraction {
    graph: Multigraph,
}

impl DegreeBiasedContraction {
    /// Scans every adjacent active pair `u < v` for the one maximizing
    /// `degree(u) * degree(v)`, ties broken lexicographically by `(u, v)`.
    ///
    /// A multiplicity-1 edge confirmed as a structural bridge is deferred:
    /// contracting it early would destroy the very cut the algorithm is
    /// after, so it only becomes eligible once no non-bridge candidate
    /// remains (the lexicographically smallest bridge is taken then).
    fn select_pair(&self) -> Option<(usize, usize)> {
        let mut best: Option<(u64, usize, usize)> = None;
        let mut deferred: Option<(usize, usize)> = None;

        for u in self.graph.active_vertices() {
            let deg_u = self.graph.degree(u) as u64;
            for (v, mult) in self.graph.neighbors(u) {
                if v <= u {
                    continue;
                }
                if mult == 1 && is_bridge(&self.graph, u, v) {
                    if deferred.map_or(true, |pair| (u, v) < pair) {
                        deferred = Some((u, v));
                    }
                    continue;
                }
                let score = deg_u * self.graph.degree(v) as u64;
                let better = match best {
                    None => true,
                    Some((s, bu, bv)) => score > s || (score == s && (u, v) < (bu, bv)),
                };
                if better {
                    best = Some((score, u, v));
                }
            }
        }
        best.map(|(_, u, v)| (u, v)).or(deferred)
    }

    /// Multiplicity between the two surviving supernodes, 0 when the input
    /// was disconnected and no edge remains between live vertices.
    fn cut_value(&self) -> usize {
        let mut live = self.graph.active_vertices();
        let (Some(a), Some(b)) = (live.next(), live.next()) else {
            return 0;
        };
        self.graph.multiplicity(a, b)
    }
}

impl ContractionStrategy for DegreeBiasedContraction {
    fn supernodes(&self) -> usize {
        self.graph.active_count()
    }

    fn select(&mut self) -> Option<(usize, usize)> {
        self.select_pair()
    }

    fn contract(&mut self, u: usize, v: usize) {
        // Selection yields u < v, so the larger index merges into the
        // smaller one.
        self.graph.contract(u, v);
    }
}

/// Degree-biased deterministic contraction with bridge protection.
///
/// At every step the adjacent pair with the largest degree product is
/// contracted, merging the densest regions first so that weakly connected
/// seams — the probable minimum cut — survive until the end. Multiplicity-1
/// edges that are currently bridges are contracted only as a last resort.
///
/// # Arguments
/// - `n`: Number of vertices (0-indexed ids).
/// - `edges`: Undirected edges as (u, v) pairs; duplicates and self-loops
///   are permitted, self-loops are ignored.
///
/// # Returns
/// The deterministic cut value: the edge multiplicity left between the two
/// final supernodes, 0 for trivial or disconnected input.
pub fn min_cut_degree_biased(n: usize, edges: &[(usize, usize)]) -> Result<usize> {
    let graph = Multigraph::from_edges(n, edges)?;
    if n <= 1 {
        return Ok(0);
    }
    let mut strategy = DegreeBiasedContraction { graph };
    contract_to_terminal(&mut strategy);
    let cut = strategy.cut_value();
    debug!(
        "degree-biased contraction: n={n}, m={}, cut={cut}",
        edges.len()
    );
    Ok(cut)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn cut(n: usize, edges: &[(usize, usize)]) -> usize {
        min_cut_degree_biased(n, edges).unwrap()
    }

    #[test]
    fn test_triangle() {
        assert_eq!(cut(3, &[(0, 1), (1, 2), (0, 2)]), 2);
    }

    #[test]
    fn test_star() {
        assert_eq!(cut(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]), 1);
    }

    #[test]
    fn test_complete_k4() {
        let edges = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];
        assert_eq!(cut(4, &edges), 3);
    }

    #[test]
    fn test_complete_k5() {
        let edges = [
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
            (3, 4),
        ];
        assert_eq!(cut(5, &edges), 4);
    }

    #[test]
    fn test_k5_minus_one_edge() {
        let edges = [
            (0, 1),
            (0, 2),
            (0, 3),
            (0, 4),
            (1, 2),
            (1, 3),
            (1, 4),
            (2, 3),
            (2, 4),
        ];
        assert_eq!(cut(5, &edges), 3);
    }

    #[test]
    fn test_square_with_diagonal() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];
        assert_eq!(cut(4, &edges), 2);
    }

    #[test]
    fn test_two_triangles_with_bridge() {
        // The bridge protection keeps (2, 3) uncontracted, so the true
        // minimum of 1 is found.
        let edges = [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)];
        assert_eq!(cut(6, &edges), 1);
    }

    #[test]
    fn test_barbell_with_double_bridge() {
        let edges = [
            (0, 1),
            (1, 2),
            (0, 2),
            (3, 4),
            (4, 5),
            (3, 5),
            (2, 3),
            (2, 3),
        ];
        assert_eq!(cut(6, &edges), 2);
    }

    #[test]
    fn test_lollipop() {
        // K3 with a two-edge tail hanging off vertex 2.
        let edges = [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4)];
        assert_eq!(cut(5, &edges), 1);
    }

    #[test]
    fn test_bowtie() {
        // Two triangles sharing vertex 2.
        let edges = [(0, 1), (1, 2), (0, 2), (2, 3), (3, 4), (2, 4)];
        assert_eq!(cut(5, &edges), 2);
    }

    #[test]
    fn test_c4_with_diagonal() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 0), (1, 3)];
        assert_eq!(cut(4, &edges), 2);
    }

    #[test]
    fn test_c5_with_chord() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2)];
        assert_eq!(cut(5, &edges), 2);
    }

    #[test]
    fn test_c6_with_symmetric_chords() {
        let edges = [
            (0, 1),
            (1, 2),
            (2, 3),
            (3, 4),
            (4, 5),
            (5, 0),
            (0, 3),
            (1, 4),
        ];
        assert_eq!(cut(6, &edges), 2);
    }

    #[test]
    fn test_triangle_with_asymmetric_multiplicities() {
        let edges = [(0, 1), (0, 1), (0, 1), (1, 2), (2, 0)];
        assert_eq!(cut(3, &edges), 2);
    }

    #[test]
    fn test_k4_with_doubled_pendant() {
        let edges = [
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 2),
            (1, 3),
            (2, 3),
            (3, 4),
            (3, 4),
        ];
        assert_eq!(cut(5, &edges), 2);
    }

    #[test]
    fn test_weighted_star() {
        let edges = [(0, 1), (0, 1), (0, 2), (0, 2), (0, 2), (0, 3), (0, 4)];
        assert_eq!(cut(5, &edges), 1);
    }

    #[test]
    fn test_dual_path_bottleneck() {
        let edges = [
            (0, 1),
            (1, 0),
            (2, 3),
            (3, 2),
            (0, 4),
            (4, 5),
            (5, 2),
            (1, 6),
            (6, 7),
            (7, 3),
        ];
        assert_eq!(cut(8, &edges), 2);
    }

    #[test]
    fn test_parallel_edges_accumulate() {
        assert_eq!(cut(2, &[(0, 1), (0, 1), (0, 1)]), 3);
    }

    #[test]
    fn test_isolated_vertices_report_zero() {
        assert_eq!(cut(5, &[(0, 1), (1, 2), (0, 2)]), 0);
    }

    #[test]
    fn test_disconnected_input_reports_zero() {
        assert_eq!(cut(5, &[(0, 1)]), 0);
        assert_eq!(cut(3, &[]), 0);
    }

    #[test]
    fn test_self_loops_are_ignored() {
        let edges = [(0, 1), (1, 1), (1, 2), (0, 2), (2, 2)];
        assert_eq!(cut(3, &edges), 2);
    }

    #[test]
    fn test_trivial_graphs_report_zero() {
        assert_eq!(cut(0, &[]), 0);
        assert_eq!(cut(1, &[]), 0);
    }

    #[test]
    fn test_repeat_invocations_agree() {
        let edges = [(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)];
        assert_eq!(cut(6, &edges), cut(6, &edges));
    }

    #[test]
    fn test_out_of_range_vertex_rejected() {
        let err = min_cut_degree_biased(4, &[(0, 7)]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVertex {
                vertex: 7,
                vertices: 4
            }
        );
    }
}
