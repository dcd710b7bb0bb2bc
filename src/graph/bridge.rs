use std::collections::VecDeque;

use super::multigraph::Multigraph;

/// Reports whether the (u, v) edge is currently a bridge: a breadth-first
/// traversal from `u` that refuses to walk the (u, v) adjacency entry in
/// either direction, returning `true` iff `v` stays unreachable.
///
/// The check is meaningful for multiplicity-1 entries; a parallel bundle is
/// never a bridge, and callers gate on the multiplicity before asking.
pub fn is_bridge(graph: &Multigraph, u: usize, v: usize) -> bool {
    let mut visited = vec![false; graph.vertex_count()];
    let mut queue = VecDeque::new();
    visited[u] = true;
    queue.push_back(u);

    while let Some(x) = queue.pop_front() {
        for (w, _) in graph.neighbors(x) {
            if (x == u && w == v) || (x == v && w == u) {
                continue;
            }
            if !visited[w] {
                if w == v {
                    return false;
                }
                visited[w] = true;
                queue.push_back(w);
            }
        }
    }
    true
}
