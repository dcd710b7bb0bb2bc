use std::cmp::Ordering;

/// Disjoint-set (union-find) tracking which vertices have been merged into
/// which supernode during contraction.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<usize>,
}

impl UnionFind {
    /// Initializes a union-find for `n` elements (0..n-1), each its own set.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    /// Finds the representative (root) of the set containing `x`.
    ///
    /// Iterative two-pass path compression: locate the root, then repoint
    /// every node on the walked chain directly at it. Stack depth stays
    /// constant no matter how long the parent chain is.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut cur = x;
        while self.parent[cur] != root {
            let next = self.parent[cur];
            self.parent[cur] = root;
            cur = next;
        }
        root
    }

    /// Unites the sets containing `x` and `y`.
    ///
    /// Union by rank; on equal rank the lower-indexed root survives and its
    /// rank increments. Returns `true` if a merge actually occurred.
    pub fn union(&mut self, x: usize, y: usize) -> bool {
        let x_root = self.find(x);
        let y_root = self.find(y);
        if x_root == y_root {
            return false;
        }
        match self.rank[x_root].cmp(&self.rank[y_root]) {
            Ordering::Less => self.parent[x_root] = y_root,
            Ordering::Greater => self.parent[y_root] = x_root,
            Ordering::Equal => {
                let (keep, absorb) = if x_root < y_root {
                    (x_root, y_root)
                } else {
                    (y_root, x_root)
                };
                self.parent[absorb] = keep;
                self.rank[keep] += 1;
            }
        }
        true
    }
}
