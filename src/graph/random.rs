use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::error::Result;

use super::contraction::{
    check_vertices, contract_to_terminal, ContractionStrategy, EdgeListContraction,
};

/// Uniformly random edge selection over the surviving pool.
struct RandomContraction<'a, R: Rng> {
    state: EdgeListContraction,
    pool: Vec<(usize, usize)>,
    rng: &'a mut R,
}

impl<R: Rng> ContractionStrategy for RandomContraction<'_, R> {
    fn supernodes(&self) -> usize {
        self.state.supernodes()
    }

    fn select(&mut self) -> Option<(usize, usize)> {
        while !self.pool.is_empty() {
            let idx = self.rng.gen_range(0..self.pool.len());
            let (u, v) = self.pool[idx];
            if self.state.same_supernode(u, v) {
                // Collapsed into a self-loop by an earlier contraction:
                // discard and draw again.
                self.pool.swap_remove(idx);
                continue;
            }
            return Some((u, v));
        }
        None
    }

    fn contract(&mut self, u: usize, v: usize) {
        self.state.contract(u, v);
    }
}

/// Karger's randomized contraction with an explicit seed.
///
/// # Arguments
/// - `n`: Number of vertices (0-indexed ids).
/// - `edges`: Undirected edges as (u, v) pairs; duplicates and self-loops
///   are permitted, self-loops are ignored.
/// - `seed`: Seeds the ChaCha20 generator driving edge selection. The same
///   seed over the same input reproduces the exact contraction sequence
///   and cut value.
///
/// # Returns
/// The cut value found by this single contraction run — an upper bound on
/// the true minimum cut, and 0 for disconnected input.
pub fn min_cut_random(n: usize, edges: &[(usize, usize)], seed: u64) -> Result<usize> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    min_cut_random_with_rng(n, edges, &mut rng)
}

/// Same contraction run driven by a caller-supplied generator.
pub fn min_cut_random_with_rng<R: Rng>(
    n: usize,
    edges: &[(usize, usize)],
    rng: &mut R,
) -> Result<usize> {
    check_vertices(n, edges)?;
    let cut = run_trial(n, edges, rng);
    debug!("random contraction: n={n}, m={}, cut={cut}", edges.len());
    Ok(cut)
}

/// Best cut over `trials` independent contraction runs drawn from one
/// seeded stream. More trials raise the chance of hitting the true
/// minimum; `trials` of 0 is treated as 1.
pub fn min_cut_random_trials(
    n: usize,
    edges: &[(usize, usize)],
    trials: usize,
    seed: u64,
) -> Result<usize> {
    check_vertices(n, edges)?;
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let mut best = run_trial(n, edges, &mut rng);
    for _ in 1..trials {
        best = best.min(run_trial(n, edges, &mut rng));
    }
    debug!(
        "random contraction over {} trials: n={n}, m={}, best cut={best}",
        trials.max(1),
        edges.len()
    );
    Ok(best)
}

fn run_trial<R: Rng>(n: usize, edges: &[(usize, usize)], rng: &mut R) -> usize {
    if n <= 1 {
        return 0;
    }
    let pool: Vec<(usize, usize)> = edges.iter().copied().filter(|&(u, v)| u != v).collect();
    let mut strategy = RandomContraction {
        state: EdgeListContraction::new(n),
        pool,
        rng,
    };
    contract_to_terminal(&mut strategy);
    strategy.state.crossing_edges(n, edges)
}
