pub mod bridge;
pub mod degree_biased;
pub mod fixed_order;
pub mod multigraph;
pub mod random;
pub mod union_find;

mod contraction;

pub use bridge::is_bridge;
pub use degree_biased::min_cut_degree_biased;
pub use fixed_order::min_cut_fixed_order;
pub use multigraph::Multigraph;
pub use random::{min_cut_random, min_cut_random_trials, min_cut_random_with_rng};
pub use union_find::UnionFind;
