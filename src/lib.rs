pub mod error;
pub mod graph;

pub use error::{Error, Result};
pub use graph::{
    min_cut_degree_biased, min_cut_fixed_order, min_cut_random, min_cut_random_trials,
    min_cut_random_with_rng,
};
