use thiserror::Error;

/// Errors reported by the min-cut entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An edge refers to a vertex id outside the declared `0..vertices` range.
    #[error("vertex {vertex} out of range for a graph with {vertices} vertices")]
    InvalidVertex { vertex: usize, vertices: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
