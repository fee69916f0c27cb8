use thiserror::Error;

/// Top-level error type for the railbridge crate.
#[derive(Debug, Error)]
pub enum RailBridgeError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Errors related to the host mesh arena.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("entity not found: {0}")]
    EntityNotFound(&'static str),

    #[error("edge endpoints must be distinct")]
    DegenerateEdge,

    #[error("face needs at least 3 vertices, got {0}")]
    FaceTooFewVertices(usize),

    #[error("face boundary contains a repeated vertex")]
    FaceDuplicateVertex,
}

/// Errors related to rail extraction and classification.
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("selection does not form exactly two open rails ({islands} usable islands)")]
    NotTwoRails { islands: usize },
}

/// Convenience type alias for results using [`RailBridgeError`].
pub type Result<T> = std::result::Result<T, RailBridgeError>;
