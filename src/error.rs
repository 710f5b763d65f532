use thiserror::Error;

/// Top-level error type for maze assembly and navigation.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error(transparent)]
    Site(#[from] SiteError),

    #[error(transparent)]
    Factory(#[from] FactoryError),
}

/// Errors related to the products of a maze and their wiring.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("room is not connected to this door")]
    NotAdjacent,

    #[error("door has no room on the other side")]
    Unconnected,
}

/// Errors raised by a factory while producing a product.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FactoryError {
    #[error("factory exhausted while making {0}")]
    Exhausted(&'static str),

    #[error("factory failed: {0}")]
    Failed(String),
}

/// Convenience type alias for results using [`MazeError`].
pub type Result<T> = std::result::Result<T, MazeError>;
