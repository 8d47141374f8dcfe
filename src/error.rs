use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the simulation and its output path.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid simulation parameter (non-positive timestep, zero step count).
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Propagated I/O errors from the trajectory export.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
