use thiserror::Error;

/// Result type of the fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Values and elements must pair 1:1.
    #[error("{values} values given for {elements} elements")]
    LengthMismatch { values: usize, elements: usize },

    /// The interpolation denominator `n - 1` must be positive.
    #[error("at least 2 interpolation steps are required, got {0}")]
    Steps(u32),

    #[error("not a color “{0}”")]
    Color(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid heatmap table: {0}")]
    Json(#[from] serde_json::Error),
}
