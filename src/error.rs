use thiserror::Error;

/// Failures surfaced by texture generation and emission.
///
/// Noise evaluation itself is total for valid parameters; everything that
/// can fail lives at the configuration and file-emission boundaries. There
/// is no partial-output or degraded fallback mode.
#[derive(Debug, Error)]
pub enum Error {
    /// A generation parameter violated its precondition.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The image encoder rejected the atlas or the write failed.
    #[error("failed to write atlas image: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem failure outside the encoder, e.g. creating the output
    /// directory.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
