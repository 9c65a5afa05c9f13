pub type FramesResult<T> = Result<T, FramesError>;

/// Failure while building, rasterizing or writing frames.
#[derive(thiserror::Error, Debug)]
pub enum FramesError {
    /// Bad input: unknown state or style, phase out of range, mismatched canvas sizes.
    #[error("validation error: {0}")]
    Validation(String),

    /// PNG or manifest bytes could not be produced or read back.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem or thread pool failure.
    #[error("io error: {0}")]
    Io(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramesError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }
}
