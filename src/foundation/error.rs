/// Convenience result type used across fadegif.
pub type FadeResult<T> = Result<T, FadeError>;

/// Top-level error taxonomy used by the blending pipeline.
#[derive(thiserror::Error, Debug)]
pub enum FadeError {
    /// Invalid user-provided parameters or mismatched image data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Input images that could not be opened or decoded.
    #[error("load error: {0}")]
    Load(String),

    /// Every animation encoder backend failed to write the output.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FadeError {
    /// Build a [`FadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FadeError::Load`] value.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`FadeError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
