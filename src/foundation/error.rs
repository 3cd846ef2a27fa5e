/// Convenience result alias used throughout the crate.
pub type LogoResult<T> = Result<T, LogoError>;

/// Error type for logo generation.
#[derive(thiserror::Error, Debug)]
pub enum LogoError {
    /// Configuration values are out of range or inconsistent.
    #[error("validation error: {0}")]
    Validation(String),

    /// Font loading or text shaping failed.
    #[error("font error: {0}")]
    Font(String),

    /// Rasterization or pixel-buffer handling failed.
    #[error("render error: {0}")]
    Render(String),

    /// Image encoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem access failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other error, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LogoError {
    /// Build a [`LogoError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LogoError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`LogoError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LogoError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
